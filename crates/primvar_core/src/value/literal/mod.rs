//! Conversion from untyped literal trees into typed values.
//!
//! A text or JSON front end produces [`Literal`] trees; [`GenericValue::from_literal`]
//! checks them against a declared type id and builds the matching payload.

use crate::value::registry::type_id_by_name;
use crate::value::types::*;
use crate::value::{ArrayDepth, BaseType, Dictionary, GenericValue, Half, Result, TypeId, ValueError, ValueType};

/// Untyped literal as produced by a front end.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
	/// `true` / `false`.
	Bool(bool),
	/// Integer literal.
	Int(i64),
	/// Integer literal above `i64::MAX`.
	Uint(u64),
	/// Floating-point literal.
	Float(f64),
	/// Quoted text; used for both strings and tokens.
	Text(String),
	/// Bracketed or parenthesized sequence.
	List(Vec<Literal>),
	/// Nested attribute block: `(name, declared type, literal)` entries.
	Dict(Vec<(String, TypeId, Literal)>),
}

impl Literal {
	fn kind(&self) -> &'static str {
		match self {
			Self::Bool(_) => "bool",
			Self::Int(_) | Self::Uint(_) => "integer",
			Self::Float(_) => "float",
			Self::Text(_) => "text",
			Self::List(_) => "list",
			Self::Dict(_) => "dictionary",
		}
	}

	fn list(&self, len: Option<usize>) -> std::result::Result<&[Literal], String> {
		let Self::List(items) = self else {
			return Err(format!("expected a list, found {}", self.kind()));
		};
		match len {
			Some(len) if items.len() != len => Err(format!("expected {len} components, found {}", items.len())),
			_ => Ok(items),
		}
	}
}

trait FromLiteral: Sized {
	fn from_literal(literal: &Literal) -> std::result::Result<Self, String>;
}

impl FromLiteral for bool {
	fn from_literal(literal: &Literal) -> std::result::Result<Self, String> {
		match literal {
			Literal::Bool(value) => Ok(*value),
			Literal::Int(0) => Ok(false),
			Literal::Int(1) => Ok(true),
			other => Err(format!("expected bool, found {}", other.kind())),
		}
	}
}

macro_rules! integer_from_literal {
	($($ty:ty),*) => {
		$(
			impl FromLiteral for $ty {
				fn from_literal(literal: &Literal) -> std::result::Result<Self, String> {
					match literal {
						Literal::Int(value) => <$ty>::try_from(*value).map_err(|_| format!("{value} is out of range")),
						Literal::Uint(value) => <$ty>::try_from(*value).map_err(|_| format!("{value} is out of range")),
						other => Err(format!("expected integer, found {}", other.kind())),
					}
				}
			}
		)*
	};
}

integer_from_literal!(u8, i32, i64, u32, u64);

impl FromLiteral for f64 {
	fn from_literal(literal: &Literal) -> std::result::Result<Self, String> {
		match literal {
			Literal::Float(value) => Ok(*value),
			Literal::Int(value) => Ok(*value as f64),
			Literal::Uint(value) => Ok(*value as f64),
			other => Err(format!("expected number, found {}", other.kind())),
		}
	}
}

impl FromLiteral for f32 {
	fn from_literal(literal: &Literal) -> std::result::Result<Self, String> {
		f64::from_literal(literal).map(|value| value as f32)
	}
}

impl FromLiteral for Half {
	fn from_literal(literal: &Literal) -> std::result::Result<Self, String> {
		f32::from_literal(literal).map(Half::from_f32)
	}
}

impl FromLiteral for String {
	fn from_literal(literal: &Literal) -> std::result::Result<Self, String> {
		match literal {
			Literal::Text(text) => Ok(text.clone()),
			other => Err(format!("expected text, found {}", other.kind())),
		}
	}
}

impl FromLiteral for Token {
	fn from_literal(literal: &Literal) -> std::result::Result<Self, String> {
		String::from_literal(literal).map(Token::new)
	}
}

impl<T: FromLiteral, const N: usize> FromLiteral for [T; N] {
	fn from_literal(literal: &Literal) -> std::result::Result<Self, String> {
		let items = literal.list(Some(N))?.iter().map(T::from_literal).collect::<std::result::Result<Vec<_>, _>>()?;
		items.try_into().map_err(|_| format!("expected {N} components"))
	}
}

impl<T: FromLiteral> FromLiteral for Vec<T> {
	fn from_literal(literal: &Literal) -> std::result::Result<Self, String> {
		literal
			.list(None)?
			.iter()
			.enumerate()
			.map(|(idx, item)| T::from_literal(item).map_err(|reason| format!("element {idx}: {reason}")))
			.collect()
	}
}

macro_rules! quat_from_literal {
	($($ty:ident: $scalar:ty),*) => {
		$(
			impl FromLiteral for $ty {
				fn from_literal(literal: &Literal) -> std::result::Result<Self, String> {
					let [i, j, k, real] = <[$scalar; 4]>::from_literal(literal)?;
					Ok($ty::new([i, j, k], real))
				}
			}
		)*
	};
}

quat_from_literal!(Quath: Half, Quatf: f32, Quatd: f64);

macro_rules! matrix_from_literal {
	($($ty:ident: $n:literal),*) => {
		$(
			impl FromLiteral for $ty {
				fn from_literal(literal: &Literal) -> std::result::Result<Self, String> {
					<[[f64; $n]; $n]>::from_literal(literal).map($ty::from_rows)
				}
			}
		)*
	};
}

matrix_from_literal!(Matrix2d: 2, Matrix3d: 3, Matrix4d: 4);

macro_rules! role_from_literal {
	($($ty:ty),* $(,)?) => {
		$(
			impl FromLiteral for $ty {
				fn from_literal(literal: &Literal) -> std::result::Result<Self, String> {
					<<$ty as Role>::Underlying>::from_literal(literal).map(<$ty as Role>::from_underlying)
				}
			}
		)*
	};
}

role_from_literal!(
	Color3h, Color3f, Color3d, Color4h, Color4f, Color4d, Point3h, Point3f, Point3d, Normal3h, Normal3f, Normal3d, Vector3h, Vector3f, Vector3d, Frame4d, Texcoord2h,
	Texcoord2f, Texcoord2d, Texcoord3h, Texcoord3f, Texcoord3d,
);

impl FromLiteral for Dictionary {
	fn from_literal(literal: &Literal) -> std::result::Result<Self, String> {
		let Literal::Dict(entries) = literal else {
			return Err(format!("expected dictionary, found {}", literal.kind()));
		};
		entries
			.iter()
			.map(|(name, type_id, value)| {
				GenericValue::from_literal(*type_id, value)
					.map(|value| (name.clone(), value))
					.map_err(|err| format!("entry \"{name}\": {err}"))
			})
			.collect()
	}
}

fn convert<T: ValueType + FromLiteral>(literal: &Literal) -> Result<GenericValue> {
	T::from_literal(literal).map(GenericValue::new).map_err(|reason| ValueError::InvalidLiteral {
		type_name: T::DESCRIPTOR.name().into_owned(),
		reason,
	})
}

macro_rules! define_literal_dispatch {
	($($variant:ident($ty:ty) = $id:literal, $name:literal, $components:literal => $under:ident($under_ty:ty);)*) => {
		fn convert_as(base: BaseType, depth: ArrayDepth, literal: &Literal) -> Result<GenericValue> {
			match base {
				$(
					BaseType::$variant => match depth {
						ArrayDepth::Scalar => convert::<$ty>(literal),
						ArrayDepth::Array => convert::<Vec<$ty>>(literal),
						ArrayDepth::Array2 => convert::<Vec<Vec<$ty>>>(literal),
					},
				)*
			}
		}
	};
}

for_each_value_type!(define_literal_dispatch);

impl GenericValue {
	/// Build a value of type `type_id` from `literal`.
	pub fn from_literal(type_id: TypeId, literal: &Literal) -> Result<Self> {
		let Some((base, depth)) = type_id.decode() else {
			return Err(ValueError::InvalidLiteral {
				type_name: type_id.name().into_owned(),
				reason: "type id is not registered".to_owned(),
			});
		};
		convert_as(base, depth, literal)
	}

	/// Build a value of the type named `type_name` (for example `point3f[]`) from `literal`.
	pub fn from_literal_named(type_name: &str, literal: &Literal) -> Result<Self> {
		let type_id = type_id_by_name(type_name).ok_or_else(|| ValueError::UnknownTypeName { name: type_name.to_owned() })?;
		Self::from_literal(type_id, literal)
	}
}
