use std::borrow::Cow;
use std::fmt;

use crate::value::registry::type_name;
use crate::value::types::*;
use crate::value::{Dictionary, Half};

macro_rules! define_base_type {
	($($variant:ident($ty:ty) = $id:literal, $name:literal, $components:literal => $under:ident($under_ty:ty);)*) => {
		/// Closed set of element kinds a value can hold.
		#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
		#[repr(u32)]
		pub enum BaseType {
			$(
				#[doc = concat!("`", $name, "`")]
				$variant = $id,
			)*
		}

		impl BaseType {
			/// Every base type in id order.
			pub const ALL: &'static [BaseType] = &[$(Self::$variant),*];

			/// Decode a raw base id (no array bits).
			pub const fn from_raw(raw: u32) -> Option<Self> {
				match raw {
					$($id => Some(Self::$variant),)*
					_ => None,
				}
			}

			/// Raw base id.
			pub const fn raw(self) -> u32 {
				self as u32
			}

			/// Registered type name.
			pub const fn name(self) -> &'static str {
				match self {
					$(Self::$variant => $name,)*
				}
			}

			/// Scalar components per element.
			pub const fn component_count(self) -> u32 {
				match self {
					$(Self::$variant => $components,)*
				}
			}

			/// Base type whose layout this one shares (`self` for plain types).
			pub const fn underlying(self) -> Self {
				match self {
					$(Self::$variant => Self::$under,)*
				}
			}

			/// In-memory size of one element.
			pub const fn element_size(self) -> usize {
				match self {
					$(Self::$variant => size_of::<$ty>(),)*
				}
			}
		}
	};
}

for_each_value_type!(define_base_type);

impl BaseType {
	/// Whether this is a role over a different tuple type.
	pub const fn is_role(self) -> bool {
		self.underlying().raw() != self.raw()
	}
}

impl fmt::Display for BaseType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Nesting level of a value: scalar, list, or list of lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ArrayDepth {
	/// Single element.
	Scalar,
	/// Homogeneous list of elements.
	Array,
	/// List of element lists.
	Array2,
}

impl ArrayDepth {
	/// Every depth, shallowest first.
	pub const ALL: [ArrayDepth; 3] = [Self::Scalar, Self::Array, Self::Array2];

	/// Numeric depth (`0`, `1`, `2`).
	pub const fn as_u8(self) -> u8 {
		match self {
			Self::Scalar => 0,
			Self::Array => 1,
			Self::Array2 => 2,
		}
	}

	/// Parse a numeric depth; anything above 2 is unsupported.
	pub const fn from_u8(depth: u8) -> Option<Self> {
		match depth {
			0 => Some(Self::Scalar),
			1 => Some(Self::Array),
			2 => Some(Self::Array2),
			_ => None,
		}
	}

	/// Type name suffix for this depth.
	pub const fn suffix(self) -> &'static str {
		match self {
			Self::Scalar => "",
			Self::Array => "[]",
			Self::Array2 => "[][]",
		}
	}

	const fn bit(self) -> u32 {
		match self {
			Self::Scalar => 0,
			Self::Array => TypeId::ARRAY_1D_BIT,
			Self::Array2 => TypeId::ARRAY_2D_BIT,
		}
	}
}

/// Runtime identifier of one concrete value type.
///
/// The low bits carry the [`BaseType`] id; bit 10 marks a 1-D array and bit 11 a 2-D array.
/// The two bits are never set together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeId(u32);

impl TypeId {
	/// Id of the empty value.
	pub const INVALID: Self = Self(0);
	/// Marker bit for 1-D arrays.
	pub const ARRAY_1D_BIT: u32 = 1 << 10;
	/// Marker bit for 2-D arrays.
	pub const ARRAY_2D_BIT: u32 = 1 << 11;

	const BASE_MASK: u32 = Self::ARRAY_1D_BIT - 1;

	/// Wrap a raw id without validation.
	pub const fn from_raw(raw: u32) -> Self {
		Self(raw)
	}

	/// Raw numeric id.
	pub const fn raw(self) -> u32 {
		self.0
	}

	/// Combine a base type and array depth.
	pub const fn encode(base: BaseType, depth: ArrayDepth) -> Self {
		Self(base.raw() | depth.bit())
	}

	/// Split into base type and array depth; `None` for unregistered or malformed ids.
	pub const fn decode(self) -> Option<(BaseType, ArrayDepth)> {
		let depth = match self.0 & !Self::BASE_MASK {
			0 => ArrayDepth::Scalar,
			Self::ARRAY_1D_BIT => ArrayDepth::Array,
			Self::ARRAY_2D_BIT => ArrayDepth::Array2,
			_ => return None,
		};
		match BaseType::from_raw(self.0 & Self::BASE_MASK) {
			Some(base) => Some((base, depth)),
			None => None,
		}
	}

	/// Base type, if registered.
	pub const fn base(self) -> Option<BaseType> {
		match self.decode() {
			Some((base, _)) => Some(base),
			None => None,
		}
	}

	/// Array depth, if registered.
	pub const fn depth(self) -> Option<ArrayDepth> {
		match self.decode() {
			Some((_, depth)) => Some(depth),
			None => None,
		}
	}

	/// Id of the layout-sharing underlying type at the same depth.
	pub const fn underlying(self) -> Option<Self> {
		match self.decode() {
			Some((base, depth)) => Some(Self::encode(base.underlying(), depth)),
			None => None,
		}
	}

	/// Whether this id names a registered type.
	pub const fn is_valid(self) -> bool {
		self.decode().is_some()
	}

	/// Registered name, or a diagnostic embedding the raw id.
	pub fn name(self) -> Cow<'static, str> {
		type_name(self)
	}
}

impl fmt::Display for TypeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.name())
	}
}

/// Static description of one concrete value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
	/// Exact type id.
	pub type_id: TypeId,
	/// Id of the layout-sharing underlying type.
	pub underlying_type_id: TypeId,
	/// Scalar components per element.
	pub component_count: u32,
	/// `0`, `1`, or `2`; `-1` for the empty value.
	pub array_depth: i32,
}

impl TypeDescriptor {
	/// Descriptor of the empty value.
	pub const INVALID: Self = Self {
		type_id: TypeId::INVALID,
		underlying_type_id: TypeId::INVALID,
		component_count: 0,
		array_depth: -1,
	};

	/// Descriptor of `base` nested `depth` levels deep.
	pub const fn new(base: BaseType, depth: ArrayDepth) -> Self {
		Self {
			type_id: TypeId::encode(base, depth),
			underlying_type_id: TypeId::encode(base.underlying(), depth),
			component_count: base.component_count(),
			array_depth: depth.as_u8() as i32,
		}
	}

	/// Derive the 1-D (`depth == 1`) or 2-D (`depth == 2`) array descriptor from a scalar descriptor.
	pub const fn array_of(self, depth: u8) -> Option<Self> {
		if self.array_depth != 0 {
			return None;
		}
		let Some(base) = self.type_id.base() else {
			return None;
		};
		match ArrayDepth::from_u8(depth) {
			Some(ArrayDepth::Scalar) | None => None,
			Some(depth) => Some(Self::new(base, depth)),
		}
	}

	/// Whether this describes a registered type.
	pub const fn is_valid(&self) -> bool {
		self.type_id.is_valid()
	}

	/// Exact type name.
	pub fn name(&self) -> Cow<'static, str> {
		if self.is_valid() { type_name(self.type_id) } else { Cow::Borrowed("") }
	}

	/// Underlying type name.
	pub fn underlying_name(&self) -> Cow<'static, str> {
		if self.is_valid() {
			type_name(self.underlying_type_id)
		} else {
			Cow::Borrowed("")
		}
	}
}

#[cfg(test)]
mod tests;
