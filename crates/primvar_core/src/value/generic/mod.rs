use std::borrow::Cow;

use crate::value::types::*;
use crate::value::{ArrayDepth, BaseType, Dictionary, Half, TypeDescriptor, TypeId, ValueType};

macro_rules! define_payloads {
	($($variant:ident($ty:ty) = $id:literal, $name:literal, $components:literal => $under:ident($under_ty:ty);)*) => {
		/// One element of any registered base type.
		#[derive(Debug, Clone, PartialEq)]
		pub(crate) enum Scalar {
			$($variant($ty),)*
		}

		/// Homogeneous list of one registered base type.
		#[derive(Debug, Clone, PartialEq)]
		pub(crate) enum Array {
			$($variant(Vec<$ty>),)*
		}

		/// List of lists of one registered base type.
		#[derive(Debug, Clone, PartialEq)]
		pub(crate) enum Array2 {
			$($variant(Vec<Vec<$ty>>),)*
		}

		impl Scalar {
			pub(crate) fn base(&self) -> BaseType {
				match self {
					$(Self::$variant(_) => BaseType::$variant,)*
				}
			}

			fn to_underlying(&self) -> Self {
				match self {
					$(Self::$variant(value) => Self::$under(<$under_ty>::from(value.clone())),)*
				}
			}
		}

		impl Array {
			pub(crate) fn base(&self) -> BaseType {
				match self {
					$(Self::$variant(_) => BaseType::$variant,)*
				}
			}

			pub(crate) fn len(&self) -> usize {
				match self {
					$(Self::$variant(items) => items.len(),)*
				}
			}

			fn to_underlying(&self) -> Self {
				match self {
					$(Self::$variant(items) => Self::$under(items.iter().cloned().map(<$under_ty>::from).collect()),)*
				}
			}
		}

		impl Array2 {
			pub(crate) fn base(&self) -> BaseType {
				match self {
					$(Self::$variant(_) => BaseType::$variant,)*
				}
			}

			pub(crate) fn len(&self) -> usize {
				match self {
					$(Self::$variant(rows) => rows.len(),)*
				}
			}

			fn to_underlying(&self) -> Self {
				match self {
					$(
						Self::$variant(rows) => Self::$under(
							rows.iter().map(|row| row.iter().cloned().map(<$under_ty>::from).collect()).collect(),
						),
					)*
				}
			}
		}
	};
}

for_each_value_type!(define_payloads);

/// Concrete payload held by a [`GenericValue`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Payload {
	Scalar(Scalar),
	Array(Array),
	Array2(Array2),
}

impl Payload {
	fn descriptor(&self) -> TypeDescriptor {
		match self {
			Self::Scalar(value) => TypeDescriptor::new(value.base(), ArrayDepth::Scalar),
			Self::Array(value) => TypeDescriptor::new(value.base(), ArrayDepth::Array),
			Self::Array2(value) => TypeDescriptor::new(value.base(), ArrayDepth::Array2),
		}
	}

	fn to_underlying(&self) -> Self {
		match self {
			Self::Scalar(value) => Self::Scalar(value.to_underlying()),
			Self::Array(value) => Self::Array(value.to_underlying()),
			Self::Array2(value) => Self::Array2(value.to_underlying()),
		}
	}
}

/// Type-erased holder of exactly one registered value.
///
/// The descriptor always follows the payload: assigning a value of another type replaces both.
/// `Clone` deep-copies the payload; copies never share state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenericValue {
	payload: Option<Payload>,
}

impl GenericValue {
	/// Wrap a registered value.
	pub fn new<T: ValueType>(value: T) -> Self {
		value.into_value()
	}

	/// The empty value: invalid type id, depth `-1`, zero components, empty name.
	pub const fn empty() -> Self {
		Self { payload: None }
	}

	pub(crate) fn from_payload(payload: Payload) -> Self {
		Self { payload: Some(payload) }
	}

	/// Raw payload access, reserved for printing and binding.
	pub(crate) fn payload(&self) -> Option<&Payload> {
		self.payload.as_ref()
	}

	pub(crate) fn into_payload(self) -> Option<Payload> {
		self.payload
	}

	/// Replace payload and descriptor with `value`.
	pub fn set<T: ValueType>(&mut self, value: T) {
		*self = value.into_value();
	}

	/// Whether no payload has been constructed.
	pub fn is_empty(&self) -> bool {
		self.payload.is_none()
	}

	/// Descriptor of the held payload, or [`TypeDescriptor::INVALID`].
	pub fn descriptor(&self) -> TypeDescriptor {
		self.payload.as_ref().map_or(TypeDescriptor::INVALID, Payload::descriptor)
	}

	/// Exact type id.
	pub fn type_id(&self) -> TypeId {
		self.descriptor().type_id
	}

	/// Id of the layout-sharing underlying type.
	pub fn underlying_type_id(&self) -> TypeId {
		self.descriptor().underlying_type_id
	}

	/// Array depth (`0`, `1`, `2`), or `-1` when empty.
	pub fn dimensionality(&self) -> i32 {
		self.descriptor().array_depth
	}

	/// Scalar components per element, or `0` when empty.
	pub fn component_count(&self) -> u32 {
		self.descriptor().component_count
	}

	/// Exact type name; empty when no payload is held.
	pub fn type_name(&self) -> Cow<'static, str> {
		self.descriptor().name()
	}

	/// Underlying type name; empty when no payload is held.
	pub fn underlying_type_name(&self) -> Cow<'static, str> {
		self.descriptor().underlying_name()
	}

	/// Outer element count for arrays.
	pub fn array_len(&self) -> Option<usize> {
		match self.payload.as_ref()? {
			Payload::Scalar(_) => None,
			Payload::Array(items) => Some(items.len()),
			Payload::Array2(rows) => Some(rows.len()),
		}
	}

	/// Borrow the payload if this holds exactly `T`.
	pub fn downcast_ref<T: ValueType>(&self) -> Option<&T> {
		T::from_value(self)
	}

	/// Copy reinterpreted through the underlying layout; plain types copy unchanged.
	pub(crate) fn to_underlying(&self) -> Self {
		Self {
			payload: self.payload.as_ref().map(Payload::to_underlying),
		}
	}
}

#[cfg(test)]
mod tests;
