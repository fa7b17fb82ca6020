use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;

use log::{trace, warn};

use crate::value::generic::{Array, Array2, Payload, Scalar};
use crate::value::types::*;
use crate::value::{ArrayDepth, BaseType, Dictionary, GenericValue, Half, TypeDescriptor, TypeId};

mod sealed {
	pub trait Sealed {}
}

/// Concrete Rust type registered in the value universe.
///
/// Implemented for every base type, `Vec` of it, and `Vec<Vec<_>>` of it. The set is closed:
/// using an unregistered type where a `ValueType` is expected fails to compile.
pub trait ValueType: Clone + Send + Sync + 'static + sealed::Sealed {
	/// Static descriptor of this type.
	const DESCRIPTOR: TypeDescriptor;

	/// Wrap into a type-erased value.
	fn into_value(self) -> GenericValue;

	/// Borrow the payload if `value` holds exactly this type.
	fn from_value(value: &GenericValue) -> Option<&Self>;

	/// Move the payload out if `value` holds exactly this type.
	fn take_value(value: GenericValue) -> Option<Self>;
}

/// Descriptor of `T`.
pub const fn descriptor_of<T: ValueType>() -> TypeDescriptor {
	T::DESCRIPTOR
}

/// 1-D or 2-D array descriptor derived from scalar type `T`.
pub const fn array_descriptor_of<T: ValueType>(depth: u8) -> Option<TypeDescriptor> {
	T::DESCRIPTOR.array_of(depth)
}

macro_rules! impl_value_types {
	($($variant:ident($ty:ty) = $id:literal, $name:literal, $components:literal => $under:ident($under_ty:ty);)*) => {
		$(
			impl sealed::Sealed for $ty {}
			impl sealed::Sealed for Vec<$ty> {}
			impl sealed::Sealed for Vec<Vec<$ty>> {}

			impl ValueType for $ty {
				const DESCRIPTOR: TypeDescriptor = TypeDescriptor::new(BaseType::$variant, ArrayDepth::Scalar);

				fn into_value(self) -> GenericValue {
					GenericValue::from_payload(Payload::Scalar(Scalar::$variant(self)))
				}

				fn from_value(value: &GenericValue) -> Option<&Self> {
					match value.payload() {
						Some(Payload::Scalar(Scalar::$variant(inner))) => Some(inner),
						_ => None,
					}
				}

				fn take_value(value: GenericValue) -> Option<Self> {
					match value.into_payload() {
						Some(Payload::Scalar(Scalar::$variant(inner))) => Some(inner),
						_ => None,
					}
				}
			}

			impl ValueType for Vec<$ty> {
				const DESCRIPTOR: TypeDescriptor = TypeDescriptor::new(BaseType::$variant, ArrayDepth::Array);

				fn into_value(self) -> GenericValue {
					GenericValue::from_payload(Payload::Array(Array::$variant(self)))
				}

				fn from_value(value: &GenericValue) -> Option<&Self> {
					match value.payload() {
						Some(Payload::Array(Array::$variant(inner))) => Some(inner),
						_ => None,
					}
				}

				fn take_value(value: GenericValue) -> Option<Self> {
					match value.into_payload() {
						Some(Payload::Array(Array::$variant(inner))) => Some(inner),
						_ => None,
					}
				}
			}

			impl ValueType for Vec<Vec<$ty>> {
				const DESCRIPTOR: TypeDescriptor = TypeDescriptor::new(BaseType::$variant, ArrayDepth::Array2);

				fn into_value(self) -> GenericValue {
					GenericValue::from_payload(Payload::Array2(Array2::$variant(self)))
				}

				fn from_value(value: &GenericValue) -> Option<&Self> {
					match value.payload() {
						Some(Payload::Array2(Array2::$variant(inner))) => Some(inner),
						_ => None,
					}
				}

				fn take_value(value: GenericValue) -> Option<Self> {
					match value.into_payload() {
						Some(Payload::Array2(Array2::$variant(inner))) => Some(inner),
						_ => None,
					}
				}
			}

			impl From<$ty> for GenericValue {
				fn from(value: $ty) -> Self {
					value.into_value()
				}
			}

			impl From<Vec<$ty>> for GenericValue {
				fn from(value: Vec<$ty>) -> Self {
					value.into_value()
				}
			}

			impl From<Vec<Vec<$ty>>> for GenericValue {
				fn from(value: Vec<Vec<$ty>>) -> Self {
					value.into_value()
				}
			}
		)*
	};
}

for_each_value_type!(impl_value_types);

impl From<&str> for GenericValue {
	fn from(value: &str) -> Self {
		value.to_owned().into_value()
	}
}

/// One row of the process-wide type table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
	/// Static descriptor.
	pub descriptor: TypeDescriptor,
	/// Exact type name (`point3f[]`).
	pub name: String,
	/// Underlying type name (`float3[]`).
	pub underlying_name: String,
	/// In-memory size of one element.
	pub element_size: usize,
}

struct TypeTable {
	rows: Vec<TypeInfo>,
	by_id: HashMap<TypeId, usize>,
	by_name: HashMap<String, usize>,
}

impl TypeTable {
	fn build() -> Self {
		let mut rows = Vec::with_capacity(BaseType::ALL.len() * ArrayDepth::ALL.len());
		for depth in ArrayDepth::ALL {
			for &base in BaseType::ALL {
				rows.push(TypeInfo {
					descriptor: TypeDescriptor::new(base, depth),
					name: format!("{}{}", base.name(), depth.suffix()),
					underlying_name: format!("{}{}", base.underlying().name(), depth.suffix()),
					element_size: base.element_size(),
				});
			}
		}

		let by_id = rows.iter().enumerate().map(|(idx, row)| (row.descriptor.type_id, idx)).collect();
		let by_name = rows.iter().enumerate().map(|(idx, row)| (row.name.clone(), idx)).collect();
		trace!("type table built with {} entries", rows.len());

		Self { rows, by_id, by_name }
	}

	fn get(&self, id: TypeId) -> Option<&TypeInfo> {
		self.by_id.get(&id).map(|idx| &self.rows[*idx])
	}
}

static TYPE_TABLE: OnceLock<TypeTable> = OnceLock::new();

fn table() -> &'static TypeTable {
	TYPE_TABLE.get_or_init(TypeTable::build)
}

/// Build the type table now.
///
/// Lookups initialize the table on first use as well; calling this during startup
/// moves the one-time cost out of the first lookup.
pub fn init() {
	let _ = table();
}

/// Registered name for `id`, or a diagnostic string embedding the raw id.
pub fn type_name(id: TypeId) -> Cow<'static, str> {
	match table().get(id) {
		Some(info) => Cow::Borrowed(info.name.as_str()),
		None => {
			warn!("no registered type for id {}", id.raw());
			Cow::Owned(format!("[[unknown type id: {}]]", id.raw()))
		}
	}
}

/// Table row for `id`.
pub fn type_info(id: TypeId) -> Option<&'static TypeInfo> {
	table().get(id)
}

/// Reverse lookup from a type name such as `float3[]`.
pub fn type_id_by_name(name: &str) -> Option<TypeId> {
	let table = table();
	table.by_name.get(name.trim()).map(|idx| table.rows[*idx].descriptor.type_id)
}

/// Every registered type: all scalars first, then 1-D arrays, then 2-D arrays.
pub fn registered_types() -> &'static [TypeInfo] {
	&table().rows
}

#[cfg(test)]
mod tests;
