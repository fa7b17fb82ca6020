use std::borrow::Cow;

use crate::value::{GenericValue, Result, TypeId, ValueError, ValueType};

/// Exact match, or reinterpretation of a role payload through its underlying type.
pub(crate) fn get_aliased<T: ValueType>(value: &GenericValue) -> Option<T> {
	if let Some(exact) = T::from_value(value) {
		return Some(exact.clone());
	}

	let wanted = T::DESCRIPTOR.type_id;
	if value.is_empty() || value.underlying_type_id() != wanted {
		return None;
	}
	T::take_value(value.to_underlying())
}

/// Value-semantic façade over [`GenericValue`] with checked typed access.
///
/// Retrieval fails closed: a type mismatch yields `None` (or an error from
/// [`TypedValue::get_checked`]), never a panic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypedValue {
	inner: GenericValue,
}

impl TypedValue {
	/// Wrap a registered value.
	pub fn new<T: ValueType>(value: T) -> Self {
		Self {
			inner: GenericValue::new(value),
		}
	}

	/// Replace the held value and its type.
	pub fn assign<T: ValueType>(&mut self, value: T) -> &mut Self {
		self.inner.set(value);
		self
	}

	/// Borrow the type-erased value.
	pub fn as_generic(&self) -> &GenericValue {
		&self.inner
	}

	/// Unwrap into the type-erased value.
	pub fn into_generic(self) -> GenericValue {
		self.inner
	}

	/// Copy out the payload if it is exactly `T`.
	pub fn try_get_exact<T: ValueType>(&self) -> Option<T> {
		T::from_value(&self.inner).cloned()
	}

	/// Copy out the payload as `T`, allowing a role payload to be read as its underlying tuple.
	pub fn try_get<T: ValueType>(&self) -> Option<T> {
		get_aliased(&self.inner)
	}

	/// Borrow the payload if it is exactly `T`.
	pub fn as_ref<T: ValueType>(&self) -> Option<&T> {
		T::from_value(&self.inner)
	}

	/// Like [`TypedValue::try_get`], reporting the held type on mismatch.
	pub fn get_checked<T: ValueType>(&self) -> Result<T> {
		self.try_get().ok_or_else(|| ValueError::ValueTypeMismatch {
			expected: T::DESCRIPTOR.name().into_owned(),
			actual: self.held_name(),
		})
	}

	/// Whether the held value's underlying type is `T` (for example any `float3`-shaped role).
	pub fn underlying_is<T: ValueType>(&self) -> bool {
		!self.inner.is_empty() && self.inner.underlying_type_id() == T::DESCRIPTOR.type_id
	}

	/// Whether a value is held.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// Whether the value is a 1-D or 2-D array.
	pub fn is_array(&self) -> bool {
		self.inner.dimensionality() > 0
	}

	/// Array depth, `-1` when empty.
	pub fn dimensionality(&self) -> i32 {
		self.inner.dimensionality()
	}

	/// Scalar components per element.
	pub fn component_count(&self) -> u32 {
		self.inner.component_count()
	}

	/// Whether elements have more than one component.
	pub fn is_vector_like(&self) -> bool {
		self.inner.component_count() > 1
	}

	/// Exact type id.
	pub fn type_id(&self) -> TypeId {
		self.inner.type_id()
	}

	/// Underlying type id.
	pub fn underlying_type_id(&self) -> TypeId {
		self.inner.underlying_type_id()
	}

	/// Exact type name.
	pub fn type_name(&self) -> Cow<'static, str> {
		self.inner.type_name()
	}

	/// Underlying type name.
	pub fn underlying_type_name(&self) -> Cow<'static, str> {
		self.inner.underlying_type_name()
	}

	fn held_name(&self) -> String {
		if self.inner.is_empty() { "(empty)".to_owned() } else { self.inner.type_name().into_owned() }
	}
}

impl From<GenericValue> for TypedValue {
	fn from(inner: GenericValue) -> Self {
		Self { inner }
	}
}

impl From<TypedValue> for GenericValue {
	fn from(value: TypedValue) -> Self {
		value.inner
	}
}
