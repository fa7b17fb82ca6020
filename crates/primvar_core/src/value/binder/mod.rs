use log::debug;

use crate::value::registry::type_name;
use crate::value::typed::get_aliased;
use crate::value::types::*;
use crate::value::{Dictionary, GenericValue, Half, Result, TypeId, ValueError, ValueType};

/// Storage slot a bound attribute is written into.
pub trait FieldTarget {
	/// Whether a value of type `expected` can be stored here.
	fn accepts(&self, expected: TypeId) -> bool;

	/// Type name shown in diagnostics.
	fn target_name(&self) -> String;

	/// Store an already type-checked value; `false` when nothing was written.
	///
	/// Must succeed for every value whose type `accepts` allowed: a refusal fails the bind
	/// with [`ValueError::UnsupportedType`] after earlier fields may already be written.
	fn store(&mut self, value: &GenericValue) -> bool;
}

macro_rules! impl_field_targets {
	(@one $ty:ty) => {
		impl FieldTarget for $ty {
			fn accepts(&self, expected: TypeId) -> bool {
				accepts_as::<$ty>(expected)
			}

			fn target_name(&self) -> String {
				<$ty as ValueType>::DESCRIPTOR.name().into_owned()
			}

			fn store(&mut self, value: &GenericValue) -> bool {
				match get_aliased::<$ty>(value) {
					Some(stored) => {
						*self = stored;
						true
					}
					None => false,
				}
			}
		}
	};
	($($variant:ident($ty:ty) = $id:literal, $name:literal, $components:literal => $under:ident($under_ty:ty);)*) => {
		$(
			impl_field_targets!(@one $ty);
			impl_field_targets!(@one Vec<$ty>);
			impl_field_targets!(@one Vec<Vec<$ty>>);
		)*
	};
}

for_each_value_type!(impl_field_targets);

fn accepts_as<T: ValueType>(expected: TypeId) -> bool {
	let own = T::DESCRIPTOR.type_id;
	own == expected || expected.underlying() == Some(own)
}

/// Untyped slot: takes whatever the field's expected type is.
impl FieldTarget for GenericValue {
	fn accepts(&self, expected: TypeId) -> bool {
		expected.is_valid()
	}

	fn target_name(&self) -> String {
		"value".to_owned()
	}

	fn store(&mut self, value: &GenericValue) -> bool {
		*self = value.clone();
		true
	}
}

/// Whether a field must be present in the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
	/// Absence fails the bind.
	Required,
	/// Absence leaves the target untouched.
	Optional,
}

/// One named, typed field to populate from a dictionary.
pub struct AttributeField<'a> {
	name: String,
	expected: TypeId,
	requirement: Requirement,
	target: &'a mut dyn FieldTarget,
}

impl<'a> AttributeField<'a> {
	/// Required field typed by its target.
	pub fn required<T: ValueType + FieldTarget>(name: impl Into<String>, target: &'a mut T) -> Self {
		Self::with_type(name, T::DESCRIPTOR.type_id, Requirement::Required, target)
	}

	/// Optional field typed by its target.
	pub fn optional<T: ValueType + FieldTarget>(name: impl Into<String>, target: &'a mut T) -> Self {
		Self::with_type(name, T::DESCRIPTOR.type_id, Requirement::Optional, target)
	}

	/// Field whose expected type id differs from, or is not implied by, the target.
	///
	/// A role-typed attribute may be bound into a target of its underlying type, for
	/// example `vector3f[]` into `Vec<[f32; 3]>`.
	pub fn with_type(name: impl Into<String>, expected: TypeId, requirement: Requirement, target: &'a mut dyn FieldTarget) -> Self {
		Self {
			name: name.into(),
			expected,
			requirement,
			target,
		}
	}

	/// Attribute name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Expected type id.
	pub fn expected(&self) -> TypeId {
		self.expected
	}

	/// Presence requirement.
	pub fn requirement(&self) -> Requirement {
		self.requirement
	}
}

/// Per-field result of a successful bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOutcome {
	/// Value copied into the target.
	Bound,
	/// Optional field absent; target untouched.
	SkippedOptional,
}

/// Outcomes of a successful bind, in field declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindReport {
	/// `(field name, outcome)` pairs.
	pub outcomes: Vec<(String, FieldOutcome)>,
}

impl BindReport {
	/// Number of fields written.
	pub fn bound_count(&self) -> usize {
		self.count(FieldOutcome::Bound)
	}

	/// Number of optional fields left untouched.
	pub fn skipped_count(&self) -> usize {
		self.count(FieldOutcome::SkippedOptional)
	}

	/// Outcome for `name`, if declared.
	pub fn outcome(&self, name: &str) -> Option<FieldOutcome> {
		self.outcomes.iter().find(|(field, _)| field == name).map(|(_, outcome)| *outcome)
	}

	fn count(&self, wanted: FieldOutcome) -> usize {
		self.outcomes.iter().filter(|(_, outcome)| *outcome == wanted).count()
	}
}

/// Behavior switches for [`AttributeBinder`].
#[derive(Debug, Clone, Default)]
pub struct BindOptions {
	/// Fail when the dictionary holds attributes no field declares.
	pub deny_unknown: bool,
}

impl BindOptions {
	/// Preset rejecting undeclared attributes.
	pub fn strict() -> Self {
		Self { deny_unknown: true }
	}
}

/// Populates statically typed targets from a `name -> value` dictionary.
///
/// Fields resolve in declaration order and the first failure aborts the bind. Every field
/// is resolved before any target is written, so a failed bind leaves all targets untouched.
#[derive(Default)]
pub struct AttributeBinder<'a> {
	fields: Vec<AttributeField<'a>>,
	options: BindOptions,
}

impl<'a> AttributeBinder<'a> {
	/// Binder with default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Binder with explicit options.
	pub fn with_options(options: BindOptions) -> Self {
		Self {
			fields: Vec::new(),
			options,
		}
	}

	/// Append a field declaration.
	pub fn field(mut self, field: AttributeField<'a>) -> Self {
		self.fields.push(field);
		self
	}

	/// Append a required field typed by its target.
	pub fn required<T: ValueType + FieldTarget>(self, name: impl Into<String>, target: &'a mut T) -> Self {
		self.field(AttributeField::required(name, target))
	}

	/// Append an optional field typed by its target.
	pub fn optional<T: ValueType + FieldTarget>(self, name: impl Into<String>, target: &'a mut T) -> Self {
		self.field(AttributeField::optional(name, target))
	}

	/// Resolve every field against `dict`, then write the targets.
	pub fn bind(mut self, dict: &Dictionary) -> Result<BindReport> {
		let mut resolved = Vec::with_capacity(self.fields.len());
		for field in &self.fields {
			resolved.push(resolve_field(dict, field)?);
		}

		if self.options.deny_unknown {
			if let Some((name, value)) = dict.iter().find(|(name, _)| !self.fields.iter().any(|field| field.name == **name)) {
				return Err(ValueError::UnknownAttribute {
					field: name.clone(),
					type_name: value.type_name().into_owned(),
				});
			}
		}

		let mut report = BindReport::default();
		for (field, value) in self.fields.iter_mut().zip(resolved) {
			let outcome = match value {
				Some(value) => {
					if !field.target.store(value) {
						return Err(ValueError::UnsupportedType {
							field: field.name.clone(),
							type_name: type_name(field.expected).into_owned(),
							target: field.target.target_name(),
						});
					}
					debug!("bound attribute \"{}\" as {}", field.name, type_name(field.expected));
					FieldOutcome::Bound
				}
				None => {
					debug!("optional attribute \"{}\" absent", field.name);
					FieldOutcome::SkippedOptional
				}
			};
			report.outcomes.push((field.name.clone(), outcome));
		}

		Ok(report)
	}
}

/// Bind `fields` against `dict` with default options.
pub fn bind<'a>(dict: &Dictionary, fields: impl IntoIterator<Item = AttributeField<'a>>) -> Result<BindReport> {
	fields.into_iter().fold(AttributeBinder::new(), AttributeBinder::field).bind(dict)
}

fn resolve_field<'d>(dict: &'d Dictionary, field: &AttributeField<'_>) -> Result<Option<&'d GenericValue>> {
	let Some(value) = dict.get(&field.name) else {
		return match field.requirement {
			Requirement::Optional => Ok(None),
			Requirement::Required => Err(ValueError::MissingField { field: field.name.clone() }),
		};
	};

	if !field.expected.is_valid() || !field.target.accepts(field.expected) {
		return Err(ValueError::UnsupportedType {
			field: field.name.clone(),
			type_name: type_name(field.expected).into_owned(),
			target: field.target.target_name(),
		});
	}

	if value.type_id() != field.expected {
		return Err(ValueError::TypeMismatch {
			field: field.name.clone(),
			expected: type_name(field.expected).into_owned(),
			actual: held_name(value),
		});
	}

	Ok(Some(value))
}

/// Check that `value` has one of the `allowed` types.
pub fn check_allowed_types(field: &str, value: &GenericValue, allowed: &[TypeId]) -> Result<()> {
	if allowed.contains(&value.type_id()) {
		return Ok(());
	}

	let names: Vec<_> = allowed.iter().map(|id| type_name(*id).into_owned()).collect();
	let allowed = match names.as_slice() {
		[] => "is nothing".to_owned(),
		[only] => format!("is {only}"),
		[head @ .., last] => format!("are {} or {last}", head.join(", ")),
	};

	Err(ValueError::DisallowedType {
		field: field.to_owned(),
		allowed,
		actual: held_name(value),
	})
}

fn held_name(value: &GenericValue) -> String {
	if value.is_empty() { "(empty)".to_owned() } else { value.type_name().into_owned() }
}

#[cfg(test)]
mod tests;
