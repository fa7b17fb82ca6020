use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ValueError>;

/// Errors produced while retrieving, binding, and building attribute values.
#[derive(Debug, Error)]
pub enum ValueError {
	/// Dictionary entry type differs from the field's expected type.
	#[error("type mismatch for attribute \"{field}\": expected {expected}, got {actual}")]
	TypeMismatch {
		/// Attribute name being bound.
		field: String,
		/// Expected type name.
		expected: String,
		/// Type name found in the dictionary.
		actual: String,
	},
	/// Typed retrieval asked for a type the value does not hold.
	#[error("value type mismatch: expected {expected}, got {actual}")]
	ValueTypeMismatch {
		/// Requested type name.
		expected: String,
		/// Held type name.
		actual: String,
	},
	/// Required attribute is absent from the dictionary.
	#[error("missing required attribute \"{field}\"")]
	MissingField {
		/// Attribute name that was looked up.
		field: String,
	},
	/// No dispatch case exists for the expected type of a field.
	#[error("unsupported type {type_name} for attribute \"{field}\" (target holds {target})")]
	UnsupportedType {
		/// Attribute name being bound.
		field: String,
		/// Expected type name or diagnostic id.
		type_name: String,
		/// Type name the storage target holds.
		target: String,
	},
	/// Temporal value is neither scalar nor time-sampled.
	#[error("invalid temporal value: {times} times, {values} values")]
	InvalidTemporalValue {
		/// Number of sample times.
		times: usize,
		/// Number of sample values.
		values: usize,
	},
	/// Attribute type is not in the allowed set.
	#[error("allowed type for \"{field}\" {allowed}, but got {actual}")]
	DisallowedType {
		/// Attribute name.
		field: String,
		/// Rendered allowed-type clause (`is a` / `are a, b or c`).
		allowed: String,
		/// Actual type name.
		actual: String,
	},
	/// Dictionary contains an attribute no field declaration consumes.
	#[error("unknown attribute \"{field}\" of type {type_name}")]
	UnknownAttribute {
		/// Attribute name.
		field: String,
		/// Attribute type name.
		type_name: String,
	},
	/// Type name is not part of the registered type universe.
	#[error("unknown type name: {name}")]
	UnknownTypeName {
		/// User-provided type name.
		name: String,
	},
	/// Literal could not be converted to the requested type.
	#[error("invalid literal for {type_name}: {reason}")]
	InvalidLiteral {
		/// Requested type name.
		type_name: String,
		/// What did not fit.
		reason: String,
	},
}
