#[macro_use]
mod table;

mod binder;
mod error;
mod generic;
mod half;
mod literal;
mod print;
mod registry;
mod temporal;
mod type_id;
mod typed;
mod types;

/// Field declarations, binder, and allowed-type checks.
pub use binder::{AttributeBinder, AttributeField, BindOptions, BindReport, FieldOutcome, FieldTarget, Requirement, bind, check_allowed_types};
/// Error and result aliases.
pub use error::{Result, ValueError};
/// Type-erased value holder.
pub use generic::GenericValue;
/// Binary16 scalar.
pub use half::Half;
/// Untyped literal trees accepted by [`GenericValue::from_literal`].
pub use literal::Literal;
/// Text rendering entry points and options.
pub use print::{EMPTY_VALUE, PrintOptions, render, render_temporal, render_temporal_with, render_with};
/// Process-wide type table and compile-time descriptors.
pub use registry::{TypeInfo, ValueType, array_descriptor_of, descriptor_of, init, registered_types, type_id_by_name, type_info, type_name};
/// Constant or time-sampled attribute values.
pub use temporal::TemporalValue;
/// Type identity and descriptors.
pub use type_id::{ArrayDepth, BaseType, TypeDescriptor, TypeId};
/// Checked typed access over a generic value.
pub use typed::TypedValue;
/// Tuple aliases, role types, quaternions, matrices, tokens, and dictionaries.
pub use types::{
	Color3d, Color3f, Color3h, Color4d, Color4f, Color4h, Dictionary, Double2, Double3, Double4, Float2, Float3, Float4, Frame4d, Half2, Half3, Half4, Int2, Int3, Int4,
	Matrix2d, Matrix3d, Matrix4d, Normal3d, Normal3f, Normal3h, Point3d, Point3f, Point3h, Quatd, Quatf, Quath, Role, Texcoord2d, Texcoord2f, Texcoord2h, Texcoord3d,
	Texcoord3f, Texcoord3h, Token, Uint2, Uint3, Uint4, Vector3d, Vector3f, Vector3h,
};
