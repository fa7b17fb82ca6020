//! Typed attribute values for scene-description loaders.

/// Type registry, type-erased values, time samples, attribute binding, and printing.
pub mod value;
