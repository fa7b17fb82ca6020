use std::collections::BTreeMap;
use std::fmt;

use bytemuck::{Pod, Zeroable};

use crate::value::{GenericValue, Half};

/// Two binary16 components.
pub type Half2 = [Half; 2];
/// Three binary16 components.
pub type Half3 = [Half; 3];
/// Four binary16 components.
pub type Half4 = [Half; 4];
/// Two `i32` components.
pub type Int2 = [i32; 2];
/// Three `i32` components.
pub type Int3 = [i32; 3];
/// Four `i32` components.
pub type Int4 = [i32; 4];
/// Two `u32` components.
pub type Uint2 = [u32; 2];
/// Three `u32` components.
pub type Uint3 = [u32; 3];
/// Four `u32` components.
pub type Uint4 = [u32; 4];
/// Two `f32` components.
pub type Float2 = [f32; 2];
/// Three `f32` components.
pub type Float3 = [f32; 3];
/// Four `f32` components.
pub type Float4 = [f32; 4];
/// Two `f64` components.
pub type Double2 = [f64; 2];
/// Three `f64` components.
pub type Double3 = [f64; 3];
/// Four `f64` components.
pub type Double4 = [f64; 4];

/// Ordered attribute dictionary (`name -> value`).
pub type Dictionary = BTreeMap<String, GenericValue>;

/// Interned-style identifier literal, kept distinct from free-form strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token(String);

impl Token {
	/// Wrap an identifier.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Borrow the identifier text.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl From<&str> for Token {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Semantic type sharing the exact field layout of a plain tuple type.
///
/// Layout equality (size and alignment) is asserted at compile time for every role,
/// and `Pod` rules out interior padding, so reinterpretation never needs a runtime check.
pub trait Role: Pod {
	/// Plain tuple type with identical layout.
	type Underlying: Pod;

	/// Reinterpret as the underlying tuple.
	fn to_underlying(self) -> Self::Underlying {
		bytemuck::cast(self)
	}

	/// Reinterpret an underlying tuple as this role.
	fn from_underlying(value: Self::Underlying) -> Self {
		bytemuck::cast(value)
	}
}

macro_rules! role_type {
	($(#[$meta:meta])* $name:ident { $($field:ident),+ }: $scalar:ty => $under:ty) => {
		$(#[$meta])*
		#[repr(C)]
		#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
		pub struct $name {
			$(
				#[doc = concat!("`", stringify!($field), "` component.")]
				pub $field: $scalar,
			)+
		}

		impl $name {
			/// Build from components in storage order.
			pub const fn new($($field: $scalar),+) -> Self {
				Self { $($field),+ }
			}
		}

		impl Role for $name {
			type Underlying = $under;
		}

		impl From<$name> for $under {
			fn from(value: $name) -> Self {
				value.to_underlying()
			}
		}

		impl From<$under> for $name {
			fn from(value: $under) -> Self {
				<$name as Role>::from_underlying(value)
			}
		}

		const _: () = {
			assert!(size_of::<$name>() == size_of::<$under>());
			assert!(align_of::<$name>() == align_of::<$under>());
		};
	};
}

role_type!(
	/// Binary16 RGB color.
	Color3h { r, g, b }: Half => Half3
);
role_type!(
	/// Single-precision RGB color.
	Color3f { r, g, b }: f32 => Float3
);
role_type!(
	/// Double-precision RGB color.
	Color3d { r, g, b }: f64 => Double3
);
role_type!(
	/// Binary16 RGBA color.
	Color4h { r, g, b, a }: Half => Half4
);
role_type!(
	/// Single-precision RGBA color.
	Color4f { r, g, b, a }: f32 => Float4
);
role_type!(
	/// Double-precision RGBA color.
	Color4d { r, g, b, a }: f64 => Double4
);
role_type!(
	/// Binary16 position.
	Point3h { x, y, z }: Half => Half3
);
role_type!(
	/// Single-precision position.
	Point3f { x, y, z }: f32 => Float3
);
role_type!(
	/// Double-precision position.
	Point3d { x, y, z }: f64 => Double3
);
role_type!(
	/// Binary16 surface normal.
	Normal3h { x, y, z }: Half => Half3
);
role_type!(
	/// Single-precision surface normal.
	Normal3f { x, y, z }: f32 => Float3
);
role_type!(
	/// Double-precision surface normal.
	Normal3d { x, y, z }: f64 => Double3
);
role_type!(
	/// Binary16 direction vector.
	Vector3h { x, y, z }: Half => Half3
);
role_type!(
	/// Single-precision direction vector.
	Vector3f { x, y, z }: f32 => Float3
);
role_type!(
	/// Double-precision direction vector.
	Vector3d { x, y, z }: f64 => Double3
);
role_type!(
	/// Binary16 2-D texture coordinate.
	Texcoord2h { s, t }: Half => Half2
);
role_type!(
	/// Single-precision 2-D texture coordinate.
	Texcoord2f { s, t }: f32 => Float2
);
role_type!(
	/// Double-precision 2-D texture coordinate.
	Texcoord2d { s, t }: f64 => Double2
);
role_type!(
	/// Binary16 3-D texture coordinate.
	Texcoord3h { s, t, r }: Half => Half3
);
role_type!(
	/// Single-precision 3-D texture coordinate.
	Texcoord3f { s, t, r }: f32 => Float3
);
role_type!(
	/// Double-precision 3-D texture coordinate.
	Texcoord3d { s, t, r }: f64 => Double3
);

macro_rules! quat_type {
	($(#[$meta:meta])* $name:ident: $scalar:ty, $one:expr, $zero:expr) => {
		$(#[$meta])*
		#[repr(C)]
		#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
		pub struct $name {
			/// Imaginary part `(i, j, k)`.
			pub imag: [$scalar; 3],
			/// Real part.
			pub real: $scalar,
		}

		impl $name {
			/// Rotation identity.
			pub const IDENTITY: Self = Self {
				imag: [$zero; 3],
				real: $one,
			};

			/// Build from imaginary and real parts.
			pub const fn new(imag: [$scalar; 3], real: $scalar) -> Self {
				Self { imag, real }
			}
		}

		impl Default for $name {
			fn default() -> Self {
				Self::IDENTITY
			}
		}
	};
}

quat_type!(
	/// Binary16 quaternion.
	Quath: Half, Half::ONE, Half::ZERO
);
quat_type!(
	/// Single-precision quaternion.
	Quatf: f32, 1.0, 0.0
);
quat_type!(
	/// Double-precision quaternion.
	Quatd: f64, 1.0, 0.0
);

macro_rules! matrix_type {
	($(#[$meta:meta])* $name:ident: $n:literal) => {
		$(#[$meta])*
		#[repr(C)]
		#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
		pub struct $name {
			/// Row-major elements.
			pub m: [[f64; $n]; $n],
		}

		impl $name {
			/// Identity matrix.
			pub const IDENTITY: Self = {
				let mut m = [[0.0; $n]; $n];
				let mut i = 0;
				while i < $n {
					m[i][i] = 1.0;
					i += 1;
				}
				Self { m }
			};

			/// Build from row-major rows.
			pub const fn from_rows(m: [[f64; $n]; $n]) -> Self {
				Self { m }
			}
		}

		impl Default for $name {
			fn default() -> Self {
				Self::IDENTITY
			}
		}
	};
}

matrix_type!(
	/// 2x2 double matrix.
	Matrix2d: 2
);
matrix_type!(
	/// 3x3 double matrix.
	Matrix3d: 3
);
matrix_type!(
	/// 4x4 double matrix.
	Matrix4d: 4
);

/// Coordinate frame; a role over [`Matrix4d`].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Frame4d {
	/// Row-major elements.
	pub m: [[f64; 4]; 4],
}

impl Default for Frame4d {
	fn default() -> Self {
		Self { m: Matrix4d::IDENTITY.m }
	}
}

impl Role for Frame4d {
	type Underlying = Matrix4d;
}

impl From<Frame4d> for Matrix4d {
	fn from(value: Frame4d) -> Self {
		value.to_underlying()
	}
}

impl From<Matrix4d> for Frame4d {
	fn from(value: Matrix4d) -> Self {
		Self::from_underlying(value)
	}
}

const _: () = {
	assert!(size_of::<Frame4d>() == size_of::<Matrix4d>());
	assert!(align_of::<Frame4d>() == align_of::<Matrix4d>());
};
