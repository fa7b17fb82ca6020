use std::fmt;

use bytemuck::{Pod, Zeroable};

/// IEEE 754 binary16 value stored as raw bits.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Half(u16);

impl Half {
	/// Positive zero.
	pub const ZERO: Self = Self(0x0000);
	/// One.
	pub const ONE: Self = Self(0x3c00);

	/// Wrap raw binary16 bits.
	pub const fn from_bits(bits: u16) -> Self {
		Self(bits)
	}

	/// Raw binary16 bits.
	pub const fn to_bits(self) -> u16 {
		self.0
	}

	/// Widen to `f32`. Exact for every binary16 value.
	pub fn to_f32(self) -> f32 {
		let bits = u32::from(self.0);
		let sign = (bits & 0x8000) << 16;
		let exp = (bits >> 10) & 0x1f;
		let mant = bits & 0x03ff;

		let out = match exp {
			0 if mant == 0 => sign,
			0 => {
				// subnormal: mant * 2^-24
				let magnitude = mant as f32 * (1.0 / 16_777_216.0);
				return if sign != 0 { -magnitude } else { magnitude };
			}
			0x1f => sign | 0x7f80_0000 | (mant << 13),
			_ => sign | ((exp + 112) << 23) | (mant << 13),
		};
		f32::from_bits(out)
	}

	/// Narrow from `f32`, rounding to nearest with ties to even.
	pub fn from_f32(value: f32) -> Self {
		let x = value.to_bits();
		let sign = ((x >> 16) & 0x8000) as u16;
		let exp = ((x >> 23) & 0xff) as i32;
		let mant = x & 0x007f_ffff;

		if exp == 0xff {
			let nan = if mant != 0 { 0x0200 } else { 0 };
			return Self(sign | 0x7c00 | nan);
		}

		let half_exp = exp - 127 + 15;
		if half_exp >= 0x1f {
			return Self(sign | 0x7c00);
		}

		if half_exp <= 0 {
			if half_exp < -10 {
				return Self(sign);
			}
			let full = mant | 0x0080_0000;
			let shift = (14 - half_exp) as u32;
			let kept = full >> shift;
			let rem = full & ((1 << shift) - 1);
			let halfway = 1 << (shift - 1);
			let rounded = if rem > halfway || (rem == halfway && kept & 1 == 1) { kept + 1 } else { kept };
			return Self(sign | rounded as u16);
		}

		let kept = mant >> 13;
		let rem = mant & 0x1fff;
		let mut bits = ((half_exp as u32) << 10) | kept;
		if rem > 0x1000 || (rem == 0x1000 && kept & 1 == 1) {
			bits += 1;
		}
		Self(sign | bits as u16)
	}
}

impl From<f32> for Half {
	fn from(value: f32) -> Self {
		Self::from_f32(value)
	}
}

impl From<Half> for f32 {
	fn from(value: Half) -> Self {
		value.to_f32()
	}
}

impl fmt::Display for Half {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.to_f32(), f)
	}
}
