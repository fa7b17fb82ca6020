use std::borrow::Cow;

use crate::value::{GenericValue, Result, TypeDescriptor, TypeId, ValueError};

/// Attribute value that is either one constant or a sequence of `(time, value)` samples.
///
/// Validity is a query-time classification: scalar means zero times and exactly one
/// value; time-sampled means `N > 0` times and `N` values. Any other shape is invalid.
/// [`TemporalValue::try_from_parts`] rejects invalid shapes up front instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemporalValue {
	times: Vec<f64>,
	values: Vec<GenericValue>,
}

impl TemporalValue {
	/// Constant value.
	pub fn scalar(value: impl Into<GenericValue>) -> Self {
		Self {
			times: Vec::new(),
			values: vec![value.into()],
		}
	}

	/// Time-sampled value; times and values stay paired by construction.
	pub fn time_sampled<I, V>(samples: I) -> Self
	where
		I: IntoIterator<Item = (f64, V)>,
		V: Into<GenericValue>,
	{
		let (times, values) = samples.into_iter().map(|(time, value)| (time, value.into())).unzip();
		Self { times, values }
	}

	/// Build from parallel sequences without validating their shape.
	pub fn from_parts(times: Vec<f64>, values: Vec<GenericValue>) -> Self {
		Self { times, values }
	}

	/// Build from parallel sequences, rejecting shapes that are neither scalar nor time-sampled.
	pub fn try_from_parts(times: Vec<f64>, values: Vec<GenericValue>) -> Result<Self> {
		let value = Self { times, values };
		if !value.is_valid() {
			return Err(value.invalid());
		}
		Ok(value)
	}

	/// Zero times and exactly one value.
	pub fn is_scalar(&self) -> bool {
		self.times.is_empty() && self.values.len() == 1
	}

	/// At least one time, with a value per time.
	pub fn is_time_sampled(&self) -> bool {
		!self.times.is_empty() && self.times.len() == self.values.len()
	}

	/// Scalar or time-sampled.
	pub fn is_valid(&self) -> bool {
		self.is_scalar() || self.is_time_sampled()
	}

	/// Descriptor of the first value, or [`TypeDescriptor::INVALID`] when invalid.
	pub fn descriptor(&self) -> TypeDescriptor {
		match self.values.first() {
			Some(first) if self.is_valid() => first.descriptor(),
			_ => TypeDescriptor::INVALID,
		}
	}

	/// Type id of the first value, or [`TypeId::INVALID`] when invalid.
	pub fn type_id(&self) -> TypeId {
		self.descriptor().type_id
	}

	/// Type name of the first value, or empty when invalid.
	pub fn type_name(&self) -> Cow<'static, str> {
		self.descriptor().name()
	}

	/// Sample times (empty for scalars).
	pub fn times(&self) -> &[f64] {
		&self.times
	}

	/// Sample values.
	pub fn values(&self) -> &[GenericValue] {
		&self.values
	}

	/// Paired samples; empty for scalar and invalid values.
	pub fn samples(&self) -> impl Iterator<Item = (f64, &GenericValue)> {
		let count = if self.is_time_sampled() { self.times.len() } else { 0 };
		self.times.iter().copied().zip(self.values.iter()).take(count)
	}

	/// The constant, if scalar.
	pub fn scalar_value(&self) -> Option<&GenericValue> {
		if self.is_scalar() { self.values.first() } else { None }
	}

	/// Held evaluation at `time`.
	///
	/// Scalars ignore `time`. Time-sampled values return the sample with the latest time
	/// not after `time`, or the earliest sample when `time` precedes all of them.
	pub fn value_at(&self, time: f64) -> Result<&GenericValue> {
		if let Some(value) = self.scalar_value() {
			return Ok(value);
		}
		if !self.is_time_sampled() {
			return Err(self.invalid());
		}

		let mut held: Option<(f64, &GenericValue)> = None;
		let mut earliest: Option<(f64, &GenericValue)> = None;
		for (sample_time, value) in self.samples() {
			if sample_time <= time && held.is_none_or(|(best, _)| sample_time >= best) {
				held = Some((sample_time, value));
			}
			if earliest.is_none_or(|(best, _)| sample_time < best) {
				earliest = Some((sample_time, value));
			}
		}

		held.or(earliest).map(|(_, value)| value).ok_or_else(|| self.invalid())
	}

	fn invalid(&self) -> ValueError {
		ValueError::InvalidTemporalValue {
			times: self.times.len(),
			values: self.values.len(),
		}
	}
}

impl From<GenericValue> for TemporalValue {
	fn from(value: GenericValue) -> Self {
		Self::scalar(value)
	}
}
