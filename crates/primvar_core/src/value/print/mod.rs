use std::fmt;

use log::warn;

use crate::value::generic::{Array, Array2, Payload, Scalar};
use crate::value::types::*;
use crate::value::{Dictionary, GenericValue, Half, TemporalValue, TypedValue};

/// Rendered text for a value that holds no payload.
pub const EMPTY_VALUE: &str = "[[empty value]]";

/// Limits applied while rendering values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrintOptions {
	/// Maximum elements printed per array level; `None` prints everything.
	pub max_array_items: Option<usize>,
}

impl PrintOptions {
	/// Preset for logs and terminal inspection: long arrays end with `... N more`.
	pub fn for_diagnostics() -> Self {
		Self { max_array_items: Some(16) }
	}
}

/// Render `value` in full.
pub fn render(value: &GenericValue) -> String {
	render_with(value, &PrintOptions::default())
}

/// Render `value` under `options`.
pub fn render_with(value: &GenericValue, options: &PrintOptions) -> String {
	let mut printer = Printer::new(options);
	printer.value(value);
	printer.out
}

/// Render a temporal value in full.
pub fn render_temporal(value: &TemporalValue) -> String {
	render_temporal_with(value, &PrintOptions::default())
}

/// Render a temporal value under `options`.
///
/// Scalars render as their single value; time samples render as `{t0: v0, t1: v1}`.
pub fn render_temporal_with(value: &TemporalValue, options: &PrintOptions) -> String {
	if let Some(scalar) = value.scalar_value() {
		return render_with(scalar, options);
	}
	if !value.is_time_sampled() {
		warn!("rendering invalid temporal value ({} times, {} values)", value.times().len(), value.values().len());
		return format!("[[invalid temporal value: {} times, {} values]]", value.times().len(), value.values().len());
	}

	let mut printer = Printer::new(options);
	printer.out.push('{');
	for (idx, (time, sample)) in value.samples().enumerate() {
		if idx > 0 {
			printer.out.push_str(", ");
		}
		printer.out.push_str(&time.to_string());
		printer.out.push_str(": ");
		printer.value(sample);
	}
	printer.out.push('}');
	printer.out
}

struct Printer<'o> {
	out: String,
	options: &'o PrintOptions,
	depth: usize,
}

impl<'o> Printer<'o> {
	fn new(options: &'o PrintOptions) -> Self {
		Self {
			out: String::new(),
			options,
			depth: 0,
		}
	}

	fn value(&mut self, value: &GenericValue) {
		match value.payload() {
			None => self.out.push_str(EMPTY_VALUE),
			Some(Payload::Scalar(scalar)) => render_scalar(scalar, self),
			Some(Payload::Array(items)) => render_array(items, self),
			Some(Payload::Array2(rows)) => render_array2(rows, self),
		}
	}

	fn list<T: Render>(&mut self, items: &[T]) {
		self.out.push('[');
		self.depth += 1;
		let shown = self.options.max_array_items.map_or(items.len(), |max| max.min(items.len()));
		for (idx, item) in items[..shown].iter().enumerate() {
			if idx > 0 {
				self.out.push_str(", ");
			}
			item.render(self);
		}
		if shown < items.len() {
			if shown > 0 {
				self.out.push_str(", ");
			}
			self.out.push_str(&format!("... {} more", items.len() - shown));
		}
		self.depth -= 1;
		self.out.push(']');
	}

	fn rows<T: Render>(&mut self, rows: &[Vec<T>]) {
		if rows.is_empty() {
			self.out.push_str("[[]]");
			return;
		}
		self.list(rows);
	}

	fn tuple<T: Render>(&mut self, items: &[T]) {
		self.out.push('(');
		for (idx, item) in items.iter().enumerate() {
			if idx > 0 {
				self.out.push_str(", ");
			}
			item.render(self);
		}
		self.out.push(')');
	}

	fn display(&mut self, value: impl fmt::Display) {
		self.out.push_str(&value.to_string());
	}
}

trait Render {
	fn render(&self, printer: &mut Printer<'_>);
}

macro_rules! render_display {
	($($ty:ty),* $(,)?) => {
		$(
			impl Render for $ty {
				fn render(&self, printer: &mut Printer<'_>) {
					printer.display(self);
				}
			}
		)*
	};
}

render_display!(bool, u8, i32, i64, u32, u64, f32, f64, Half, String, Token);

impl<T: Render, const N: usize> Render for [T; N] {
	fn render(&self, printer: &mut Printer<'_>) {
		printer.tuple(self);
	}
}

impl<T: Render> Render for Vec<T> {
	fn render(&self, printer: &mut Printer<'_>) {
		printer.list(self);
	}
}

macro_rules! render_quat {
	($($ty:ty),*) => {
		$(
			impl Render for $ty {
				fn render(&self, printer: &mut Printer<'_>) {
					let [i, j, k] = self.imag;
					printer.tuple(&[i, j, k, self.real]);
				}
			}
		)*
	};
}

render_quat!(Quath, Quatf, Quatd);

macro_rules! render_matrix {
	($($ty:ty),*) => {
		$(
			impl Render for $ty {
				fn render(&self, printer: &mut Printer<'_>) {
					printer.tuple(&self.m);
				}
			}
		)*
	};
}

render_matrix!(Matrix2d, Matrix3d, Matrix4d);

macro_rules! render_role {
	($($ty:ty),* $(,)?) => {
		$(
			impl Render for $ty {
				fn render(&self, printer: &mut Printer<'_>) {
					self.to_underlying().render(printer);
				}
			}
		)*
	};
}

render_role!(
	Color3h, Color3f, Color3d, Color4h, Color4f, Color4d, Point3h, Point3f, Point3d, Normal3h, Normal3f, Normal3d, Vector3h, Vector3f, Vector3d, Frame4d, Texcoord2h,
	Texcoord2f, Texcoord2d, Texcoord3h, Texcoord3f, Texcoord3d,
);

/// Top-level dictionaries print bare; nested ones are braced.
impl Render for Dictionary {
	fn render(&self, printer: &mut Printer<'_>) {
		let nested = printer.depth > 0;
		if nested {
			printer.out.push('{');
		}
		printer.depth += 1;
		for (idx, (key, value)) in self.iter().enumerate() {
			if idx > 0 {
				printer.out.push_str(", ");
			}
			printer.out.push_str(key);
			printer.out.push(':');
			printer.value(value);
		}
		printer.depth -= 1;
		if nested {
			printer.out.push('}');
		}
	}
}

macro_rules! define_render_dispatch {
	($($variant:ident($ty:ty) = $id:literal, $name:literal, $components:literal => $under:ident($under_ty:ty);)*) => {
		fn render_scalar(value: &Scalar, printer: &mut Printer<'_>) {
			match value {
				$(Scalar::$variant(value) => value.render(printer),)*
			}
		}

		fn render_array(value: &Array, printer: &mut Printer<'_>) {
			match value {
				$(Array::$variant(items) => printer.list(items),)*
			}
		}

		fn render_array2(value: &Array2, printer: &mut Printer<'_>) {
			match value {
				$(Array2::$variant(rows) => printer.rows(rows),)*
			}
		}
	};
}

for_each_value_type!(define_render_dispatch);

impl fmt::Display for GenericValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&render(self))
	}
}

impl fmt::Display for TypedValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&render(self.as_generic()))
	}
}

impl fmt::Display for TemporalValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&render_temporal(self))
	}
}
