use std::path::PathBuf;

use primvar::value::{PrintOptions, TemporalValue, render_temporal_with, render_with};
use serde::Serialize;

use crate::cmd::Result;
use crate::cmd::document::Document;
use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	/// Evaluate time-sampled attributes at this time instead of listing samples.
	#[arg(long)]
	pub time: Option<f64>,
	/// Truncate arrays after this many elements per level.
	#[arg(long = "max-items")]
	pub max_items: Option<usize>,
	#[arg(long)]
	pub json: bool,
}

/// Load an attribute document and render every attribute.
pub fn run(args: Args) -> Result<()> {
	let Args { file, time, max_items, json } = args;

	let document = Document::load(&file)?;
	let options = PrintOptions { max_array_items: max_items };

	let rows = document
		.attributes
		.iter()
		.map(|(name, value)| attribute_row(name, value, time, &options))
		.collect::<Result<Vec<_>>>()?;

	if json {
		return emit_json(&PrintJson {
			path: file.display().to_string(),
			time,
			attributes: rows,
		});
	}

	println!("path: {}", file.display());
	println!("attributes: {}", rows.len());
	for row in &rows {
		println!("{}", attribute_line(row));
	}

	Ok(())
}

#[derive(Debug, Serialize)]
struct PrintJson {
	path: String,
	time: Option<f64>,
	attributes: Vec<AttributeRow>,
}

#[derive(Debug, Serialize)]
struct AttributeRow {
	name: String,
	#[serde(rename = "type")]
	type_name: String,
	underlying: String,
	samples: usize,
	value: String,
}

fn attribute_row(name: &str, value: &TemporalValue, time: Option<f64>, options: &PrintOptions) -> Result<AttributeRow> {
	let (type_name, underlying) = match value.values().first() {
		Some(first) => (first.type_name().into_owned(), first.underlying_type_name().into_owned()),
		None => (String::new(), String::new()),
	};

	let rendered = match time {
		Some(time) if value.is_time_sampled() => render_with(value.value_at(time)?, options),
		_ => render_temporal_with(value, options),
	};

	Ok(AttributeRow {
		name: name.to_owned(),
		type_name,
		underlying,
		samples: value.times().len(),
		value: rendered,
	})
}

fn attribute_line(row: &AttributeRow) -> String {
	if row.type_name == row.underlying {
		format!("{} ({}) = {}", row.name, row.type_name, row.value)
	} else {
		format!("{} ({} as {}) = {}", row.name, row.type_name, row.underlying, row.value)
	}
}

#[cfg(test)]
mod tests;
