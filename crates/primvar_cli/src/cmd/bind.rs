use std::path::PathBuf;

use primvar::value::{AttributeBinder, AttributeField, BindOptions, FieldOutcome, GenericValue, PrintOptions, Requirement, TypeId, ValueError, render_with, type_id_by_name, type_name};
use serde::Serialize;

use crate::cmd::document::Document;
use crate::cmd::util::emit_json;
use crate::cmd::{CliError, Result};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	/// Field declaration `name:type`; a trailing `?` marks it optional (`center:double3?`).
	#[arg(long = "field", required = true)]
	pub fields: Vec<String>,
	/// Fail when the document holds attributes no field declares.
	#[arg(long = "deny-unknown")]
	pub deny_unknown: bool,
	/// Bind held values at this time.
	#[arg(long)]
	pub time: Option<f64>,
	#[arg(long)]
	pub json: bool,
}

/// Parsed `--field` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
	/// Attribute name.
	pub name: String,
	/// Expected type id.
	pub type_id: TypeId,
	/// Presence requirement.
	pub requirement: Requirement,
}

impl FieldSpec {
	/// Parse `name:type` or `name:type?`. Names may contain `:`; the type never does.
	pub fn parse(spec: &str) -> Result<Self> {
		let invalid = || CliError::InvalidFieldSpec { spec: spec.to_owned() };

		let (name, type_part) = spec.rsplit_once(':').ok_or_else(invalid)?;
		let (type_part, requirement) = match type_part.strip_suffix('?') {
			Some(stripped) => (stripped, Requirement::Optional),
			None => (type_part, Requirement::Required),
		};
		if name.is_empty() || type_part.trim().is_empty() {
			return Err(invalid());
		}

		let type_id = type_id_by_name(type_part).ok_or_else(|| ValueError::UnknownTypeName { name: type_part.to_owned() })?;
		Ok(Self {
			name: name.to_owned(),
			type_id,
			requirement,
		})
	}
}

/// Bind a document against `--field` declarations and print each outcome.
pub fn run(args: Args) -> Result<()> {
	let Args {
		file,
		fields,
		deny_unknown,
		time,
		json,
	} = args;

	let specs = fields.iter().map(|field| FieldSpec::parse(field)).collect::<Result<Vec<_>>>()?;
	let document = Document::load(&file)?;
	let dict = document.evaluate(time)?;

	let mut slots = vec![GenericValue::empty(); specs.len()];
	let binder = specs
		.iter()
		.zip(slots.iter_mut())
		.fold(AttributeBinder::with_options(BindOptions { deny_unknown }), |binder, (spec, slot)| {
			binder.field(AttributeField::with_type(spec.name.clone(), spec.type_id, spec.requirement, slot))
		});
	let report = binder.bind(&dict)?;

	let options = PrintOptions::for_diagnostics();
	let rows: Vec<FieldRow> = specs
		.iter()
		.zip(&slots)
		.map(|(spec, slot)| {
			let outcome = report.outcome(&spec.name).unwrap_or(FieldOutcome::SkippedOptional);
			FieldRow {
				name: spec.name.clone(),
				type_name: type_name(spec.type_id).into_owned(),
				outcome: outcome_label(outcome).to_owned(),
				value: (outcome == FieldOutcome::Bound).then(|| render_with(slot, &options)),
			}
		})
		.collect();

	if json {
		return emit_json(&BindJson {
			path: file.display().to_string(),
			bound: report.bound_count(),
			skipped: report.skipped_count(),
			fields: rows,
		});
	}

	println!("path: {}", file.display());
	println!("bound: {}", report.bound_count());
	println!("skipped: {}", report.skipped_count());
	println!("name\ttype\toutcome\tvalue");
	for row in &rows {
		println!("{}\t{}\t{}\t{}", row.name, row.type_name, row.outcome, row.value.as_deref().unwrap_or("-"));
	}

	Ok(())
}

fn outcome_label(outcome: FieldOutcome) -> &'static str {
	match outcome {
		FieldOutcome::Bound => "bound",
		FieldOutcome::SkippedOptional => "skipped",
	}
}

#[derive(Serialize)]
struct BindJson {
	path: String,
	bound: usize,
	skipped: usize,
	fields: Vec<FieldRow>,
}

#[derive(Serialize)]
struct FieldRow {
	name: String,
	#[serde(rename = "type")]
	type_name: String,
	outcome: String,
	value: Option<String>,
}
