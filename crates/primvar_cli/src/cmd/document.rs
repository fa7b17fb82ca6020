//! JSON attribute documents.
//!
//! A document is an object of `name -> {"type": T, "value": v}`. Time-sampled attributes
//! use `{"type": T, "samples": [[t, v], ...]}` instead of `value`. Dictionary values are
//! nested documents whose entries may not be time-sampled.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::debug;
use primvar::value::{Dictionary, GenericValue, Literal, TemporalValue, ValueError, type_id_by_name};
use serde::Deserialize;
use serde_json::Value as Json;

use crate::cmd::{CliError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AttributeJson {
	#[serde(rename = "type")]
	type_name: String,
	value: Option<Json>,
	samples: Option<Vec<(f64, Json)>>,
}

/// Attributes loaded from one document, in name order.
#[derive(Debug, Clone, Default)]
pub struct Document {
	/// Attribute values by name.
	pub attributes: BTreeMap<String, TemporalValue>,
}

impl Document {
	/// Read and convert a document file.
	pub fn load(path: &Path) -> Result<Self> {
		let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
			path: path.to_owned(),
			source,
		})?;
		let document = Self::parse(&text).map_err(|err| match err {
			CliError::Json { source, .. } => CliError::Json {
				path: path.to_owned(),
				source,
			},
			other => other,
		})?;
		debug!("loaded {} attributes from {}", document.attributes.len(), path.display());
		Ok(document)
	}

	/// Convert document text.
	pub fn parse(text: &str) -> Result<Self> {
		let raw: BTreeMap<String, AttributeJson> = serde_json::from_str(text).map_err(|source| CliError::Json {
			path: PathBuf::from("<input>"),
			source,
		})?;

		let mut attributes = BTreeMap::new();
		for (name, entry) in raw {
			let value = attribute(&name, entry)?;
			attributes.insert(name, value);
		}

		Ok(Self { attributes })
	}

	/// Dictionary of held values at `time`.
	///
	/// Without a time, sampled attributes contribute their earliest sample.
	pub fn evaluate(&self, time: Option<f64>) -> Result<Dictionary> {
		let time = time.unwrap_or(f64::NEG_INFINITY);
		self.attributes
			.iter()
			.map(|(name, value)| Ok((name.clone(), value.value_at(time)?.clone())))
			.collect()
	}
}

fn attribute(name: &str, entry: AttributeJson) -> Result<TemporalValue> {
	let invalid = |reason: &str| CliError::InvalidAttribute {
		name: name.to_owned(),
		reason: reason.to_owned(),
	};

	match (entry.value, entry.samples) {
		(Some(value), None) => Ok(TemporalValue::scalar(typed_value(name, &entry.type_name, &value)?)),
		(None, Some(samples)) => {
			if samples.is_empty() {
				return Err(invalid("\"samples\" must not be empty"));
			}
			let samples = samples
				.iter()
				.map(|(time, value)| Ok((*time, typed_value(name, &entry.type_name, value)?)))
				.collect::<Result<Vec<_>>>()?;
			Ok(TemporalValue::time_sampled(samples))
		}
		(Some(_), Some(_)) => Err(invalid("both \"value\" and \"samples\" given")),
		(None, None) => Err(invalid("one of \"value\" or \"samples\" is required")),
	}
}

fn typed_value(name: &str, type_name: &str, value: &Json) -> Result<GenericValue> {
	let literal = literal(name, value)?;
	Ok(GenericValue::from_literal_named(type_name, &literal)?)
}

fn literal(name: &str, value: &Json) -> Result<Literal> {
	let invalid = |reason: String| CliError::InvalidAttribute {
		name: name.to_owned(),
		reason,
	};

	match value {
		Json::Null => Err(invalid("null is not a value".to_owned())),
		Json::Bool(value) => Ok(Literal::Bool(*value)),
		Json::Number(number) => {
			if let Some(int) = number.as_i64() {
				Ok(Literal::Int(int))
			} else if let Some(uint) = number.as_u64() {
				Ok(Literal::Uint(uint))
			} else if let Some(float) = number.as_f64() {
				Ok(Literal::Float(float))
			} else {
				Err(invalid(format!("number {number} is not representable")))
			}
		}
		Json::String(text) => Ok(Literal::Text(text.clone())),
		Json::Array(items) => items.iter().map(|item| literal(name, item)).collect::<Result<Vec<_>>>().map(Literal::List),
		Json::Object(entries) => {
			let mut out = Vec::with_capacity(entries.len());
			for (key, entry) in entries {
				let nested = format!("{name}.{key}");
				let entry: AttributeJson = serde_json::from_value(entry.clone()).map_err(|err| CliError::InvalidAttribute {
					name: nested.clone(),
					reason: err.to_string(),
				})?;
				if entry.samples.is_some() {
					return Err(CliError::InvalidAttribute {
						name: nested,
						reason: "dictionary entries cannot be time-sampled".to_owned(),
					});
				}
				let Some(value) = entry.value else {
					return Err(CliError::InvalidAttribute {
						name: nested,
						reason: "\"value\" is required".to_owned(),
					});
				};
				let type_id = type_id_by_name(&entry.type_name).ok_or_else(|| ValueError::UnknownTypeName { name: entry.type_name.clone() })?;
				out.push((key.clone(), type_id, literal(&nested, &value)?));
			}
			Ok(Literal::Dict(out))
		}
	}
}
