use std::path::PathBuf;

use primvar::value::ValueError;
use thiserror::Error;

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by `primvar` subcommands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Value construction, lookup, or binding failed.
	#[error(transparent)]
	Value(#[from] ValueError),
	/// Input file could not be read.
	#[error("failed to read {path}: {source}")]
	Io {
		/// File being read.
		path: PathBuf,
		/// Underlying I/O failure.
		#[source]
		source: std::io::Error,
	},
	/// Input file is not valid JSON of the expected shape.
	#[error("invalid attribute document {path}: {source}")]
	Json {
		/// File being parsed.
		path: PathBuf,
		/// Underlying parse failure.
		#[source]
		source: serde_json::Error,
	},
	/// Attribute entry is well-formed JSON but not a valid attribute.
	#[error("invalid attribute \"{name}\": {reason}")]
	InvalidAttribute {
		/// Attribute name.
		name: String,
		/// What is wrong with it.
		reason: String,
	},
	/// `--field` argument is not `name:type` or `name:type?`.
	#[error("invalid field spec \"{spec}\": expected name:type or name:type?")]
	InvalidFieldSpec {
		/// Raw argument.
		spec: String,
	},
	/// JSON output could not be serialized.
	#[error("failed to serialize JSON output: {0}")]
	Output(#[source] serde_json::Error),
}
