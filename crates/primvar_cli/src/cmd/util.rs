use serde::Serialize;

use crate::cmd::{CliError, Result};

/// Pretty-print `payload` as JSON on stdout.
pub(crate) fn emit_json<T: Serialize>(payload: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(payload).map_err(CliError::Output)?;
	println!("{text}");
	Ok(())
}
