/// Field-declaration binding command.
pub mod bind;
/// JSON attribute document loader.
pub mod document;
mod error;
/// Attribute rendering command.
pub mod print;
/// Registered type listing command.
pub mod types;
mod util;

#[cfg(test)]
mod test_support;

pub use error::{CliError, Result};
