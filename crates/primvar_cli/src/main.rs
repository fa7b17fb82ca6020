#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use log::LevelFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "primvar", about = "Typed attribute value inspection tools")]
struct Cli {
	/// Log at debug level regardless of RUST_LOG.
	#[arg(short, long, global = true)]
	verbose: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// List the registered value types.
	Types(cmd::types::Args),
	/// Load an attribute document and render its values.
	Print(cmd::print::Args),
	/// Bind an attribute document against field declarations.
	Bind(cmd::bind::Args),
}

fn main() {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_logging(verbose: bool) {
	let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
	if verbose {
		builder.filter_level(LevelFilter::Debug);
	}
	let _ = builder.format_timestamp_millis().try_init();
}

fn run(command: Commands) -> cmd::Result<()> {
	primvar::value::init();

	match command {
		Commands::Types(args) => cmd::types::run(args),
		Commands::Print(args) => cmd::print::run(args),
		Commands::Bind(args) => cmd::bind::run(args),
	}
}
