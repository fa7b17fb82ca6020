use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::OnceLock;

static PRIMVAR_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn run_primvar(args: &[&str]) -> Output {
	Command::new(primvar_bin()).args(args).output().expect("primvar command executes")
}

pub(crate) fn run_primvar_json(args: &[&str]) -> serde_json::Value {
	let output = run_primvar(args);
	assert!(
		output.status.success(),
		"primvar {args:?} failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

/// Binary sitting next to this test executable (`target/<profile>/deps/..` -> `target/<profile>/primvar`).
fn primvar_bin() -> &'static PathBuf {
	PRIMVAR_BIN.get_or_init(|| {
		let exe = std::env::current_exe().expect("test executable path");
		let profile_dir = exe.parent().and_then(Path::parent).expect("test executable under target/<profile>/deps");
		let bin = profile_dir.join(format!("primvar{}", std::env::consts::EXE_SUFFIX));
		if !bin.exists() {
			let status = Command::new(env!("CARGO"))
				.current_dir(env!("CARGO_MANIFEST_DIR"))
				.args(["build", "--quiet", "--bin", "primvar"])
				.status()
				.expect("cargo build executes");
			assert!(status.success(), "failed to build primvar binary at {}", bin.display());
		}
		bin
	})
}
