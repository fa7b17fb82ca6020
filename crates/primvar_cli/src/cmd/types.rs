use primvar::value::{TypeInfo, registered_types, type_name};
use serde::Serialize;

use crate::cmd::Result;
use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	/// Include `[]` and `[][]` array types.
	#[arg(long)]
	pub arrays: bool,
	#[arg(long)]
	pub json: bool,
}

/// Print the registered type table.
pub fn run(args: Args) -> Result<()> {
	let rows: Vec<&TypeInfo> = registered_types().iter().filter(|info| args.arrays || info.descriptor.array_depth == 0).collect();

	if args.json {
		return emit_json(&TypesJson {
			count: rows.len(),
			types: rows.iter().map(|info| TypeJson::from_info(info)).collect(),
		});
	}

	println!("types: {}", rows.len());
	println!("id\tname\tunderlying\tcomponents\tsize");
	for info in rows {
		println!(
			"{}\t{}\t{}\t{}\t{}",
			info.descriptor.type_id.raw(),
			info.name,
			info.underlying_name,
			info.descriptor.component_count,
			info.element_size
		);
	}

	Ok(())
}

#[derive(Serialize)]
struct TypesJson {
	count: usize,
	types: Vec<TypeJson>,
}

#[derive(Serialize)]
struct TypeJson {
	id: u32,
	name: String,
	underlying: String,
	underlying_id: u32,
	components: u32,
	depth: i32,
	element_size: usize,
	role: bool,
}

impl TypeJson {
	fn from_info(info: &TypeInfo) -> Self {
		let descriptor = info.descriptor;
		Self {
			id: descriptor.type_id.raw(),
			name: info.name.clone(),
			underlying: type_name(descriptor.underlying_type_id).into_owned(),
			underlying_id: descriptor.underlying_type_id.raw(),
			components: descriptor.component_count,
			depth: descriptor.array_depth,
			element_size: info.element_size,
			role: descriptor.type_id != descriptor.underlying_type_id,
		}
	}
}
