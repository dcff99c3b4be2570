use super::read_object;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// geobin file to decode
	#[arg()]
	input_file: PathBuf,

	/// write the GeoJSON to this file instead of stdout
	#[arg(long, short, value_name = "file")]
	output: Option<PathBuf>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let object = read_object(&arguments.input_file)?;
	let json = object
		.try_to_json()
		.with_context(|| format!("{:?} is not a readable geobin file", arguments.input_file))?;

	match &arguments.output {
		Some(path) => std::fs::write(path, json).with_context(|| format!("failed to write {path:?}"))?,
		None => println!("{json}"),
	}
	Ok(())
}
