use super::{read_object, write_object};
use anyhow::{Context, Result};
use geobin::AsObjectRef;
use log::info;
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// geobin file to read
	#[arg()]
	input_file: PathBuf,

	/// geobin file to write
	#[arg()]
	output_file: PathBuf,

	/// new ExData; removes the ExData if omitted
	#[arg(long, short, value_name = "text")]
	data: Option<String>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let object = read_object(&arguments.input_file)?;
	let data = arguments.data.as_deref().unwrap_or_default();

	let edited = object
		.as_object_ref()
		.try_set_ex_data(data.as_bytes())
		.with_context(|| format!("{:?} is not a readable geobin file", arguments.input_file))?;
	info!(
		"ExData of {:?}: {} -> {} bytes",
		arguments.input_file,
		object.ex_data().len(),
		data.len()
	);

	write_object(&arguments.output_file, &edited)
}
