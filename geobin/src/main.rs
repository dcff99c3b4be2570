mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Encode a GeoJSON file into a geobin file
	Encode(tools::encode::Subcommand),

	/// Print a geobin file as GeoJSON
	Decode(tools::decode::Subcommand),

	/// Show the structure of a geobin file
	Info(tools::info::Subcommand),

	#[clap(alias = "exdata")]
	/// Replace the ExData of a geobin file
	SetExdata(tools::set_exdata::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Encode(arguments) => tools::encode::run(arguments),
		Commands::Decode(arguments) => tools::decode::run(arguments),
		Commands::Info(arguments) => tools::info::run(arguments),
		Commands::SetExdata(arguments) => tools::set_exdata::run(arguments),
	}
}

#[cfg(test)]
mod tests {
	use crate::{Cli, run};
	use anyhow::Result;
	use clap::Parser;

	pub fn run_command(arg_vec: Vec<&str>) -> Result<String> {
		let cli = Cli::try_parse_from(arg_vec)?;
		let msg = format!("{:?}", cli);
		run(cli)?;
		Ok(msg)
	}

	#[test]
	fn help() {
		let err = run_command(vec!["geobin"]).unwrap_err().to_string();
		assert!(err.starts_with("A compact, self-describing binary encoding for GeoJSON geometries"));
		assert!(err.contains("\nUsage: geobin [OPTIONS] <COMMAND>"));
	}

	#[test]
	fn version() {
		let err = run_command(vec!["geobin", "-V"]).unwrap_err().to_string();
		assert!(err.starts_with("geobin "));
	}

	#[test]
	fn encode_subcommand() {
		let output = run_command(vec!["geobin", "encode"]).unwrap_err().to_string();
		assert!(output.starts_with("Encode a GeoJSON file into a geobin file"));
	}

	#[test]
	fn decode_subcommand() {
		let output = run_command(vec!["geobin", "decode"]).unwrap_err().to_string();
		assert!(output.starts_with("Print a geobin file as GeoJSON"));
	}

	#[test]
	fn info_subcommand() {
		let output = run_command(vec!["geobin", "info"]).unwrap_err().to_string();
		assert!(output.starts_with("Show the structure of a geobin file"));
	}

	#[test]
	fn set_exdata_subcommand() {
		let output = run_command(vec!["geobin", "set-exdata"]).unwrap_err().to_string();
		assert!(output.starts_with("Replace the ExData of a geobin file"));
	}
}
