use super::write_object;
use anyhow::{Context, Result};
use geobin::{Encoder, EncoderConfig};
use log::info;
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON file: a geometry, a Feature or a FeatureCollection
	#[arg()]
	input_file: PathBuf,

	/// geobin file to write
	#[arg()]
	output_file: PathBuf,

	/// keep axis-aligned rectangles as polygons instead of storing them as their bbox
	#[arg(long, display_order = 1)]
	no_rect_optimization: bool,

	/// maximum nesting of collections and features
	#[arg(long, value_name = "int", default_value_t = EncoderConfig::default().max_depth, display_order = 1)]
	max_depth: usize,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	info!("encode {:?} to {:?}", arguments.input_file, arguments.output_file);

	let json = std::fs::read(&arguments.input_file)
		.with_context(|| format!("failed to read {:?}", arguments.input_file))?;

	let config = EncoderConfig::default()
		.with_rect_optimization(!arguments.no_rect_optimization)
		.with_max_depth(arguments.max_depth);
	let object = Encoder::new(config)
		.try_encode_bytes(&json)
		.with_context(|| format!("{:?} is not valid GeoJSON", arguments.input_file))?;

	write_object(&arguments.output_file, &object)?;
	info!("wrote {} bytes", object.as_binary().len());
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;
	use anyhow::Result;
	use assert_fs::TempDir;
	use geobin::{AsObjectRef, Object};

	fn encode(json: &str, extra: &[&str]) -> Result<Object> {
		let temp_dir = TempDir::new()?;
		let input = temp_dir.path().join("input.geojson");
		let output = temp_dir.path().join("output.bin");
		std::fs::write(&input, json)?;

		let mut args = vec!["geobin", "encode", "-q", input.to_str().unwrap(), output.to_str().unwrap()];
		args.extend_from_slice(extra);
		run_command(args)?;
		Ok(Object::wrap(std::fs::read(&output)?))
	}

	const SQUARE: &str = r#"{"type":"Polygon","coordinates":[[[0,0],[0,1],[1,1],[1,0],[0,0]]]}"#;

	#[test]
	fn test_encode() -> Result<()> {
		assert_eq!(encode(SQUARE, &[])?, Object::new_rect_2d(0.0, 0.0, 1.0, 1.0));
		Ok(())
	}

	#[test]
	fn test_encode_without_rect_optimization() -> Result<()> {
		let object = encode(SQUARE, &["--no-rect-optimization"])?;
		assert!(object.as_object_ref().is_complex());
		assert_eq!(object.to_json(), SQUARE);
		Ok(())
	}

	#[test]
	fn test_encode_rejects_invalid_input() {
		let error = encode(r#"{"type":"Bogus"}"#, &[]).unwrap_err();
		assert!(format!("{error:#}").contains("unrecognized type \"Bogus\""));

		let nested = r#"{"type":"GeometryCollection","geometries":[{"type":"GeometryCollection","geometries":[]}]}"#;
		assert!(encode(nested, &["--max-depth", "0"]).is_err());
		assert!(encode(nested, &["--max-depth", "1"]).is_ok());
	}
}
