use super::read_object;
use anyhow::Result;
use geobin::{AsObjectRef, Object};
use itertools::Itertools;
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// geobin file to inspect
	#[arg()]
	input_file: PathBuf,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let object = read_object(&arguments.input_file)?;
	println!("{}", describe(&object)?);
	Ok(())
}

/// One `key: value` line per structural fact of `object`.
fn describe(object: &Object) -> Result<String> {
	let object = object.as_object_ref();
	let mut lines = vec![format!("size: {} bytes", object.len())];

	if object.is_geometry() {
		let view = object.geometry_view()?;
		let (min, max) = object.rect();
		let dims = view.dims;
		lines.push(format!("kind: {}", view.kind));
		lines.push(format!("dims: {dims}"));
		lines.push(format!("layout: {}", if view.simple { "simple" } else { "complex" }));
		lines.push(format!(
			"rect: [{}] - [{}]",
			min[..dims].iter().join(", "),
			max[..dims].iter().join(", ")
		));
		lines.push(format!("bbox exported: {}", view.exported_bbox));
		lines.push(format!("positions: {}", view.position_count()?));
		if let Some(members) = view.members {
			lines.push(format!("members: {}", String::from_utf8_lossy(members)));
		}
	} else {
		lines.push("kind: string".to_string());
	}

	let components = object.try_components()?;
	lines.push(format!("exdata: {} bytes", components.ex_data.len()));
	Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tests::run_command;
	use assert_fs::TempDir;
	use pretty_assertions::assert_eq;

	#[test]
	fn test_describe_feature() -> Result<()> {
		let object = Object::from_json(
			r#"{"type":"Feature","id":7,"properties":{"name":"x"},"geometry":{"type":"LineString","coordinates":[[0,0],[2,1]]}}"#,
		)
		.set_ex_data(b"abc");
		assert_eq!(
			describe(&object)?,
			[
				format!("size: {} bytes", object.as_binary().len()).as_str(),
				"kind: Feature",
				"dims: 2",
				"layout: complex",
				"rect: [0, 0] - [2, 1]",
				"bbox exported: false",
				"positions: 2",
				r#"members: {"id":7,"properties":{"name":"x"}}"#,
				"exdata: 3 bytes",
			]
			.join("\n")
		);
		Ok(())
	}

	#[test]
	fn test_describe_simple_and_string() -> Result<()> {
		let rect = Object::new_rect_3d(0.0, 0.0, 0.0, 1.0, 2.0, 3.0);
		let description = describe(&rect)?;
		assert!(description.contains("kind: MultiPolygon"));
		assert!(description.contains("layout: simple"));
		assert!(description.contains("rect: [0, 0, 0] - [1, 2, 3]"));

		let text = describe(&Object::new_string("hello"))?;
		assert_eq!(text, "size: 6 bytes\nkind: string\nexdata: 0 bytes");
		Ok(())
	}

	#[test]
	fn test_info_command() -> Result<()> {
		let temp_dir = TempDir::new()?;
		let input = temp_dir.path().join("point.bin");
		std::fs::write(&input, Object::new_point_2d(1.0, 2.0).as_binary())?;
		run_command(vec!["geobin", "info", "-q", input.to_str().unwrap()])?;
		Ok(())
	}
}
