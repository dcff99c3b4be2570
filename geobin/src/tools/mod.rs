pub mod decode;
pub mod encode;
pub mod info;
pub mod set_exdata;

use anyhow::{Context, Result};
use geobin::Object;
use std::path::Path;

/// Reads a geobin file. The bytes are trusted as they are.
pub fn read_object(path: &Path) -> Result<Object> {
	let data = std::fs::read(path).with_context(|| format!("failed to read {path:?}"))?;
	Ok(Object::wrap(data))
}

pub fn write_object(path: &Path, object: &Object) -> Result<()> {
	std::fs::write(path, object.as_binary()).with_context(|| format!("failed to write {path:?}"))
}
