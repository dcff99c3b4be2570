use geobin_core::json::compact_json;

/// Builds the minified `{"id":..,"properties":..}` fragment stored with a feature.
///
/// Only members present in the source are included. Returns `None` if neither is.
pub fn build_members(id: Option<&[u8]>, properties: Option<&[u8]>) -> Option<Vec<u8>> {
	if id.is_none() && properties.is_none() {
		return None;
	}
	let mut members = b"{".to_vec();
	if let Some(id) = id {
		members.extend_from_slice(b"\"id\":");
		members.extend_from_slice(id);
	}
	if let Some(properties) = properties {
		if members.len() > 1 {
			members.push(b',');
		}
		members.extend_from_slice(b"\"properties\":");
		members.extend_from_slice(properties);
	}
	members.push(b'}');
	Some(compact_json(&members))
}
