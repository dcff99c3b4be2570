use super::GeometryKind;

const HAS_MEMBERS: u8 = 1;
const EXPORTED_BBOX: u8 = 1 << 1;

/// Decoded form of the head byte that follows the bbox of a complex object.
///
/// Bit 0 marks a members block, bit 1 marks a bbox that was given in the source and is
/// echoed on output, bits 4 to 7 hold the [`GeometryKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Head {
	pub kind: GeometryKind,
	pub has_members: bool,
	pub exported_bbox: bool,
}

impl Head {
	pub fn new(kind: GeometryKind, has_members: bool, exported_bbox: bool) -> Self {
		Head {
			kind,
			has_members,
			exported_bbox,
		}
	}

	pub fn from_byte(byte: u8) -> Self {
		Head {
			kind: GeometryKind::from(byte >> 4),
			has_members: byte & HAS_MEMBERS != 0,
			exported_bbox: byte & EXPORTED_BBOX != 0,
		}
	}

	pub fn to_byte(self) -> u8 {
		let mut byte = self.kind.as_u8() << 4;
		if self.has_members {
			byte |= HAS_MEMBERS;
		}
		if self.exported_bbox {
			byte |= EXPORTED_BBOX;
		}
		byte
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_head_bytes() {
		let head = Head::new(GeometryKind::Feature, true, true);
		assert_eq!(head.to_byte(), 0x83);
		assert_eq!(Head::from_byte(0x83), head);

		assert_eq!(Head::new(GeometryKind::Polygon, false, false).to_byte(), 0x50);
		assert_eq!(Head::new(GeometryKind::Point, false, true).to_byte(), 0x12);
	}

	#[test]
	fn test_unknown_kind_nibble() {
		let head = Head::from_byte(0xF1);
		assert_eq!(head.kind, GeometryKind::Unknown);
		assert!(head.has_members);
		assert!(!head.exported_bbox);
	}
}
