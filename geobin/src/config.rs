/// Options for [`Encoder`](crate::Encoder).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncoderConfig {
	/// Store axis-aligned rectangle polygons and box multipolygons as simple rect objects.
	pub rect_optimization: bool,
	/// Maximum nesting of collections and features. Deeper input is rejected.
	pub max_depth: usize,
}

impl Default for EncoderConfig {
	fn default() -> Self {
		Self {
			rect_optimization: true,
			max_depth: 64,
		}
	}
}

impl EncoderConfig {
	pub fn with_rect_optimization(mut self, enabled: bool) -> Self {
		self.rect_optimization = enabled;
		self
	}

	pub fn with_max_depth(mut self, max_depth: usize) -> Self {
		self.max_depth = max_depth;
		self
	}
}
