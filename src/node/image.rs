use super::color::Color;
use super::QuadtreeNode;

/// Something pixels can be read from, such as a decoded image file.
pub trait PixelSource {
	fn width(&self) -> u32;
	fn height(&self) -> u32;
	/// Color at `(x, y)`, for `x < width()` and `y < height()`.
	fn pixel_at(&self, x: u32, y: u32) -> Color;
}

/// Something pixels can be written to.
pub trait PixelSink {
	fn width(&self) -> u32;
	fn height(&self) -> u32;
	/// Sets the color at `(x, y)`, for `x < width()` and `y < height()`.
	fn set_pixel(&mut self, x: u32, y: u32, color: Color);
}

impl PixelSource for image::RgbaImage {
	fn width(&self) -> u32 {
		image::RgbaImage::width(self)
	}
	fn height(&self) -> u32 {
		image::RgbaImage::height(self)
	}
	fn pixel_at(&self, x: u32, y: u32) -> Color {
		*self.get_pixel(x, y)
	}
}

impl PixelSink for image::RgbaImage {
	fn width(&self) -> u32 {
		image::RgbaImage::width(self)
	}
	fn height(&self) -> u32 {
		image::RgbaImage::height(self)
	}
	fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
		self.put_pixel(x, y, color);
	}
}

impl QuadtreeNode {
	/// Builds the subtree for the `size` by `size` block of `source` whose
	/// top-left corner is `start_pos`.
	///
	/// `size` must be a power of two and the block must lie within
	/// `source`; `Quadtree::build` checks both before calling this.
	pub fn mount<S: PixelSource + ?Sized>(
		source: &S,
		size: u32,
		start_pos: (u32, u32),
	) -> Self {
		if size <= 1 {
			return Self::leaf(source.pixel_at(start_pos.0, start_pos.1));
		}
		let half = size / 2;
		let mount_section = |sect_ind: u32| Self::mount(
			source,
			half,
			(
				start_pos.0 + (sect_ind & 1) * half,
				start_pos.1 + (sect_ind >> 1) * half,
			),
		);
		Self::branch([
			mount_section(0),
			mount_section(1),
			mount_section(2),
			mount_section(3),
		])
	}

	/// Draws this subtree into `sink` as a `size` by `size` square whose
	/// top-left corner is `start_pos`.
	///
	/// Leaves are drawn as solid blocks of their color, so every pixel gets
	/// the same color `get` would return for it. The square must lie within
	/// `sink`.
	pub fn draw<K: PixelSink + ?Sized>(&self, sink: &mut K, size: u32, start_pos: (u32, u32)) {
		match self.sections {
			None => {
				for row in start_pos.1..(start_pos.1 + size) {
					for col in start_pos.0..(start_pos.0 + size) {
						sink.set_pixel(col, row, self.color);
					}
				}
			}
			Some(ref sects) => {
				let half = size / 2;
				let positions = [
					(start_pos.0, start_pos.1),
					(start_pos.0 + half, start_pos.1),
					(start_pos.0, start_pos.1 + half),
					(start_pos.0 + half, start_pos.1 + half),
				];
				for (ind, section) in sects.iter().enumerate() {
					section.draw(sink, half, positions[ind]);
				}
			}
		}
	}
}
