use tracing::{debug, trace};

use crate::node::color::{Color, MAX_DISTANCE};
use crate::node::error::{BuildError, DrawError, PixelError};
use crate::node::image::{PixelSink, PixelSource};
use crate::node::QuadtreeNode;

/// Highest tolerance worth trying: at this point any subtree is prunable.
pub const MAX_TOLERANCE: u32 = MAX_DISTANCE;

/// A square image of `resolution` by `resolution` pixels stored as a
/// quadtree.
///
/// An empty quadtree (from `new` or `clear`) has no root and a resolution
/// of 0. Cloning copies the whole tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Quadtree {
	root: Option<QuadtreeNode>,
	resolution: u32,
}

impl Quadtree {
	/// Makes an empty quadtree.
	pub fn new() -> Self {
		Default::default()
	}

	/// Builds a quadtree from the `resolution` by `resolution` block in the
	/// top-left corner of `source`.
	pub fn from_source<S: PixelSource + ?Sized>(
		source: &S,
		resolution: u32,
	) -> Result<Self, BuildError> {
		let mut tree = Self::new();
		tree.build(source, resolution)?;
		Ok(tree)
	}

	/// Replaces this quadtree with one built from the `resolution` by
	/// `resolution` block in the top-left corner of `source`.
	///
	/// On error the current tree is kept as it was.
	pub fn build<S: PixelSource + ?Sized>(
		&mut self,
		source: &S,
		resolution: u32,
	) -> Result<(), BuildError> {
		if !resolution.is_power_of_two() {
			return Err(BuildError::InvalidResolution(resolution));
		}
		if source.width() < resolution || source.height() < resolution {
			return Err(BuildError::SourceTooSmall {
				width: source.width(),
				height: source.height(),
				resolution,
			});
		}
		let root = QuadtreeNode::mount(source, resolution, (0, 0));
		debug!(resolution, nodes = root.node_count(), "built quadtree");
		self.root = Some(root);
		self.resolution = resolution;
		Ok(())
	}

	/// Releases the whole tree, leaving an empty quadtree.
	pub fn clear(&mut self) {
		self.root = None;
		self.resolution = 0;
	}

	pub fn is_empty(&self) -> bool {
		self.root.is_none()
	}

	/// Side length of the represented square; 0 when empty.
	pub fn resolution(&self) -> u32 {
		self.resolution
	}

	pub fn root(&self) -> Option<&QuadtreeNode> {
		self.root.as_ref()
	}

	pub fn leaf_count(&self) -> usize {
		self.root.as_ref().map_or(0, QuadtreeNode::leaf_count)
	}

	pub fn node_count(&self) -> usize {
		self.root.as_ref().map_or(0, QuadtreeNode::node_count)
	}

	/// Retrieves the pixel at `(x, y)`.
	///
	/// If the pixel lies in a pruned block, the block's color is returned.
	/// Coordinates outside the image are an error rather than a default
	/// color.
	pub fn get_pixel(&self, x: u32, y: u32) -> Result<Color, PixelError> {
		let root = self.root.as_ref().ok_or(PixelError::EmptyTree)?;
		if x >= self.resolution || y >= self.resolution {
			return Err(PixelError::OutOfBounds { x, y, resolution: self.resolution });
		}
		Ok(root.get(self.resolution, x, y))
	}

	/// Renders the image the quadtree currently represents.
	///
	/// Pixels in pruned blocks all get the block's color. An empty quadtree
	/// gives a 0 by 0 image.
	pub fn decompress(&self) -> image::RgbaImage {
		let mut img = image::RgbaImage::new(self.resolution, self.resolution);
		if let Some(ref root) = self.root {
			root.draw(&mut img, self.resolution, (0, 0));
		}
		img
	}

	/// Renders the image into the top-left corner of `sink`.
	///
	/// Pixels are written row by row, top to bottom within each block, and
	/// blocks in NW, NE, SW, SE order. Nothing is written if `sink` is too
	/// small, nor for an empty quadtree.
	pub fn decompress_into<K: PixelSink + ?Sized>(&self, sink: &mut K) -> Result<(), DrawError> {
		if sink.width() < self.resolution || sink.height() < self.resolution {
			return Err(DrawError::SinkTooSmall {
				width: sink.width(),
				height: sink.height(),
				resolution: self.resolution,
			});
		}
		if let Some(ref root) = self.root {
			root.draw(sink, self.resolution, (0, 0));
		}
		Ok(())
	}

	/// Rotates the image 90 degrees clockwise.
	pub fn clockwise_rotate(&mut self) {
		if let Some(ref mut root) = self.root {
			root.rotate_cw();
		}
	}

	/// Collapses every subtree whose leaves are all within `tolerance`
	/// (squared RGB distance) of the subtree's own color.
	pub fn prune(&mut self, tolerance: u32) {
		if let Some(ref mut root) = self.root {
			let before = root.leaf_count();
			root.prune(tolerance);
			debug!(tolerance, before, after = root.leaf_count(), "pruned quadtree");
		}
	}

	/// Number of leaves the quadtree would have after `prune(tolerance)`,
	/// without changing it.
	///
	/// Never increases as `tolerance` grows.
	pub fn prune_size(&self, tolerance: u32) -> usize {
		self.root.as_ref().map_or(0, |root| root.prune_size(tolerance))
	}

	/// Finds the smallest tolerance for which pruning leaves at most
	/// `num_leaves` leaves.
	///
	/// Every probe walks the whole tree, so this costs
	/// O(nodes * log(MAX_TOLERANCE)). Returns 0 for an empty quadtree. Any
	/// non-empty tree prunes to a single leaf at `MAX_TOLERANCE`, so that is
	/// also the answer when `num_leaves` is 0.
	pub fn ideal_prune(&self, num_leaves: usize) -> u32 {
		let root = match self.root {
			Some(ref root) => root,
			None => return 0,
		};
		let (mut low, mut high) = (0, MAX_TOLERANCE);
		while low < high {
			let mid = low + (high - low) / 2;
			let size = root.prune_size(mid);
			trace!(low, high, mid, size, "tolerance probe");
			if size <= num_leaves {
				high = mid;
			} else {
				low = mid + 1;
			}
		}
		debug!(num_leaves, tolerance = low, "found ideal tolerance");
		low
	}
}
