pub mod color;
pub mod error;
pub mod image;
pub mod prune;
pub mod rotate;

use color::Color;

/// Index of the northwest section.
pub const NW: usize = 0;
/// Index of the northeast section.
pub const NE: usize = 1;
/// Index of the southwest section.
pub const SW: usize = 2;
/// Index of the southeast section.
pub const SE: usize = 3;

/// Node in a quadtree for storing an image.
///
/// Either has exactly four subnodes (branch node) or none (leaf node).
/// Sections are ordered NW, NE, SW, SE: bit 0 of an index picks the east
/// half and bit 1 the south half.
///
/// A branch's color is the average of its sections when built. Pruning
/// turns a branch into a leaf without touching its color, so below the
/// top of a pruned block the color is whatever it was at that moment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuadtreeNode {
	pub(crate) color: Color,
	pub(crate) sections: Option<Box<[QuadtreeNode; 4]>>,
}

impl QuadtreeNode {
	/// Makes a leaf node of a single color.
	pub fn leaf(color: Color) -> Self {
		Self { color, sections: None }
	}

	/// Makes a branch node whose color is the average of `sections`.
	pub fn branch(sections: [QuadtreeNode; 4]) -> Self {
		let color = color::average(&[
			sections[NW].color,
			sections[NE].color,
			sections[SW].color,
			sections[SE].color,
		]);
		Self { color, sections: Some(Box::new(sections)) }
	}

	pub fn color(&self) -> Color {
		self.color
	}

	pub fn sections(&self) -> Option<&[QuadtreeNode; 4]> {
		self.sections.as_deref()
	}

	pub fn is_leaf(&self) -> bool {
		self.sections.is_none()
	}

	/// Number of leaves in this subtree.
	pub fn leaf_count(&self) -> usize {
		match self.sections {
			Some(ref sects) => sects.iter().map(QuadtreeNode::leaf_count).sum(),
			None => 1,
		}
	}

	/// Number of nodes in this subtree, this one included.
	pub fn node_count(&self) -> usize {
		match self.sections {
			Some(ref sects) => 1 + sects.iter().map(QuadtreeNode::node_count).sum::<usize>(),
			None => 1,
		}
	}

	/// Looks up the color at `(x, y)` within a subtree covering a `size` by
	/// `size` square.
	///
	/// Coordinates are relative to the subtree's top-left corner and must be
	/// less than `size`. Lands on the pixel itself or on the leaf of the
	/// pruned block containing it.
	pub fn get(&self, size: u32, x: u32, y: u32) -> Color {
		match self.sections {
			None => self.color,
			Some(ref sects) => {
				let half = size / 2;
				let (east, south) = (x >= half, y >= half);
				let ind = (east as usize) | (south as usize) << 1;
				sects[ind].get(
					half,
					if east { x - half } else { x },
					if south { y - half } else { y },
				)
			}
		}
	}
}
