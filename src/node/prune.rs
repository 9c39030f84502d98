use super::color::{self, Color};
use super::QuadtreeNode;

impl QuadtreeNode {
	/// Whether every leaf in this subtree lies within `tolerance` of `target`.
	fn leaves_within(&self, target: &Color, tolerance: u32) -> bool {
		match self.sections {
			None => color::distance(&self.color, target) <= tolerance,
			Some(ref sects) => sects.iter().all(|s| s.leaves_within(target, tolerance)),
		}
	}

	/// Whether this subtree can be collapsed into a single leaf at `tolerance`.
	///
	/// Every leaf below is compared with this node's stored color, not with
	/// its own parent's. A leaf is trivially prunable.
	pub fn is_prunable(&self, tolerance: u32) -> bool {
		self.leaves_within(&self.color, tolerance)
	}

	/// Collapses every maximal prunable subtree into a leaf keeping its
	/// stored color.
	///
	/// Subtrees that can't be collapsed as a whole are searched section by
	/// section, so different regions can end up cut at different depths.
	pub fn prune(&mut self, tolerance: u32) {
		if self.is_prunable(tolerance) {
			self.sections = None;
		} else if let Some(ref mut sects) = self.sections {
			sects.iter_mut().for_each(|s| s.prune(tolerance));
		}
	}

	/// Number of leaves this subtree would have after `prune(tolerance)`.
	pub fn prune_size(&self, tolerance: u32) -> usize {
		match self.sections {
			Some(ref sects) if !self.is_prunable(tolerance) =>
				sects.iter().map(|s| s.prune_size(tolerance)).sum(),
			_ => 1,
		}
	}
}
