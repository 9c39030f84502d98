use super::QuadtreeNode;

impl QuadtreeNode {
	/// Turns this subtree a quarter turn clockwise.
	///
	/// Every section moves one quadrant clockwise and is turned itself.
	/// The four sections are swapped as a whole, never one at a time.
	pub fn rotate_cw(&mut self) {
		if let Some(sects) = self.sections.take() {
			let [nw, ne, sw, se] = *sects;
			let mut rotated = Box::new([sw, nw, se, ne]);
			rotated.iter_mut().for_each(QuadtreeNode::rotate_cw);
			self.sections = Some(rotated);
		}
	}
}
