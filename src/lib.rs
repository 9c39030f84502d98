//! Lossy image compression with quadtrees.
//!
//! A square, power-of-two sized image is split into quadrants down to single
//! pixels, with every branch holding the average color of its four sections.
//! Pruning collapses subtrees whose pixels are all close to the subtree's
//! color, trading leaves for fidelity.

pub mod node;
pub mod quadtree;

pub use node::*;
pub use quadtree::{Quadtree, MAX_TOLERANCE};
