use pretty_assertions::assert_eq;

use quadtree_prune::error::{BuildError, PixelError};
use quadtree_prune::{Quadtree, MAX_TOLERANCE};

const RED: image::Rgba<u8> = image::Rgba([255, 0, 0, 255]);
const GREEN: image::Rgba<u8> = image::Rgba([0, 255, 0, 255]);
const BLUE: image::Rgba<u8> = image::Rgba([0, 0, 255, 255]);
const WHITE: image::Rgba<u8> = image::Rgba([255, 255, 255, 255]);

fn four_colors() -> image::RgbaImage {
	let mut img = image::RgbaImage::new(2, 2);
	img.put_pixel(0, 0, RED);
	img.put_pixel(1, 0, GREEN);
	img.put_pixel(0, 1, BLUE);
	img.put_pixel(1, 1, WHITE);
	img
}

#[test]
fn four_color_tree_shape() {
	let tree = Quadtree::from_source(&four_colors(), 2).unwrap();
	assert_eq!(tree.node_count(), 5);
	assert_eq!(tree.leaf_count(), 4);
	let root = tree.root().unwrap();
	assert_eq!(root.color(), image::Rgba([127, 127, 127, 255]));
	let colors = root.sections().unwrap().iter().map(|s| s.color()).collect::<Vec<_>>();
	assert_eq!(colors, vec![RED, GREEN, BLUE, WHITE]);
}

#[test]
fn four_color_decompress() {
	let tree = Quadtree::from_source(&four_colors(), 2).unwrap();
	assert_eq!(tree.decompress(), four_colors());
	assert_eq!(tree.get_pixel(1, 0), Ok(GREEN));
	assert_eq!(
		tree.get_pixel(2, 1),
		Err(PixelError::OutOfBounds { x: 2, y: 1, resolution: 2 })
	);
}

#[test]
fn four_color_prune_size() {
	let tree = Quadtree::from_source(&four_colors(), 2).unwrap();
	assert_eq!(tree.prune_size(MAX_TOLERANCE), 1);
	// No leaf matches the gray average exactly.
	assert_eq!(tree.prune_size(0), 4);
	// Red, green and blue are 128^2 + 2 * 127^2 from gray; white is 3 * 128^2.
	assert_eq!(tree.prune_size(3 * 128 * 128 - 1), 4);
	assert_eq!(tree.prune_size(3 * 128 * 128), 1);
}

#[test]
fn four_color_ideal_prune() {
	let tree = Quadtree::from_source(&four_colors(), 2).unwrap();
	assert_eq!(tree.ideal_prune(4), 0);
	assert_eq!(tree.ideal_prune(100), 0);
	// No tolerance gives exactly 2 or 3 leaves; the next step down is 1.
	assert_eq!(tree.ideal_prune(3), 3 * 128 * 128);
	assert_eq!(tree.ideal_prune(2), 3 * 128 * 128);
	assert_eq!(tree.ideal_prune(1), 3 * 128 * 128);
}

#[test]
fn four_color_prune_to_one() {
	let mut tree = Quadtree::from_source(&four_colors(), 2).unwrap();
	tree.prune(tree.ideal_prune(1));
	assert_eq!(tree.leaf_count(), 1);
	let gray = image::Rgba([127, 127, 127, 255]);
	assert_eq!(tree.decompress(), image::RgbaImage::from_pixel(2, 2, gray));
}

#[test]
fn four_color_rotate() {
	let mut tree = Quadtree::from_source(&four_colors(), 2).unwrap();
	tree.clockwise_rotate();
	let img = tree.decompress();
	assert_eq!(*img.get_pixel(0, 0), BLUE);
	assert_eq!(*img.get_pixel(1, 0), RED);
	assert_eq!(*img.get_pixel(0, 1), WHITE);
	assert_eq!(*img.get_pixel(1, 1), GREEN);
	assert_eq!(tree.leaf_count(), 4);
	assert_eq!(tree.resolution(), 2);
}

#[test]
fn larger_source_uses_top_left_block() {
	let source = image::RgbaImage::from_fn(5, 3, |x, y| image::Rgba([x as u8, y as u8, 0, 255]));
	let tree = Quadtree::from_source(&source, 2).unwrap();
	assert_eq!(tree.get_pixel(1, 1), Ok(image::Rgba([1, 1, 0, 255])));
	assert_eq!(
		Quadtree::from_source(&source, 4),
		Err(BuildError::SourceTooSmall { width: 5, height: 3, resolution: 4 })
	);
}

#[test]
fn single_pixel_tree() {
	let source = image::RgbaImage::from_pixel(1, 1, RED);
	let mut tree = Quadtree::from_source(&source, 1).unwrap();
	assert_eq!(tree.node_count(), 1);
	tree.clockwise_rotate();
	tree.prune(0);
	assert_eq!(tree.prune_size(0), 1);
	assert_eq!(tree.ideal_prune(1), 0);
	assert_eq!(tree.decompress(), source);
}
