use thiserror::Error;

/// Reason why a quadtree couldn't be built from a pixel source.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
	/// The resolution is zero or not a power of two.
	#[error("resolution {0} is not a power of two")]
	InvalidResolution(u32),
	/// The source doesn't cover the requested top-left block.
	#[error("{width}x{height} source is smaller than resolution {resolution}")]
	SourceTooSmall { width: u32, height: u32, resolution: u32 },
}

/// Reason why a pixel couldn't be looked up.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PixelError {
	/// The coordinates lie outside `[0, resolution)`.
	#[error("pixel ({x}, {y}) is outside a {resolution}x{resolution} tree")]
	OutOfBounds { x: u32, y: u32, resolution: u32 },
	/// The quadtree holds no image.
	#[error("the quadtree is empty")]
	EmptyTree,
}

/// Reason why a quadtree couldn't be drawn into a pixel sink.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DrawError {
	/// The sink can't hold the whole `resolution` by `resolution` grid.
	#[error("{width}x{height} sink is smaller than resolution {resolution}")]
	SinkTooSmall { width: u32, height: u32, resolution: u32 },
}
