pub type Color = image::Rgba<u8>;

/// Color with headroom for summing channels.
type BigColor = image::Rgba<u32>;

/// The largest possible value of `distance`: black against white.
pub const MAX_DISTANCE: u32 = 3 * 255 * 255;

fn abs_sub(a: u8, b: u8) -> u32 {
	(a as i32 - b as i32).abs() as u32
}

fn vec3_len_squared(a: u32, b: u32, c: u32) -> u32 {
	a * a + b * b + c * c
}

/// Squared distance between two colors.
///
/// Only red, green and blue count; alpha is ignored.
pub fn distance(a: &Color, b: &Color) -> u32 {
	vec3_len_squared(
		abs_sub(a.0[0], b.0[0]),
		abs_sub(a.0[1], b.0[1]),
		abs_sub(a.0[2], b.0[2]),
	)
}

fn color_add_big(a: BigColor, b: &Color) -> BigColor {
	image::Rgba::<u32>([
		a.0[0] + b.0[0] as u32,
		a.0[1] + b.0[1] as u32,
		a.0[2] + b.0[2] as u32,
		a.0[3] + b.0[3] as u32,
	])
}

/// Per-channel average of four colors, alpha included, rounded down.
pub fn average(colors: &[Color; 4]) -> Color {
	let sum = colors.iter().fold(image::Rgba::<u32>([0; 4]), color_add_big);
	image::Rgba::<u8>([
		(sum.0[0] / 4) as u8,
		(sum.0[1] / 4) as u8,
		(sum.0[2] / 4) as u8,
		(sum.0[3] / 4) as u8,
	])
}
