use image::error::ImageError;

use quadtree_prune::Quadtree;

use tracing::info;
use tracing_subscriber::EnvFilter;

/// Helper function for `main`.
fn error_exit(msg: &str, code: i32) -> ! {
	eprintln!("{}", msg);
	std::process::exit(code)
}

/// Exits with the message and status code matching an `image` error.
fn image_error_exit(e: ImageError) -> ! {
	let (msg, code) = match e {
		ImageError::Decoding(_) => ("Invalid image data", 4),
		ImageError::Limits(_) => ("Computation limits exceeded", 5),
		ImageError::IoError(_) => ("File could not be read or written", 3),
		ImageError::Unsupported(_) => ("Unsupported image format", 4),
		_ => ("An error occurred", 10)
	};
	error_exit(msg, code)
}

/// Parses an optional numeric argument, exiting on garbage.
fn numeric_arg<T: std::str::FromStr>(matches: &clap::ArgMatches, name: &str) -> Option<T> {
	matches.value_of(name).map(|v| match v.parse() {
		Ok(n) => n,
		Err(_) => error_exit(&format!("Non-numeric value for {}", name), 2)
	})
}

/// Largest power of two no bigger than `n`, or 0.
fn floor_power_of_two(n: u32) -> u32 {
	if n == 0 { 0 } else { 1 << (31 - n.leading_zeros()) }
}

/// `clap`-based CLI for pruning images through a quadtree.
///
/// May exit process with status code if there are errors:
///
/// 1: `clap` error
///
/// 2: invalid arguments
///
/// 3: file I/O issues
///
/// 4: invalid image data
///
/// 5: computation limits exceeded
///
/// 10: other, potentially unknown error
fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	let clap_matches = clap::App::new("quadtree_prune")
		.version("0.1.0")
		.author("vkcz")
		.about("Compresses an image by pruning its quadtree and writes the result back out.")
		.arg_from_usage("-r, --resolution=[N] 'Side length of the top-left block to use; must be a power of two; defaults to the largest that fits'")
		.arg_from_usage("-t, --tolerance=[N] 'Prune with this squared color distance tolerance'")
		.arg_from_usage("-l, --leaves=[N] 'Prune with the smallest tolerance leaving at most N leaves'")
		.arg_from_usage("-c, --rotate=[N] 'Number of clockwise quarter turns to apply; defaults to 0'")
		.arg_from_usage("<INPUT> 'Path to input image'")
		.arg_from_usage("[OUTPUT] 'Path to output image; defaults to INPUT with a .pruned.png extension'")
		.get_matches();

	if clap_matches.is_present("tolerance") && clap_matches.is_present("leaves") {
		error_exit("Only one of -t/--tolerance and -l/--leaves may be present", 2);
	}

	let input_path = match clap_matches.value_of("INPUT") {
		Some(p) => p,
		None => error_exit("Missing input path", 2)
	};
	let source = match image::open(input_path) {
		Ok(i) => i.into_rgba8(),
		Err(e) => image_error_exit(e)
	};
	let resolution = numeric_arg(&clap_matches, "resolution")
		.unwrap_or_else(|| floor_power_of_two(source.width().min(source.height())));
	let rotations = numeric_arg::<u32>(&clap_matches, "rotate").unwrap_or(0);

	let mut tree = match Quadtree::from_source(&source, resolution) {
		Ok(t) => t,
		Err(e) => error_exit(&format!("Cannot build quadtree: {}", e), 2)
	};
	info!(resolution, leaves = tree.leaf_count(), "loaded {}", input_path);

	for _ in 0..rotations % 4 {
		tree.clockwise_rotate();
	}

	let tolerance = match numeric_arg::<usize>(&clap_matches, "leaves") {
		Some(leaves) => Some(tree.ideal_prune(leaves)),
		None => numeric_arg::<u32>(&clap_matches, "tolerance")
	};
	if let Some(tolerance) = tolerance {
		tree.prune(tolerance);
		info!(tolerance, leaves = tree.leaf_count(), "pruned");
	}

	let default_output = input_path.rsplitn(2, '.').last().unwrap_or(input_path).to_string()
		+ ".pruned.png";
	let output_path = clap_matches.value_of("OUTPUT").unwrap_or(&default_output);
	if let Err(e) = tree.decompress().save(output_path) {
		image_error_exit(e)
	}
}
