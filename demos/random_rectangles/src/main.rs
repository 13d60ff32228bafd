use argh::FromArgs;
use rand::{rngs::StdRng, Rng, SeedableRng};
use raster::image::{Image, ImageSize, Rgba};
use raster::imgproc::draw::draw_filled_rect;
use raster::io::functional as F;
use std::path::PathBuf;

#[derive(FromArgs)]
/// Draw random filled rectangles into an image
struct Args {
    /// path to the output image
    #[argh(option, short = 'o', default = "PathBuf::from(\"rectangles_image.png\")")]
    output: PathBuf,

    /// number of rectangles to draw
    #[argh(option, short = 'n', default = "300")]
    count: usize,

    /// width of the image in pixels
    #[argh(option, default = "512")]
    width: usize,

    /// height of the image in pixels
    #[argh(option, default = "512")]
    height: usize,

    /// seed of the random generator
    #[argh(option)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let size = ImageSize {
        width: args.width,
        height: args.height,
    };
    let mut img = Image::new(size)?;

    let (width, height) = (size.width as i64, size.height as i64);
    for _ in 0..args.count {
        let p0 = (rng.random_range(0..width), rng.random_range(0..height));
        let p1 = (rng.random_range(0..width), rng.random_range(0..height));
        let color = Rgba::rgb(rng.random(), rng.random(), rng.random());
        draw_filled_rect(&mut img, p0, p1, color)?;
    }

    F::save_image(&args.output, &img)?;
    log::info!("wrote {} rectangles to {}", args.count, args.output.display());

    Ok(())
}
