use argh::FromArgs;
use rand::{rngs::StdRng, Rng, SeedableRng};
use raster::image::{Image, ImageSize, Rgba};
use raster::imgproc::draw::draw_line;
use raster::io::functional as F;
use std::path::PathBuf;

#[derive(FromArgs)]
/// Draw random lines into an image
struct Args {
    /// path to the output image
    #[argh(option, short = 'o', default = "PathBuf::from(\"lines_image.png\")")]
    output: PathBuf,

    /// number of lines to draw
    #[argh(option, short = 'n', default = "1000")]
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

fn rand_pos(rng: &mut StdRng, size: ImageSize) -> (i64, i64) {
    (
        rng.random_range(0..size.width as i64),
        rng.random_range(0..size.height as i64),
    )
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

    for _ in 0..args.count {
        let p0 = rand_pos(&mut rng, size);
        let p1 = rand_pos(&mut rng, size);
        let color = Rgba::rgb(rng.random(), rng.random(), rng.random());
        draw_line(&mut img, p0, p1, color)?;
    }

    F::save_image(&args.output, &img)?;
    log::info!("wrote {} lines to {}", args.count, args.output.display());

    Ok(())
}
