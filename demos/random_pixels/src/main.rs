use argh::FromArgs;
use rand::{rngs::StdRng, Rng, SeedableRng};
use raster::image::{Image, ImageSize, Rgba};
use raster::io::functional as F;

#[derive(FromArgs)]
/// Write images where every pixel has a random color
struct Args {
    /// prefix of the output files, frames are written as <prefix>0000.png
    #[argh(option, short = 'o', default = "String::from(\"test\")")]
    output: String,

    /// number of frames to write
    #[argh(option, short = 'n', default = "2")]
    frames: usize,

    /// width of the images in pixels
    #[argh(option, default = "512")]
    width: usize,

    /// height of the images in pixels
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

    for frame in 0..args.frames {
        let mut img = Image::new(size)?;

        for y in 0..size.height as i64 {
            for x in 0..size.width as i64 {
                let color = Rgba::rgb(rng.random(), rng.random(), rng.random());
                img.set_pixel(x, y, color)?;
            }
        }

        let file_name = format!("{}{:04}.png", args.output, frame);
        F::save_image(&file_name, &img)?;
        log::info!("wrote frame {frame} to {file_name}");
    }

    Ok(())
}
