use std::path::PathBuf;

use argh::FromArgs;

use isoblur_image::Image;
use isoblur_imgproc::blur::{gaussian_blur, BlurEvent};
use isoblur_io::{read_image_rgb8, write_image_rgb8};

#[derive(FromArgs)]
/// Blurs an image using an isotropic Gaussian kernel.
struct Args {
    /// the input image file to blur
    #[argh(positional)]
    input: PathBuf,

    /// where to save the result
    #[argh(positional)]
    output: PathBuf,

    /// the standard deviation to use for the Gaussian kernel
    #[argh(option, default = "1.0")]
    sigma: f32,

    /// the size of the kernel
    #[argh(option, short = 'k', default = "5")]
    k: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    log::info!("Loading input image {}", args.input.display());
    let src = read_image_rgb8(&args.input)?;

    let mut dst = Image::from_size_val(src.size(), 0u8)?;
    gaussian_blur(&src, &mut dst, args.k, args.sigma, |event| match event {
        BlurEvent::ChannelsSplit => log::info!("Split the image into 3 channels"),
        BlurEvent::KernelBuilt { kernel_size, sigma } => {
            log::info!("Computed a gaussian kernel with size {kernel_size} and sigma {sigma}")
        }
        BlurEvent::ChannelConvolved { channel } => log::info!("Convolved channel {channel}"),
        BlurEvent::ChannelsMerged => log::info!("Merged the channels"),
    })?;

    log::info!("Saving result to {}", args.output.display());
    write_image_rgb8(&args.output, &dst)?;

    Ok(())
}
