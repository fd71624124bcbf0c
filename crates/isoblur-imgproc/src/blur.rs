//! The gaussian blur pipeline: split, build the kernel once, convolve each channel
//! plane with the shared kernel, merge.

use isoblur_image::{merge_channels, Image, ImageError};

use crate::filter::{convolve, kernels::gaussian_kernel_2d};

/// Progress events emitted by [`gaussian_blur`].
///
/// The pipeline reports progress through a caller-provided observer instead of an
/// ambient global logger, so the caller decides where the events go.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BlurEvent {
    /// The image has been split into its three channel planes.
    ChannelsSplit,
    /// The shared gaussian kernel has been built.
    KernelBuilt {
        /// The side length of the kernel.
        kernel_size: usize,
        /// The sigma of the kernel.
        sigma: f32,
    },
    /// One channel plane has been convolved.
    ChannelConvolved {
        /// The channel index, in (r, g, b) order.
        channel: usize,
    },
    /// The convolved planes have been merged back into an image.
    ChannelsMerged,
}

/// Blur an RGB image with an isotropic gaussian kernel.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image, same size as `src`.
/// * `kernel_size` - The side length of the gaussian kernel, must be odd.
/// * `sigma` - The sigma of the gaussian kernel, must be positive and finite.
/// * `observer` - Invoked with a [`BlurEvent`] after each pipeline stage.
///
/// # Errors
///
/// Returns an error on a size mismatch between `src` and `dst`, an even
/// `kernel_size` or an invalid `sigma`.
pub fn gaussian_blur(
    src: &Image<u8, 3>,
    dst: &mut Image<u8, 3>,
    kernel_size: usize,
    sigma: f32,
    mut observer: impl FnMut(BlurEvent),
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let (r, g, b) = src.split_channels()?;
    observer(BlurEvent::ChannelsSplit);

    let kernel = gaussian_kernel_2d(kernel_size, sigma)?;
    observer(BlurEvent::KernelBuilt { kernel_size, sigma });

    // each channel reads only its own input plane and the shared kernel
    let mut blurred = Vec::with_capacity(3);
    for (channel, plane) in [&r, &g, &b].into_iter().enumerate() {
        let mut out = Image::from_size_val(plane.size(), 0u8)?;
        convolve(plane, &mut out, &kernel)?;
        observer(BlurEvent::ChannelConvolved { channel });
        blurred.push(out);
    }

    let merged = merge_channels(&blurred[0], &blurred[1], &blurred[2])?;
    dst.as_slice_mut().copy_from_slice(merged.as_slice());
    observer(BlurEvent::ChannelsMerged);

    Ok(())
}
