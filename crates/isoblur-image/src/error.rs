/// An error type for the image module.
#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    /// Error when the data length does not match the image shape.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the channel index is out of bounds.
    #[error("Channel index ({0}) out of bounds ({1})")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when two images are expected to have the same size.
    #[error("Invalid image size ({0}, {1}) != ({2}, {3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the pixel data cannot be cast to the requested type.
    #[error("Failed to cast image data to {0}")]
    CastError(String),

    /// Error when a kernel dimension is even.
    #[error("Kernel dimensions must be odd, got {0}x{1}")]
    EvenKernelSize(usize, usize),

    /// Error when the kernel data length does not match the kernel shape.
    #[error("Kernel data length ({0}) does not match the kernel shape ({1})")]
    InvalidKernelLength(usize, usize),

    /// Error when the gaussian sigma is not a positive finite number.
    #[error("Gaussian sigma must be positive and finite, got {0}")]
    InvalidSigma(f32),
}
