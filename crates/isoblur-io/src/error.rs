use std::path::PathBuf;

/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(PathBuf),

    /// Error from the image codec while decoding or encoding.
    #[error("Error with the image codec: {0}")]
    ImageCodecError(#[from] image::ImageError),

    /// Error when the decoded image is not 8-bit RGB.
    #[error("Unsupported color type {0:?}, expected 8-bit RGB")]
    UnsupportedColorType(image::ColorType),

    /// Error from creating the in-memory image.
    #[error("Error with the image container: {0}")]
    ImageError(#[from] isoblur_image::ImageError),

    /// Error from reading or writing the file.
    #[error("Error while reading or writing the file: {0}")]
    FileError(#[from] std::io::Error),
}
