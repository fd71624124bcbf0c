use std::path::Path;

use isoblur_image::{Image, ImageSize};

use crate::error::IoError;

/// Reads an RGB image from the given file path.
///
/// The method tries to read any image format supported by the image crate, but only
/// accepts 8-bit RGB content; the blur pipeline is defined for exactly three channels,
/// so anything else (grayscale, RGBA, 16-bit) is rejected with
/// [`IoError::UnsupportedColorType`] carrying the actual color type.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An image containing the decoded pixel data.
pub fn read_image_rgb8(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let file_path = file_path.as_ref();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let img = image::ImageReader::open(file_path)?
        .with_guessed_format()?
        .decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    match img.color() {
        image::ColorType::Rgb8 => Ok(Image::new(size, img.into_rgb8().into_raw())?),
        color => Err(IoError::UnsupportedColorType(color)),
    }
}

/// Writes an RGB image to the given file path.
///
/// The format is chosen from the file extension by the image crate.
///
/// # Arguments
///
/// * `file_path` - The path to write the image to.
/// * `image` - The image to encode.
pub fn write_image_rgb8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 3>,
) -> Result<(), IoError> {
    image::save_buffer(
        file_path.as_ref(),
        image.as_slice(),
        image.width() as u32,
        image.height() as u32,
        image::ExtendedColorType::Rgb8,
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_file() {
        let result = read_image_rgb8("/definitely/not/here.png");
        assert!(matches!(result, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn test_write_read_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempfile::tempdir()?;
        let file_path = tmp.path().join("roundtrip.png");

        let image = Image::new(
            ImageSize {
                width: 4,
                height: 2,
            },
            (0..24).collect(),
        )?;

        write_image_rgb8(&file_path, &image)?;
        let read_back = read_image_rgb8(&file_path)?;

        assert_eq!(read_back.size(), image.size());
        assert_eq!(read_back.as_slice(), image.as_slice());
        Ok(())
    }

    #[test]
    fn test_read_rejects_non_rgb() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempfile::tempdir()?;
        let file_path = tmp.path().join("gray.png");

        // a grayscale png decodes as L8 and must be rejected
        image::save_buffer(
            &file_path,
            &[0u8, 64, 128, 255],
            2,
            2,
            image::ExtendedColorType::L8,
        )?;

        let result = read_image_rgb8(&file_path);
        assert!(matches!(
            result,
            Err(IoError::UnsupportedColorType(image::ColorType::L8))
        ));
        Ok(())
    }
}
