use crate::{Image, ImageError};

/// Merge three channel planes into a single RGB image.
///
/// The planes are interleaved per pixel in (r, g, b) order.
///
/// # Arguments
///
/// * `r` - The red channel plane.
/// * `g` - The green channel plane.
/// * `b` - The blue channel plane.
///
/// # Errors
///
/// If the planes do not all have the same size, an error is returned.
///
/// # Example
///
/// ```
/// use isoblur_image::{merge_channels, Image, ImageSize};
///
/// let size = ImageSize { width: 1, height: 2 };
/// let r = Image::<u8, 1>::new(size, vec![0, 3]).unwrap();
/// let g = Image::<u8, 1>::new(size, vec![1, 4]).unwrap();
/// let b = Image::<u8, 1>::new(size, vec![2, 5]).unwrap();
///
/// let image = merge_channels(&r, &g, &b).unwrap();
/// assert_eq!(image.as_slice(), &[0, 1, 2, 3, 4, 5]);
/// ```
pub fn merge_channels<T>(
    r: &Image<T, 1>,
    g: &Image<T, 1>,
    b: &Image<T, 1>,
) -> Result<Image<T, 3>, ImageError>
where
    T: Copy,
{
    for plane in [g, b] {
        if plane.size() != r.size() {
            return Err(ImageError::InvalidImageSize(
                r.width(),
                r.height(),
                plane.width(),
                plane.height(),
            ));
        }
    }

    let mut data = Vec::with_capacity(r.as_slice().len() * 3);
    for ((&r_val, &g_val), &b_val) in r
        .as_slice()
        .iter()
        .zip(g.as_slice().iter())
        .zip(b.as_slice().iter())
    {
        data.push(r_val);
        data.push(g_val);
        data.push(b_val);
    }

    Image::new(r.size(), data)
}
