use isoblur_image::{Image, ImageError};

use super::kernels::Kernel2d;

/// Convolve the kernel with the plane at a single location.
///
/// Border policy: if the kernel window centered at (row, col) would extend outside the
/// plane in any direction, the convolution is not computed and the original input sample
/// is returned unchanged (as `f32`). Pixels within half a kernel of any edge are
/// therefore passed through untouched rather than zero-padded, mirrored or clamped.
///
/// The accumulation uses the flipped kernel access pattern (the sample for kernel cell
/// (u, v) is taken at `(row + kh - u, col + kw - v)`): true mathematical convolution,
/// not cross-correlation. For a point-symmetric gaussian kernel the flip is a no-op,
/// but it matters for asymmetric kernels.
///
/// (row, col) must lie within the plane.
///
/// # Arguments
///
/// * `src` - The input channel plane.
/// * `kernel` - The convolution kernel.
/// * `row` - The row location to convolve at.
/// * `col` - The column location to convolve at.
///
/// # Returns
///
/// The unrounded convolution accumulator at (row, col).
pub fn convolve_pixel(src: &Image<u8, 1>, kernel: &Kernel2d, row: usize, col: usize) -> f32 {
    let (kh, kw) = kernel.half_size();
    let cols = src.cols();
    let src_data = src.as_slice();

    // shrinking border: the window must sit fully inside the plane
    if row < kh || col < kw || row + kh >= src.rows() || col + kw >= cols {
        return src_data[row * cols + col] as f32;
    }

    let mut acc = 0.0f32;
    for u in 0..kernel.rows() {
        let src_row = row + kh - u;
        for v in 0..kernel.cols() {
            let src_col = col + kw - v;
            acc += kernel.get(u, v) * src_data[src_row * cols + src_col] as f32;
        }
    }
    acc
}

/// Convolve the kernel with every pixel of the plane.
///
/// Each output cell is computed from the input plane only, in raster order, with
/// [`convolve_pixel`] semantics, then rounded to the nearest integer and clamped to the
/// `[0, 255]` sample range before narrowing to `u8`.
///
/// # Arguments
///
/// * `src` - The input channel plane.
/// * `dst` - The output channel plane.
/// * `kernel` - The convolution kernel.
///
/// # Errors
///
/// Returns an error if `src` and `dst` do not have the same size.
pub fn convolve(
    src: &Image<u8, 1>,
    dst: &mut Image<u8, 1>,
    kernel: &Kernel2d,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let cols = src.cols();
    let dst_data = dst.as_slice_mut();

    for row in 0..src.rows() {
        for col in 0..cols {
            let acc = convolve_pixel(src, kernel, row, col);
            dst_data[row * cols + col] = acc.round().clamp(0.0, 255.0) as u8;
        }
    }

    Ok(())
}
