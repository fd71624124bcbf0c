use isoblur_image::ImageError;

/// A 2D convolution kernel with odd dimensions.
///
/// The odd-dimension invariant is enforced at construction so that every kernel has a
/// unique center cell and the convolution hot path needs no shape checks.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel2d {
    data: Vec<f32>,
    rows: usize,
    cols: usize,
}

impl Kernel2d {
    /// Create a new kernel from row-major weights.
    ///
    /// # Arguments
    ///
    /// * `rows` - The number of kernel rows, must be odd.
    /// * `cols` - The number of kernel columns, must be odd.
    /// * `data` - The kernel weights in row-major order.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is even or the data length does not
    /// match `rows * cols`.
    pub fn new(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self, ImageError> {
        if rows % 2 != 1 || cols % 2 != 1 {
            return Err(ImageError::EvenKernelSize(rows, cols));
        }
        if data.len() != rows * cols {
            return Err(ImageError::InvalidKernelLength(data.len(), rows * cols));
        }

        Ok(Self { data, rows, cols })
    }

    /// The number of kernel rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of kernel columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Half the kernel extent in each direction, `(rows / 2, cols / 2)`.
    pub fn half_size(&self) -> (usize, usize) {
        (self.rows / 2, self.cols / 2)
    }

    /// The weight at kernel cell (u, v).
    #[inline]
    pub fn get(&self, u: usize, v: usize) -> f32 {
        debug_assert!(u < self.rows && v < self.cols);
        self.data[u * self.cols + v]
    }

    /// The kernel weights as a flat row-major slice.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

/// Create a normalized 2D isotropic gaussian kernel.
///
/// Each cell is the bivariate gaussian density `exp(-(x² + y²) / (2σ²)) / (2πσ²)`
/// evaluated at its integer offset from the center cell; the weights are then divided
/// by their total sum so the kernel sums to 1.0, correcting for the truncation of the
/// infinite-support density to a finite grid.
///
/// # Arguments
///
/// * `kernel_size` - The side length of the square kernel, must be odd.
/// * `sigma` - The standard deviation of the gaussian, must be positive and finite.
///
/// # Errors
///
/// Returns an error on an even `kernel_size` or a non-positive / non-finite `sigma`.
pub fn gaussian_kernel_2d(kernel_size: usize, sigma: f32) -> Result<Kernel2d, ImageError> {
    if kernel_size % 2 != 1 {
        return Err(ImageError::EvenKernelSize(kernel_size, kernel_size));
    }
    if !(sigma > 0.0 && sigma.is_finite()) {
        return Err(ImageError::InvalidSigma(sigma));
    }

    let mut data = Vec::with_capacity(kernel_size * kernel_size);

    let half = (kernel_size / 2) as i32;
    let sigma_sq = sigma * sigma;
    let norm = 2.0 * std::f32::consts::PI * sigma_sq;

    // compute the kernel
    for i in 0..kernel_size {
        let x = i as i32 - half;
        for j in 0..kernel_size {
            let y = j as i32 - half;
            let r_sq = (x * x + y * y) as f32;
            data.push((-r_sq / (2.0 * sigma_sq)).exp() / norm);
        }
    }

    // normalize the kernel
    let sum = data.iter().sum::<f32>();
    data.iter_mut().for_each(|k| *k /= sum);

    Kernel2d::new(kernel_size, kernel_size, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gaussian_kernel_2d_sums_to_one() -> Result<(), ImageError> {
        for kernel_size in [1, 3, 5, 7, 9, 11] {
            for sigma in [0.5, 1.0, 2.5] {
                let kernel = gaussian_kernel_2d(kernel_size, sigma)?;
                let sum = kernel.as_slice().iter().sum::<f32>();
                assert_relative_eq!(sum, 1.0, epsilon = 1e-6);
            }
        }
        Ok(())
    }

    #[test]
    fn test_gaussian_kernel_2d_even_size() {
        assert!(matches!(
            gaussian_kernel_2d(4, 1.0),
            Err(ImageError::EvenKernelSize(4, 4))
        ));
    }

    #[test]
    fn test_gaussian_kernel_2d_bad_sigma() {
        assert!(matches!(
            gaussian_kernel_2d(5, 0.0),
            Err(ImageError::InvalidSigma(_))
        ));
        assert!(matches!(
            gaussian_kernel_2d(5, -1.0),
            Err(ImageError::InvalidSigma(_))
        ));
        assert!(matches!(
            gaussian_kernel_2d(5, f32::NAN),
            Err(ImageError::InvalidSigma(_))
        ));
    }

    #[test]
    fn test_gaussian_kernel_2d_point_symmetry() -> Result<(), ImageError> {
        let size = 7;
        let kernel = gaussian_kernel_2d(size, 1.3)?;
        for i in 0..size {
            for j in 0..size {
                assert_eq!(kernel.get(i, j), kernel.get(size - 1 - i, size - 1 - j));
            }
        }
        Ok(())
    }

    #[test]
    fn test_gaussian_kernel_2d_center_is_max() -> Result<(), ImageError> {
        let kernel = gaussian_kernel_2d(5, 1.0)?;
        let center = kernel.get(2, 2);
        assert!(kernel.as_slice().iter().all(|&w| w <= center));

        // 3x3, sigma = 1: normalized center weight is 1 / (1 + 4e^-1/2 + 4e^-1)
        let kernel = gaussian_kernel_2d(3, 1.0)?;
        assert_relative_eq!(kernel.get(1, 1), 0.20417996, epsilon = 1e-6);
        Ok(())
    }

    #[test]
    fn test_kernel2d_validation() {
        assert!(matches!(
            Kernel2d::new(3, 2, vec![0.0; 6]),
            Err(ImageError::EvenKernelSize(3, 2))
        ));
        assert!(matches!(
            Kernel2d::new(3, 3, vec![0.0; 6]),
            Err(ImageError::InvalidKernelLength(6, 9))
        ));
    }
}
