//! Filter operations
//!
//! This module provides kernel construction and 2D convolution for image planes.

/// Filter kernels
pub mod kernels;

/// Convolution operations
mod convolution;
pub use convolution::*;

pub use kernels::Kernel2d;
