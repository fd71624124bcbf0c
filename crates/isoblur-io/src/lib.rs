#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the io module.
pub mod error;

/// High-level read and write functions for images.
pub mod functional;

pub use crate::error::IoError;
pub use crate::functional::{read_image_rgb8, write_image_rgb8};
