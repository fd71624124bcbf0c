#![deny(missing_docs)]
//! Image types and channel operations for the isoblur engine.

/// image representation for the blur pipeline.
pub mod image;

/// Error types for the image module.
pub mod error;

/// operations on image pixel data.
pub mod ops;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
pub use crate::ops::merge_channels;
