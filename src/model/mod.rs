//! Model layer
//!
//! - `product` - the static merchandise catalog
//! - `image` - image sources with placeholder fallback

pub mod image;
pub mod product;

// Re-export commonly used types
pub use image::ImageSource;
pub use product::{Product, CATALOG};
