//! centivec - Quantized 2D vector math
//!
//! A planar vector value type whose coordinates are rounded to two
//! decimal places at every construction path, with arithmetic,
//! normalization, angle computation, and rotation built on top of that
//! contract.

pub mod error;
pub mod round;
pub mod vector2;

pub use error::VectorError;
pub use vector2::{Product, Vector2D};
