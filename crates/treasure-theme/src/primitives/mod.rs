//! Primitive presentation values stored in theme component tables.
//!
//! - [`Color`]: RGBA color with hex and system-name parsing
//! - [`Font`]: family, size and weight
//! - [`Image`]: name of a bundled image resource

mod color;
mod font;
mod image;

pub use color::{Color, ColorParseError};
pub use font::{Font, FontFamily, FontWeight};
pub use image::Image;
