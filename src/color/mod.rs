pub mod encoding;
pub mod image_source;
pub mod normalizer;
pub mod swatch;

pub use encoding::{ColorEncoding, ColorValue, ResolvedEncoding};
pub use image_source::ImageSource;
pub use normalizer::normalize;
pub use swatch::Swatch;
