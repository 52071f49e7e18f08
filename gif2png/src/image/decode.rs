//! Image decoding

use image::{load_from_memory, DynamicImage, ImageResult};

/// Decode image from memory
///
/// The format is sniffed from the content, not the file name. Animated GIFs
/// decode to their first frame.
pub fn decode(data: &[u8]) -> ImageResult<DynamicImage> {
    load_from_memory(data)
}
