//! GIF to PNG conversion of a single file

mod decode;
mod encode;

pub use decode::decode;
pub use encode::{compress_to_png, PngCompression};

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use image::ImageError;

use crate::error::FileError;

/// Decode `src` and write it to `dst` as PNG, truncating `dst` if it exists.
///
/// Nothing is cleaned up on failure: an encode that fails halfway leaves a
/// partial `dst` behind.
pub fn convert_file(src: &Path, dst: &Path, compression: PngCompression) -> Result<(), FileError> {
    let data = fs::read(src)
        .map_err(ImageError::IoError)
        .map_err(FileError::Decode)?;
    let img = decode(&data).map_err(FileError::Decode)?;

    log::debug!(
        "Decoded {} ({}x{}, {:?})",
        src.display(),
        img.width(),
        img.height(),
        img.color()
    );

    let file = File::create(dst)
        .map_err(ImageError::IoError)
        .map_err(FileError::Encode)?;
    let mut writer = BufWriter::new(file);
    compress_to_png(&img, &mut writer, compression).map_err(FileError::Encode)?;
    writer
        .flush()
        .map_err(ImageError::IoError)
        .map_err(FileError::Encode)?;

    log::trace!("Encoded image: {}", dst.display());
    Ok(())
}
