//! Image encoding: PNG

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ColorType, DynamicImage, ImageEncoder, ImageResult};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PngCompression {
    Fast,
    #[default]
    Default,
    Best,
}

impl From<PngCompression> for CompressionType {
    fn from(compression: PngCompression) -> Self {
        match compression {
            PngCompression::Fast => CompressionType::Fast,
            PngCompression::Default => CompressionType::Default,
            PngCompression::Best => CompressionType::Best,
        }
    }
}

/// Compress an image to PNG format with the specified compression level
pub fn compress_to_png<W>(
    img: &DynamicImage,
    writer: W,
    compression: PngCompression,
) -> ImageResult<()>
where
    W: std::io::Write,
{
    let is_grayscale = img.color() == ColorType::L8 || img.color() == ColorType::La8;

    let encoder = PngEncoder::new_with_quality(
        writer,
        compression.into(),
        if is_grayscale {
            FilterType::NoFilter
        } else {
            FilterType::Adaptive
        },
    );

    encoder.write_image(
        img.as_bytes(),
        img.width(),
        img.height(),
        img.color().into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgba, RgbaImage};

    #[test]
    fn png_signature_for_every_level() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 4])));

        for compression in [PngCompression::Fast, PngCompression::Default, PngCompression::Best] {
            let mut buffer = Vec::new();
            compress_to_png(&img, &mut buffer, compression).unwrap();
            assert_eq!(&buffer[..8], b"\x89PNG\r\n\x1a\n");
        }
    }

    #[test]
    fn grayscale_keeps_pixels() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(2, 5, Luma([128])));
        let mut buffer = Vec::new();
        compress_to_png(&img, &mut buffer, PngCompression::Best).unwrap();

        let decoded = image::load_from_memory(&buffer).unwrap();
        assert_eq!(decoded.color(), ColorType::L8);
        assert_eq!(decoded.to_luma8().get_pixel(1, 4), &Luma([128]));
    }
}
