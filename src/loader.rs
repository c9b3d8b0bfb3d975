//! Turns uploaded bytes into an RGB chart image

use crate::error::DecodeError;
use image::{ImageFormat, RgbImage};
use std::path::Path;

/// A decoded chart. Never modified after construction.
#[derive(Clone, Debug)]
pub struct SourceImage {
    name: String,
    pixels: RgbImage,
}

impl SourceImage {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbImage {
        &self.pixels
    }
}

/// Sniff the content, accept PNG or JPEG only, and flatten to RGB.
pub fn decode(name: impl Into<String>, bytes: &[u8]) -> Result<SourceImage, DecodeError> {
    let format = image::guess_format(bytes).map_err(|_| DecodeError::UnsupportedFormat)?;
    if !matches!(format, ImageFormat::Png | ImageFormat::Jpeg) {
        return Err(DecodeError::UnsupportedFormat);
    }

    let pixels = image::load_from_memory_with_format(bytes, format)?.to_rgb8();
    if pixels.width() == 0 || pixels.height() == 0 {
        return Err(DecodeError::EmptyImage);
    }

    Ok(SourceImage {
        name: name.into(),
        pixels,
    })
}

pub fn read_file(path: &Path) -> Result<SourceImage, DecodeError> {
    let bytes = std::fs::read(path).map_err(|source| DecodeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("image")
        .to_string();
    decode(name, &bytes)
}

#[cfg(test)]
pub(crate) fn encode(img: image::DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = std::io::Cursor::new(Vec::new());
    img.write_to(&mut buf, format).unwrap();
    buf.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgb, Rgba, RgbaImage};

    #[test]
    fn png_with_alpha_is_flattened_to_rgb() {
        let img = RgbaImage::from_pixel(8, 4, Rgba([10, 20, 30, 128]));
        let bytes = encode(DynamicImage::ImageRgba8(img), ImageFormat::Png);

        let source = decode("chart.png", &bytes).unwrap();
        assert_eq!((source.width(), source.height()), (8, 4));
        assert_eq!(source.name(), "chart.png");
        assert_eq!(*source.pixels().get_pixel(3, 2), Rgb([10, 20, 30]));
    }

    #[test]
    fn jpeg_is_accepted() {
        let img = RgbImage::from_pixel(16, 9, Rgb([200, 200, 200]));
        let bytes = encode(DynamicImage::ImageRgb8(img), ImageFormat::Jpeg);

        let source = decode("chart.jpg", &bytes).unwrap();
        assert_eq!((source.width(), source.height()), (16, 9));
    }

    #[test]
    fn text_renamed_to_png_is_rejected() {
        let err = decode("notes.png", b"just some notes, not a picture\n").unwrap_err();
        assert!(matches!(err, DecodeError::UnsupportedFormat));
    }

    #[test]
    fn other_image_formats_are_rejected() {
        let img = RgbImage::from_pixel(4, 4, Rgb([0, 0, 0]));
        let bytes = encode(DynamicImage::ImageRgb8(img), ImageFormat::Bmp);

        let err = decode("chart.bmp", &bytes).unwrap_err();
        assert!(matches!(err, DecodeError::UnsupportedFormat));
    }

    #[test]
    fn truncated_png_fails_to_decode() {
        let img = RgbImage::from_pixel(32, 32, Rgb([1, 2, 3]));
        let bytes = encode(DynamicImage::ImageRgb8(img), ImageFormat::Png);

        let err = decode("cut.png", &bytes[..bytes.len() / 2]).unwrap_err();
        assert!(matches!(err, DecodeError::Decode(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let path = Path::new("/nonexistent/nomograph.png");
        let err = read_file(path).unwrap_err();
        match err {
            DecodeError::Read { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
