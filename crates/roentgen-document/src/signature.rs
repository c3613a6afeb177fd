// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Signature image decoding — turns the uploaded PNG/JPEG blob into pixel data
// the PDF exporter can embed. Decoding is an explicit fallible step at the
// component boundary; the caller chooses how to degrade when the blob is
// unusable.

use image::DynamicImage;
use printpdf::{RawImage, RawImageData, RawImageFormat};
use roentgen_core::error::{Result, RoentgenError};
use tracing::{debug, instrument};

/// Signatures wider than this are downscaled before embedding. The placed
/// image is only 40mm wide on the page, so extra pixels add bytes, not detail.
const MAX_WIDTH_PX: u32 = 600;

/// A decoded, size-bounded signature image ready for PDF embedding.
#[derive(Debug)]
pub struct SignatureImage {
    image: DynamicImage,
}

impl SignatureImage {
    /// Decode raw PNG/JPEG bytes into a bounded-size image.
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn decode(data: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(data).map_err(|err| {
            RoentgenError::ImageError(format!("failed to decode signature: {err}"))
        })?;
        debug!(
            width = img.width(),
            height = img.height(),
            "Signature decoded"
        );

        let img = if img.width() > MAX_WIDTH_PX {
            img.resize(MAX_WIDTH_PX, u32::MAX, image::imageops::FilterType::Lanczos3)
        } else {
            img
        };

        Ok(Self { image: img })
    }

    /// Width in pixels after any downscaling.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels after any downscaling.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Convert to printpdf's raw image form (RGB8) for embedding.
    pub fn to_raw_image(&self) -> RawImage {
        let rgb = self.image.to_rgb8();
        RawImage {
            pixels: RawImageData::U8(rgb.into_raw()),
            width: self.image.width() as usize,
            height: self.image.height() as usize,
            data_format: RawImageFormat::RGB8,
            tag: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]));
        let mut buf = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut buf);
        DynamicImage::ImageRgba8(img)
            .write_to(&mut cursor, ImageFormat::Png)
            .expect("PNG encoding");
        buf
    }

    #[test]
    fn decodes_valid_png() {
        let sig = SignatureImage::decode(&png_bytes(120, 48)).unwrap();
        assert_eq!(sig.width(), 120);
        assert_eq!(sig.height(), 48);
    }

    #[test]
    fn corrupt_blob_is_an_error() {
        let err = SignatureImage::decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, RoentgenError::ImageError(_)));
    }

    #[test]
    fn oversized_signature_is_downscaled() {
        let sig = SignatureImage::decode(&png_bytes(1800, 600)).unwrap();
        assert_eq!(sig.width(), MAX_WIDTH_PX);
        // Aspect ratio preserved: 1800x600 -> 600x200.
        assert_eq!(sig.height(), 200);
    }

    #[test]
    fn raw_image_is_rgb8() {
        let sig = SignatureImage::decode(&png_bytes(30, 10)).unwrap();
        let raw = sig.to_raw_image();
        assert_eq!(raw.width, 30);
        assert_eq!(raw.height, 10);
        assert!(matches!(raw.data_format, RawImageFormat::RGB8));
        match raw.pixels {
            RawImageData::U8(bytes) => assert_eq!(bytes.len(), 30 * 10 * 3),
            _ => panic!("expected U8 pixel data"),
        }
    }
}
