//! Decoding source images into embeddable PDF image XObjects.

use image::{Rgba, RgbaImage};
use lopdf::{Stream, dictionary};

/// An image decoded to 8-bit RGB, transparency flattened onto white.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    width: u32,
    height: u32,
    rgb: Vec<u8>,
}

impl DecodedImage {
    /// Decode GIF, PNG or JPEG bytes. Animated GIFs contribute their first frame.
    pub fn decode(bytes: &[u8]) -> Result<Self, String> {
        let decoded = image::load_from_memory(bytes).map_err(|e| e.to_string())?;
        let rgba = decoded.to_rgba8();
        Ok(Self::from_rgba(&rgba))
    }

    fn from_rgba(rgba: &RgbaImage) -> Self {
        let (width, height) = rgba.dimensions();
        let mut rgb = Vec::with_capacity(width as usize * height as usize * 3);
        for Rgba([r, g, b, a]) in rgba.pixels().copied() {
            rgb.extend([blend_on_white(r, a), blend_on_white(g, a), blend_on_white(b, a)]);
        }
        Self { width, height, rgb }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Image XObject stream carrying the raw RGB samples.
    pub fn to_xobject(&self) -> Stream {
        Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => i64::from(self.width),
                "Height" => i64::from(self.height),
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
            },
            self.rgb.clone(),
        )
    }
}

fn blend_on_white(channel: u8, alpha: u8) -> u8 {
    let (c, a) = (u16::from(channel), u16::from(alpha));
    ((c * a + 255 * (255 - a) + 127) / 255) as u8
}
