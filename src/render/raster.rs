use std::io::Cursor;

use crate::{
    assets::decode::unpremultiply_rgba8_in_place,
    foundation::error::{SpriteError, SpriteResult},
};

/// Premultiplied RGBA8 drawing surface, row-major, tightly packed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Largest surface allocated for one sprite, in pixels (8192 x 8192).
pub const MAX_RASTER_PIXELS: u64 = 1 << 26;

impl Raster {
    /// Fully transparent surface. Fails above [`MAX_RASTER_PIXELS`].
    pub fn transparent(width: u32, height: u32) -> SpriteResult<Self> {
        let pixels = u64::from(width) * u64::from(height);
        if pixels > MAX_RASTER_PIXELS {
            return Err(SpriteError::geometry(format!(
                "raster {width}x{height} exceeds {MAX_RASTER_PIXELS} pixels"
            )));
        }
        let len = usize::try_from(pixels * 4)
            .map_err(|_| SpriteError::geometry(format!("raster {width}x{height} overflows")))?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Straight-alpha copy of the pixels.
    pub fn to_straight_rgba(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        unpremultiply_rgba8_in_place(&mut out);
        out
    }

    pub fn encode_png(&self) -> SpriteResult<Vec<u8>> {
        if self.width == 0 || self.height == 0 {
            return Err(SpriteError::encode(format!(
                "cannot encode empty {}x{} raster",
                self.width, self.height
            )));
        }
        let img = image::RgbaImage::from_raw(self.width, self.height, self.to_straight_rgba())
            .ok_or_else(|| SpriteError::encode("pixel buffer does not match raster size"))?;

        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .map_err(|e| SpriteError::encode(format!("png: {e}")))?;
        Ok(buf)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
