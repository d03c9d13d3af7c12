//! Bridges between `image` rasters and native BGRA pixel records.

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::pixel::types::{Bgra8, Bgra16};

/// 16-bit RGBA raster as used by `image::DynamicImage::to_rgba16`.
pub type Rgba16Image = ImageBuffer<Rgba<u16>, Vec<u16>>;

/// Native `RGBA16` records for every pixel of `img`, row-major.
pub fn import_rgba16(img: &Rgba16Image) -> Vec<u8> {
    let records: Vec<Bgra16> = img
        .pixels()
        .map(|&Rgba([r, g, b, a])| Bgra16::new(r, g, b, a))
        .collect();
    bytemuck::cast_slice(&records).to_vec()
}

/// Native `RGBA` records for every pixel of `img`, row-major.
pub fn import_rgba8(img: &RgbaImage) -> Vec<u8> {
    let records: Vec<Bgra8> = img
        .pixels()
        .map(|&Rgba([r, g, b, a])| Bgra8::new(r, g, b, a))
        .collect();
    bytemuck::cast_slice(&records).to_vec()
}

#[cfg(test)]
#[path = "../../tests/unit/display/interop.rs"]
mod tests;
