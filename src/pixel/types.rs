use bytemuck::{Pod, Zeroable};

/// Fully opaque 8-bit opacity.
pub const OPACITY_OPAQUE: u8 = u8::MAX;
/// Fully transparent 8-bit opacity.
pub const OPACITY_TRANSPARENT: u8 = 0;

/// Device-referred 8-bit RGB color exchanged with UI and display collaborators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct DeviceColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl DeviceColor {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<image::Rgb<u8>> for DeviceColor {
    fn from(px: image::Rgb<u8>) -> Self {
        let [r, g, b] = px.0;
        Self { r, g, b }
    }
}

impl From<DeviceColor> for image::Rgb<u8> {
    fn from(c: DeviceColor) -> Self {
        image::Rgb([c.r, c.g, c.b])
    }
}

/// One 16-bit BGRA pixel record, byte-compatible with the `RGBA16` color space.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Bgra16 {
    pub blue: u16,
    pub green: u16,
    pub red: u16,
    pub alpha: u16,
}

impl Bgra16 {
    pub const fn new(red: u16, green: u16, blue: u16, alpha: u16) -> Self {
        Self {
            blue,
            green,
            red,
            alpha,
        }
    }
}

/// One 8-bit BGRA pixel record, byte-compatible with the `RGBA` color space.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Bgra8 {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
    pub alpha: u8,
}

impl Bgra8 {
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            blue,
            green,
            red,
            alpha,
        }
    }
}
