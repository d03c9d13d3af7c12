use std::fmt;
use std::str::FromStr;

use crate::channel::descriptor::ChannelDescriptor;
use crate::channel::layout::PixelLayout;
use crate::composite::blend::{CompositeParams, Mask, Surface, SurfaceMut};
use crate::display::materialize::{DisplayImage, pixel_count};
use crate::foundation::error::{PixelError, PixelResult};
use crate::pixel::types::DeviceColor;

/// Stable identity of a concrete color space.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum ColorSpaceId {
    /// 8 bits per channel, BGRA in memory.
    #[serde(rename = "RGBA")]
    Rgba8,
    /// 16 bits per channel, BGRA in memory.
    #[serde(rename = "RGBA16")]
    Rgba16,
}

impl ColorSpaceId {
    pub const ALL: [ColorSpaceId; 2] = [ColorSpaceId::Rgba8, ColorSpaceId::Rgba16];

    pub fn name(self) -> &'static str {
        match self {
            ColorSpaceId::Rgba8 => "RGBA",
            ColorSpaceId::Rgba16 => "RGBA16",
        }
    }

    pub fn bit_depth(self) -> u32 {
        match self {
            ColorSpaceId::Rgba8 => 8,
            ColorSpaceId::Rgba16 => 16,
        }
    }
}

impl fmt::Display for ColorSpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpaceId {
    type Err = PixelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| PixelError::validation(format!("unknown color space '{s}'")))
    }
}

/// Per-pixel strategy contract shared by every concrete color space.
///
/// All operations are stateless transforms over caller-owned byte buffers laid
/// out as described by [`ColorSpace::layout`]. A failing call reports a broken
/// buffer or index contract and leaves every output untouched.
pub trait ColorSpace: fmt::Debug + Send + Sync {
    fn id(&self) -> ColorSpaceId;

    fn layout(&self) -> &PixelLayout;

    /// Channels in declared order (red, green, blue, alpha for RGB spaces).
    fn channels(&self) -> &[ChannelDescriptor] {
        self.layout().channels()
    }

    fn n_channels(&self) -> usize {
        self.layout().n_channels()
    }

    fn n_color_channels(&self) -> usize {
        self.layout().n_color_channels()
    }

    fn has_alpha(&self) -> bool {
        self.layout().has_alpha()
    }

    /// Bytes per pixel record.
    fn pixel_size(&self) -> usize {
        self.layout().pixel_size()
    }

    /// Record used to seed fresh pixel storage: transparent black.
    fn default_pixel(&self) -> Vec<u8> {
        vec![0; self.pixel_size()]
    }

    /// Encode `color` into `dst`; `opacity == None` leaves alpha as it was.
    fn native_color(&self, color: DeviceColor, opacity: Option<u8>, dst: &mut [u8])
    -> PixelResult<()>;

    /// Decode a record into a device color and 8-bit opacity.
    fn to_device(&self, src: &[u8]) -> PixelResult<(DeviceColor, u8)>;

    fn to_device_color(&self, src: &[u8]) -> PixelResult<DeviceColor> {
        self.to_device(src).map(|(c, _)| c)
    }

    fn channel_value_text(&self, pixel: &[u8], index: usize) -> PixelResult<String>;

    fn normalised_channel_value_text(&self, pixel: &[u8], index: usize) -> PixelResult<String>;

    /// Overwrite alpha of `count` consecutive records.
    fn set_alpha(&self, pixels: &mut [u8], opacity: u8, count: usize) -> PixelResult<()>;

    /// Alpha-weighted average of `pixels` by `weights` into `dst`.
    fn mix_colors(&self, pixels: &[&[u8]], weights: &[u8], dst: &mut [u8]) -> PixelResult<()>;

    /// Blend `params.rows x params.cols` records of `src` onto `dst` in place.
    fn composite(
        &self,
        dst: SurfaceMut<'_>,
        src: Surface<'_>,
        mask: Option<Mask<'_>>,
        params: CompositeParams,
    ) -> PixelResult<()>;

    /// Decode `width * height` records into a caller-supplied RGBA8 buffer.
    fn write_display_rgba8(
        &self,
        src: &[u8],
        width: u32,
        height: u32,
        out: &mut [u8],
    ) -> PixelResult<()>;

    /// Decode `width * height` records into a new straight-alpha RGBA8 image.
    ///
    /// `x` and `y` locate the rectangle in the caller's image space; they do not
    /// change which bytes of `src` are read.
    fn to_display_image(
        &self,
        src: &[u8],
        width: u32,
        height: u32,
        x: i32,
        y: i32,
    ) -> PixelResult<DisplayImage> {
        tracing::trace!(space = %self.id(), width, height, x, y, "to_display_image");
        let count = pixel_count(width, height)?;
        self.layout().check_pixels(src.len(), count, "display source")?;
        let mut data = vec![0u8; count * 4];
        self.write_display_rgba8(src, width, height, &mut data)?;
        Ok(DisplayImage {
            width,
            height,
            data,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/space/strategy.rs"]
mod tests;
