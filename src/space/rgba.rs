use std::marker::PhantomData;

use crate::channel::depth::ChannelDepth;
use crate::channel::layout::PixelLayout;
use crate::composite::blend::{self, CompositeParams, Mask, Surface, SurfaceMut};
use crate::display::materialize;
use crate::foundation::error::PixelResult;
use crate::mix::mixer;
use crate::pixel::types::DeviceColor;
use crate::pixel::{alpha, codec, text};
use crate::space::strategy::{ColorSpace, ColorSpaceId};

/// RGB + alpha color space at channel depth `C`, stored BGRA.
///
/// One implementation serves every depth; only the channel table differs.
#[derive(Debug, Clone)]
pub struct RgbaSpace<C: ChannelDepth> {
    id: ColorSpaceId,
    layout: PixelLayout,
    _depth: PhantomData<C>,
}

/// The 16-bit-per-channel variant, id `RGBA16`.
pub type RgbaU16Space = RgbaSpace<u16>;
/// The 8-bit-per-channel variant, id `RGBA`.
pub type RgbaU8Space = RgbaSpace<u8>;

impl<C: ChannelDepth> RgbaSpace<C> {
    fn with_id(id: ColorSpaceId) -> Self {
        Self {
            id,
            layout: PixelLayout::bgra::<C>(),
            _depth: PhantomData,
        }
    }
}

impl RgbaSpace<u16> {
    pub fn new() -> Self {
        Self::with_id(ColorSpaceId::Rgba16)
    }
}

impl Default for RgbaSpace<u16> {
    fn default() -> Self {
        Self::new()
    }
}

impl RgbaSpace<u8> {
    pub fn new() -> Self {
        Self::with_id(ColorSpaceId::Rgba8)
    }
}

impl Default for RgbaSpace<u8> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ChannelDepth> ColorSpace for RgbaSpace<C> {
    fn id(&self) -> ColorSpaceId {
        self.id
    }

    fn layout(&self) -> &PixelLayout {
        &self.layout
    }

    fn native_color(
        &self,
        color: DeviceColor,
        opacity: Option<u8>,
        dst: &mut [u8],
    ) -> PixelResult<()> {
        codec::encode::<C>(&self.layout, color, opacity, dst)
    }

    fn to_device(&self, src: &[u8]) -> PixelResult<(DeviceColor, u8)> {
        codec::decode::<C>(&self.layout, src)
    }

    fn channel_value_text(&self, pixel: &[u8], index: usize) -> PixelResult<String> {
        text::channel_value_text::<C>(&self.layout, pixel, index)
    }

    fn normalised_channel_value_text(&self, pixel: &[u8], index: usize) -> PixelResult<String> {
        text::normalised_channel_value_text::<C>(&self.layout, pixel, index)
    }

    fn set_alpha(&self, pixels: &mut [u8], opacity: u8, count: usize) -> PixelResult<()> {
        alpha::set_alpha::<C>(&self.layout, pixels, opacity, count)
    }

    fn mix_colors(&self, pixels: &[&[u8]], weights: &[u8], dst: &mut [u8]) -> PixelResult<()> {
        mixer::mix_colors::<C>(&self.layout, pixels, weights, dst)
    }

    fn composite(
        &self,
        dst: SurfaceMut<'_>,
        src: Surface<'_>,
        mask: Option<Mask<'_>>,
        params: CompositeParams,
    ) -> PixelResult<()> {
        blend::composite::<C>(&self.layout, dst, src, mask, params)
    }

    fn write_display_rgba8(
        &self,
        src: &[u8],
        width: u32,
        height: u32,
        out: &mut [u8],
    ) -> PixelResult<()> {
        materialize::write_rgba8::<C>(&self.layout, src, width, height, out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/space/rgba.rs"]
mod tests;
