//! Conversion between native pixel records and 8-bit device colors.

use crate::channel::depth::ChannelDepth;
use crate::channel::descriptor::ChannelDescriptor;
use crate::channel::layout::PixelLayout;
use crate::foundation::error::PixelResult;
use crate::pixel::types::{DeviceColor, OPACITY_OPAQUE};

#[inline]
pub(crate) fn read_channel<C: ChannelDepth>(pixel: &[u8], ch: &ChannelDescriptor) -> C {
    C::read(&pixel[ch.byte_range()])
}

#[inline]
pub(crate) fn write_channel<C: ChannelDepth>(pixel: &mut [u8], ch: &ChannelDescriptor, v: C) {
    v.write(&mut pixel[ch.byte_range()]);
}

/// Encode `color` into the first pixel record of `dst`.
///
/// Color channels are widened from 8 bits by [`ChannelDepth::from_u8`]. With
/// `opacity == None` the alpha channel keeps whatever `dst` already held.
pub(crate) fn encode<C: ChannelDepth>(
    layout: &PixelLayout,
    color: DeviceColor,
    opacity: Option<u8>,
    dst: &mut [u8],
) -> PixelResult<()> {
    layout.check_pixels(dst.len(), 1, "native_color")?;
    for (ch, v) in layout.color_channels().zip([color.r, color.g, color.b]) {
        write_channel(dst, ch, C::from_u8(v));
    }
    if let (Some(opacity), Some(alpha)) = (opacity, layout.alpha_channel()) {
        write_channel(dst, alpha, C::from_u8(opacity));
    }
    Ok(())
}

/// Decode the first pixel record of `src` into a device color and 8-bit opacity.
///
/// Layouts without alpha report [`OPACITY_OPAQUE`].
pub(crate) fn decode<C: ChannelDepth>(
    layout: &PixelLayout,
    src: &[u8],
) -> PixelResult<(DeviceColor, u8)> {
    layout.check_pixels(src.len(), 1, "to_device")?;
    Ok(decode_unchecked::<C>(layout, src))
}

/// [`decode`] for callers that already validated the buffer.
#[inline]
pub(crate) fn decode_unchecked<C: ChannelDepth>(
    layout: &PixelLayout,
    src: &[u8],
) -> (DeviceColor, u8) {
    let mut rgb = [0u8; 3];
    for (slot, ch) in rgb.iter_mut().zip(layout.color_channels()) {
        *slot = read_channel::<C>(src, ch).to_u8();
    }
    let opacity = layout
        .alpha_channel()
        .map_or(OPACITY_OPAQUE, |ch| read_channel::<C>(src, ch).to_u8());
    (DeviceColor::new(rgb[0], rgb[1], rgb[2]), opacity)
}

#[cfg(test)]
#[path = "../../tests/unit/pixel/codec.rs"]
mod tests;
