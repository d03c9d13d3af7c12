use crate::channel::depth::ChannelDepth;
use crate::channel::layout::PixelLayout;
use crate::foundation::error::{PixelError, PixelResult};
use crate::pixel::codec::write_channel;

/// Overwrite the alpha channel of the first `count` records in `pixels`.
///
/// Color channels are left bit-for-bit untouched.
pub(crate) fn set_alpha<C: ChannelDepth>(
    layout: &PixelLayout,
    pixels: &mut [u8],
    opacity: u8,
    count: usize,
) -> PixelResult<()> {
    let alpha = layout
        .alpha_channel()
        .ok_or_else(|| PixelError::validation("set_alpha on a layout without alpha"))?;
    layout.check_pixels(pixels.len(), count, "set_alpha")?;

    let value = C::from_u8(opacity);
    for px in pixels.chunks_exact_mut(layout.pixel_size()).take(count) {
        write_channel(px, alpha, value);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/pixel/alpha.rs"]
mod tests;
