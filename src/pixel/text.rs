use crate::channel::depth::ChannelDepth;
use crate::channel::layout::PixelLayout;
use crate::foundation::error::PixelResult;
use crate::foundation::numfmt::format_general;
use crate::pixel::codec::read_channel;

/// Significant digits used for normalized channel values.
const NORMALISED_PRECISION: usize = 6;

/// Raw native value of the channel declared at `index`, as a decimal integer.
pub(crate) fn channel_value_text<C: ChannelDepth>(
    layout: &PixelLayout,
    pixel: &[u8],
    index: usize,
) -> PixelResult<String> {
    let ch = layout.channel(index)?;
    layout.check_pixels(pixel.len(), 1, "channel_value_text")?;
    Ok(read_channel::<C>(pixel, ch).to_string())
}

/// Channel value divided by the depth's maximum, printed with six significant digits.
pub(crate) fn normalised_channel_value_text<C: ChannelDepth>(
    layout: &PixelLayout,
    pixel: &[u8],
    index: usize,
) -> PixelResult<String> {
    let ch = layout.channel(index)?;
    layout.check_pixels(pixel.len(), 1, "normalised_channel_value_text")?;
    let ratio = read_channel::<C>(pixel, ch).to_u32() as f32 / C::MAX as f32;
    Ok(format_general(f64::from(ratio), NORMALISED_PRECISION))
}

#[cfg(test)]
#[path = "../../tests/unit/pixel/text.rs"]
mod tests;
