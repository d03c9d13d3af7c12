//! Weighted, alpha-aware averaging of pixel records.
//!
//! Colors are weighted by `weight * alpha`, so a transparent input never tints
//! the result; alpha itself is the plain weighted mean. With `weights` summing to
//! 255 this reproduces the 8-bit brush smoothing behaviour exactly.

use crate::channel::depth::ChannelDepth;
use crate::channel::layout::PixelLayout;
use crate::foundation::error::{PixelError, PixelResult};
use crate::foundation::math::div_round;
use crate::pixel::codec::{read_channel, write_channel};

pub(crate) fn mix_colors<C: ChannelDepth>(
    layout: &PixelLayout,
    pixels: &[&[u8]],
    weights: &[u8],
    dst: &mut [u8],
) -> PixelResult<()> {
    if pixels.is_empty() {
        return Err(PixelError::validation("mix_colors needs at least one pixel"));
    }
    if pixels.len() != weights.len() {
        return Err(PixelError::validation(format!(
            "mix_colors got {} pixels but {} weights",
            pixels.len(),
            weights.len()
        )));
    }
    layout.check_pixels(dst.len(), 1, "mix_colors output")?;
    for px in pixels {
        layout.check_pixels(px.len(), 1, "mix_colors input")?;
    }

    let size = layout.pixel_size();
    if let [only] = pixels {
        dst[..size].copy_from_slice(&only[..size]);
        return Ok(());
    }

    let weight_sum: u64 = weights.iter().map(|&w| u64::from(w)).sum();
    if weight_sum == 0 {
        dst[..size].fill(0);
        return Ok(());
    }

    let Some(alpha) = layout.alpha_channel() else {
        // No alpha: every input contributes by weight alone.
        for ch in layout.color_channels() {
            let total: u64 = pixels
                .iter()
                .zip(weights)
                .map(|(px, &w)| u64::from(read_channel::<C>(px, ch).to_u32()) * u64::from(w))
                .sum();
            let v = div_round(total, weight_sum).min(u64::from(C::MAX)) as u32;
            write_channel(dst, ch, C::from_u32_saturating(v));
        }
        return Ok(());
    };

    // Effective contribution of each input: `alpha * weight`.
    let coverage =
        |px: &[u8], w: u8| u64::from(read_channel::<C>(px, alpha).to_u32()) * u64::from(w);
    let total_alpha: u64 = pixels
        .iter()
        .zip(weights)
        .map(|(px, &w)| coverage(*px, w))
        .sum();

    for ch in layout.color_channels() {
        let v = if total_alpha == 0 {
            0
        } else {
            let total: u64 = pixels
                .iter()
                .zip(weights)
                .map(|(px, &w)| {
                    u64::from(read_channel::<C>(px, ch).to_u32()) * coverage(*px, w)
                })
                .sum();
            div_round(total, total_alpha).min(u64::from(C::MAX)) as u32
        };
        write_channel(dst, ch, C::from_u32_saturating(v));
    }

    let a = div_round(total_alpha, weight_sum).min(u64::from(C::MAX)) as u32;
    write_channel(dst, alpha, C::from_u32_saturating(a));
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/mix/mixer.rs"]
mod tests;
