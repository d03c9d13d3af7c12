use crate::channel::depth::ChannelDepth;
use crate::channel::layout::PixelLayout;
use crate::composite::op::CompositeOp;
use crate::foundation::error::{PixelError, PixelResult};
use crate::foundation::math::{blend, div_norm, mul_div};
use crate::pixel::codec::{read_channel, write_channel};

/// Read-only view of a pixel rectangle inside a larger buffer. `stride` is in bytes.
#[derive(Clone, Copy, Debug)]
pub struct Surface<'a> {
    pub data: &'a [u8],
    pub stride: usize,
}

impl<'a> Surface<'a> {
    pub fn new(data: &'a [u8], stride: usize) -> Self {
        Self { data, stride }
    }
}

/// Mutable view of a pixel rectangle inside a larger buffer. `stride` is in bytes.
#[derive(Debug)]
pub struct SurfaceMut<'a> {
    pub data: &'a mut [u8],
    pub stride: usize,
}

impl<'a> SurfaceMut<'a> {
    pub fn new(data: &'a mut [u8], stride: usize) -> Self {
        Self { data, stride }
    }
}

/// 8-bit coverage mask, one byte per pixel. `stride` is in bytes.
#[derive(Clone, Copy, Debug)]
pub struct Mask<'a> {
    pub data: &'a [u8],
    pub stride: usize,
}

impl<'a> Mask<'a> {
    pub fn new(data: &'a [u8], stride: usize) -> Self {
        Self { data, stride }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompositeParams {
    pub rows: usize,
    pub cols: usize,
    /// Global 8-bit opacity applied on top of source alpha and mask coverage.
    pub opacity: u8,
    pub op: CompositeOp,
}

#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(op = %params.op, rows = params.rows, cols = params.cols, opacity = params.opacity)
)]
pub(crate) fn composite<C: ChannelDepth>(
    layout: &PixelLayout,
    dst: SurfaceMut<'_>,
    src: Surface<'_>,
    mask: Option<Mask<'_>>,
    params: CompositeParams,
) -> PixelResult<()> {
    let CompositeParams {
        rows,
        cols,
        opacity,
        op,
    } = params;
    if rows == 0 || cols == 0 {
        return Ok(());
    }

    let ps = layout.pixel_size();
    let row_bytes = cols
        .checked_mul(ps)
        .ok_or_else(|| PixelError::buffer("composite row width overflows"))?;
    check_rect(dst.data.len(), dst.stride, rows, row_bytes, "composite destination")?;
    check_rect(src.data.len(), src.stride, rows, row_bytes, "composite source")?;
    if let Some(m) = mask {
        check_rect(m.data.len(), m.stride, rows, cols, "composite mask")?;
    }

    let opacity = C::from_u8(opacity).to_u32();
    for row in 0..rows {
        let d_row = &mut dst.data[row * dst.stride..][..row_bytes];
        let s_row = &src.data[row * src.stride..][..row_bytes];
        let m_row = mask.map(|m| &m.data[row * m.stride..][..cols]);

        for (col, (d, s)) in d_row
            .chunks_exact_mut(ps)
            .zip(s_row.chunks_exact(ps))
            .enumerate()
        {
            let coverage = m_row.map_or(C::MAX, |m| C::from_u8(m[col]).to_u32());
            let cover = if coverage == C::MAX {
                opacity
            } else {
                mul_div(coverage, opacity, C::MAX)
            };
            composite_pixel::<C>(layout, op, d, s, cover);
        }
    }
    Ok(())
}

/// Blend one source record onto one destination record.
///
/// `cover` is the combined mask and opacity factor at channel depth.
fn composite_pixel<C: ChannelDepth>(
    layout: &PixelLayout,
    op: CompositeOp,
    d: &mut [u8],
    s: &[u8],
    cover: u32,
) {
    let max = C::MAX;
    if cover == 0 {
        return;
    }
    let alpha = layout.alpha_channel();
    let src_a = alpha.map_or(max, |ch| read_channel::<C>(s, ch).to_u32());
    let sa = if cover == max {
        src_a
    } else {
        mul_div(src_a, cover, max)
    };

    match op {
        CompositeOp::Copy => {
            for ch in layout.color_channels() {
                write_channel(d, ch, read_channel::<C>(s, ch));
            }
            if let Some(ch) = alpha {
                write_channel(d, ch, C::from_u32_saturating(sa));
            }
        }
        CompositeOp::Erase => {
            if sa == 0 {
                return;
            }
            if let Some(ch) = alpha {
                let da = read_channel::<C>(d, ch).to_u32();
                write_channel(d, ch, C::from_u32_saturating(mul_div(da, max - sa, max)));
            }
        }
        _ => {
            if sa == 0 {
                return;
            }
            let k = match alpha {
                Some(ch) => {
                    let da = read_channel::<C>(d, ch).to_u32();
                    if da < max {
                        let new_a = da + mul_div(max - da, sa, max);
                        write_channel(d, ch, C::from_u32_saturating(new_a));
                        div_norm(sa, new_a, max)
                    } else {
                        sa
                    }
                }
                None => sa,
            };
            for ch in layout.color_channels() {
                let sc = read_channel::<C>(s, ch).to_u32();
                let dc = read_channel::<C>(d, ch).to_u32();
                let target = op.blend_channel(sc, dc, max);
                write_channel(d, ch, C::from_u32_saturating(blend(target, dc, k, max)));
            }
        }
    }
}

fn check_rect(len: usize, stride: usize, rows: usize, row_bytes: usize, what: &str) -> PixelResult<()> {
    if stride < row_bytes {
        return Err(PixelError::buffer(format!(
            "{what}: stride {stride} is smaller than a row of {row_bytes} bytes"
        )));
    }
    let needed = (rows - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(row_bytes))
        .ok_or_else(|| PixelError::buffer(format!("{what}: rectangle size overflows")))?;
    if len < needed {
        return Err(PixelError::buffer(format!(
            "{what}: buffer holds {len} bytes, {rows} rows need {needed}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/composite/blend.rs"]
mod tests;
