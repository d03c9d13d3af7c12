use rayon::prelude::*;

use crate::channel::depth::ChannelDepth;
use crate::channel::layout::PixelLayout;
use crate::foundation::error::{PixelError, PixelResult};
use crate::pixel::codec::decode_unchecked;
use crate::space::strategy::ColorSpace;

/// Straight (not premultiplied) RGBA8 raster, row-major, tightly packed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl DisplayImage {
    /// RGBA of the pixel at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    pub fn into_rgba_image(self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data)
    }
}

/// Row-parallel materialization settings.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayThreading {
    pub parallel: bool,
    pub rows_per_task: usize,
    pub threads: Option<usize>,
}

impl Default for DisplayThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            rows_per_task: 64,
            threads: None,
        }
    }
}

impl DisplayThreading {
    pub fn validate(&self) -> PixelResult<()> {
        if self.rows_per_task == 0 {
            return Err(PixelError::validation(
                "display threading 'rows_per_task' must be >= 1",
            ));
        }
        if self.threads == Some(0) {
            return Err(PixelError::validation(
                "display threading 'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }

    /// Pool sized by `threads` (rayon's default when `None`).
    pub fn build_pool(&self) -> PixelResult<rayon::ThreadPool> {
        self.validate()?;
        build_thread_pool(self.threads)
    }
}

/// Decode `width * height` native records from `src` into RGBA8 `out`.
pub(crate) fn write_rgba8<C: ChannelDepth>(
    layout: &PixelLayout,
    src: &[u8],
    width: u32,
    height: u32,
    out: &mut [u8],
) -> PixelResult<()> {
    let count = pixel_count(width, height)?;
    layout.check_pixels(src.len(), count, "display source")?;
    if out.len() < count * 4 {
        return Err(PixelError::buffer(format!(
            "display output holds {} bytes, {count} pixels need {}",
            out.len(),
            count * 4
        )));
    }

    for (px, dst) in src
        .chunks_exact(layout.pixel_size())
        .zip(out.chunks_exact_mut(4))
        .take(count)
    {
        let (c, a) = decode_unchecked::<C>(layout, px);
        dst.copy_from_slice(&[c.r, c.g, c.b, a]);
    }
    Ok(())
}

/// Materialize through `space`, splitting rows across a rayon pool when requested.
///
/// Produces the same bytes as [`ColorSpace::to_display_image`]. Builds a fresh pool
/// per call; use [`materialize_in_pool`] to reuse one.
#[tracing::instrument(level = "trace", skip_all, fields(space = %space.id(), width = width, height = height))]
pub fn materialize_with(
    space: &dyn ColorSpace,
    src: &[u8],
    width: u32,
    height: u32,
    threading: &DisplayThreading,
) -> PixelResult<DisplayImage> {
    threading.validate()?;
    if !threading.parallel || height <= 1 {
        return space.to_display_image(src, width, height, 0, 0);
    }
    let pool = threading.build_pool()?;
    materialize_in_pool(&pool, space, src, width, height, threading.rows_per_task)
}

/// Row-parallel materialization on a caller-owned pool, `rows_per_task` rows per job.
pub fn materialize_in_pool(
    pool: &rayon::ThreadPool,
    space: &dyn ColorSpace,
    src: &[u8],
    width: u32,
    height: u32,
    rows_per_task: usize,
) -> PixelResult<DisplayImage> {
    if rows_per_task == 0 {
        return Err(PixelError::validation(
            "display threading 'rows_per_task' must be >= 1",
        ));
    }
    let count = pixel_count(width, height)?;
    let in_row = width as usize * space.pixel_size();
    let out_row = width as usize * 4;
    if src.len() < count * space.pixel_size() {
        return Err(PixelError::buffer(format!(
            "display source holds {} bytes, {count} pixels need {}",
            src.len(),
            count * space.pixel_size()
        )));
    }
    if count == 0 {
        return Ok(DisplayImage {
            width,
            height,
            data: Vec::new(),
        });
    }

    let mut data = vec![0u8; count * 4];
    pool.install(|| {
        data.par_chunks_mut(out_row * rows_per_task)
            .zip(src[..count * space.pixel_size()].par_chunks(in_row * rows_per_task))
            .try_for_each(|(out, src)| {
                let chunk_rows = (out.len() / out_row) as u32;
                space.write_display_rgba8(src, width, chunk_rows, out)
            })
    })?;

    Ok(DisplayImage {
        width,
        height,
        data,
    })
}

pub(crate) fn pixel_count(width: u32, height: u32) -> PixelResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| PixelError::buffer(format!("display size {width}x{height} overflows")))
}

fn build_thread_pool(threads: Option<usize>) -> PixelResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| PixelError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/display/materialize.rs"]
mod tests;
