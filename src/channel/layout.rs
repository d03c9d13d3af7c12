use crate::channel::depth::ChannelDepth;
use crate::channel::descriptor::{ChannelDescriptor, ChannelKind};
use crate::foundation::error::{PixelError, PixelResult};

/// Declared channel table of a native pixel format.
///
/// The table is the single source of truth for channel offsets: codecs, the
/// mixer and the compositor address channels only through it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelLayout {
    channels: Vec<ChannelDescriptor>,
    color: Vec<usize>,
    alpha: Option<usize>,
    pixel_size: usize,
}

impl PixelLayout {
    /// Build a layout from channels in declared order.
    ///
    /// Channels must not overlap and must tile `[0, pixel_size)` without gaps;
    /// at most one channel may be [`ChannelKind::Alpha`].
    pub fn new(channels: Vec<ChannelDescriptor>) -> PixelResult<Self> {
        if channels.is_empty() {
            return Err(PixelError::validation("pixel layout needs at least one channel"));
        }

        let mut spans: Vec<_> = channels.iter().map(ChannelDescriptor::byte_range).collect();
        spans.sort_by_key(|r| r.start);
        let mut cursor = 0usize;
        for span in &spans {
            if span.start != cursor || span.is_empty() {
                return Err(PixelError::validation(format!(
                    "channel bytes {span:?} do not continue the record at offset {cursor}"
                )));
            }
            cursor = span.end;
        }

        let mut alpha = None;
        let mut color = Vec::with_capacity(channels.len());
        for (idx, ch) in channels.iter().enumerate() {
            match ch.kind {
                ChannelKind::Color => color.push(idx),
                ChannelKind::Alpha if alpha.is_some() => {
                    return Err(PixelError::validation("pixel layout declares two alpha channels"));
                }
                ChannelKind::Alpha => alpha = Some(idx),
            }
        }

        Ok(Self {
            channels,
            color,
            alpha,
            pixel_size: cursor,
        })
    }

    /// Red, green, blue, alpha declared; blue, green, red, alpha in memory.
    pub fn bgra<C: ChannelDepth>() -> Self {
        let s = C::BYTES;
        Self {
            channels: vec![
                ChannelDescriptor::new("red", 2 * s, s, ChannelKind::Color),
                ChannelDescriptor::new("green", s, s, ChannelKind::Color),
                ChannelDescriptor::new("blue", 0, s, ChannelKind::Color),
                ChannelDescriptor::new("alpha", 3 * s, s, ChannelKind::Alpha),
            ],
            color: vec![0, 1, 2],
            alpha: Some(3),
            pixel_size: 4 * s,
        }
    }

    pub fn channels(&self) -> &[ChannelDescriptor] {
        &self.channels
    }

    pub fn n_channels(&self) -> usize {
        self.channels.len()
    }

    pub fn n_color_channels(&self) -> usize {
        self.color.len()
    }

    pub fn pixel_size(&self) -> usize {
        self.pixel_size
    }

    pub fn has_alpha(&self) -> bool {
        self.alpha.is_some()
    }

    pub fn channel(&self, index: usize) -> PixelResult<&ChannelDescriptor> {
        self.channels.get(index).ok_or_else(|| {
            PixelError::channel(format!(
                "channel index {index} out of range (layout has {} channels)",
                self.channels.len()
            ))
        })
    }

    /// Color channels in declared order.
    pub fn color_channels(&self) -> impl Iterator<Item = &ChannelDescriptor> + '_ {
        self.color.iter().map(|&i| &self.channels[i])
    }

    pub fn alpha_channel(&self) -> Option<&ChannelDescriptor> {
        self.alpha.map(|i| &self.channels[i])
    }

    /// Fail unless `buf` holds at least `count` whole pixel records.
    pub(crate) fn check_pixels(&self, buf_len: usize, count: usize, what: &str) -> PixelResult<()> {
        let needed = count.checked_mul(self.pixel_size).ok_or_else(|| {
            PixelError::buffer(format!("{what}: pixel count {count} overflows the address space"))
        })?;
        if buf_len < needed {
            return Err(PixelError::buffer(format!(
                "{what}: buffer holds {buf_len} bytes, {count} pixels need {needed}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/channel/layout.rs"]
mod tests;
