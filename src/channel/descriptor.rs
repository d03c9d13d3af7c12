use std::ops::Range;

/// Semantic role of a channel inside a pixel record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Color,
    Alpha,
}

/// Static description of one channel: where it lives in the pixel record and what it means.
///
/// `position` is a byte offset and is independent of the channel's place in the
/// declared channel table (red is declared first but stored third in BGRA).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct ChannelDescriptor {
    pub name: &'static str,
    pub position: usize,
    pub size: usize,
    pub kind: ChannelKind,
}

impl ChannelDescriptor {
    pub const fn new(name: &'static str, position: usize, size: usize, kind: ChannelKind) -> Self {
        Self {
            name,
            position,
            size,
            kind,
        }
    }

    /// Byte range of this channel within a pixel record.
    pub fn byte_range(&self) -> Range<usize> {
        self.position..self.position + self.size
    }

    pub fn is_alpha(&self) -> bool {
        self.kind == ChannelKind::Alpha
    }
}
