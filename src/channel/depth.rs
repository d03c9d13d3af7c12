use std::fmt;

/// Storage type of a single native channel.
///
/// Implemented for `u8` and `u16`. The 8-bit interchange range is widened by bit
/// replication (`v * 257` for 16-bit) and narrowed by keeping the high byte
/// (`v >> 8`). The two directions are deliberately asymmetric; only
/// `to_u8(from_u8(x)) == x` is guaranteed.
pub trait ChannelDepth:
    Copy + Default + Ord + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Bytes per channel.
    const BYTES: usize;
    /// Largest representable channel value (fully saturated / opaque).
    const MAX: u32;

    /// Widen an 8-bit interchange value to this depth.
    fn from_u8(v: u8) -> Self;
    /// Narrow to the 8-bit interchange range.
    fn to_u8(self) -> u8;

    fn to_u32(self) -> u32;
    /// Values above [`ChannelDepth::MAX`] saturate.
    fn from_u32_saturating(v: u32) -> Self;

    /// Read from exactly [`ChannelDepth::BYTES`] native-endian bytes.
    fn read(bytes: &[u8]) -> Self;
    /// Write to exactly [`ChannelDepth::BYTES`] native-endian bytes.
    fn write(self, bytes: &mut [u8]);
}

impl ChannelDepth for u8 {
    const BYTES: usize = 1;
    const MAX: u32 = u8::MAX as u32;

    #[inline]
    fn from_u8(v: u8) -> Self {
        v
    }

    #[inline]
    fn to_u8(self) -> u8 {
        self
    }

    #[inline]
    fn to_u32(self) -> u32 {
        u32::from(self)
    }

    #[inline]
    fn from_u32_saturating(v: u32) -> Self {
        v.min(<Self as ChannelDepth>::MAX) as u8
    }

    #[inline]
    fn read(bytes: &[u8]) -> Self {
        bytes[0]
    }

    #[inline]
    fn write(self, bytes: &mut [u8]) {
        bytes[0] = self;
    }
}

impl ChannelDepth for u16 {
    const BYTES: usize = 2;
    const MAX: u32 = u16::MAX as u32;

    #[inline]
    fn from_u8(v: u8) -> Self {
        (u16::from(v) << 8) | u16::from(v)
    }

    #[inline]
    fn to_u8(self) -> u8 {
        (self >> 8) as u8
    }

    #[inline]
    fn to_u32(self) -> u32 {
        u32::from(self)
    }

    #[inline]
    fn from_u32_saturating(v: u32) -> Self {
        v.min(<Self as ChannelDepth>::MAX) as u16
    }

    #[inline]
    fn read(bytes: &[u8]) -> Self {
        u16::from_ne_bytes([bytes[0], bytes[1]])
    }

    #[inline]
    fn write(self, bytes: &mut [u8]) {
        bytes[..2].copy_from_slice(&self.to_ne_bytes());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/channel/depth.rs"]
mod tests;
