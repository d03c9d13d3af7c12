use std::fmt;
use std::str::FromStr;

use crate::foundation::error::PixelError;
use crate::foundation::math::mul_div;

/// Composite operation applied by [`crate::ColorSpace::composite`].
///
/// Color math and alpha math are independent. Every separable operation
/// over-composites alpha (`a = da + (1 - da) * sa`) and then moves each color
/// channel from `d` towards `f(s, d)` by `sa / a`; the per-operation `f` is
/// listed on each variant (`MAX` is the channel maximum).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompositeOp {
    /// `f = s`.
    #[default]
    Over,
    /// Destination becomes the source color with alpha `sa`; no blending.
    Copy,
    /// Color untouched; `a = da * (1 - sa)`.
    Erase,
    /// `f = s * d`.
    Multiply,
    /// `f = min(MAX, (d * (MAX + 1) + s / 2) / (s + 1))`.
    Divide,
    /// `f = MAX - (MAX - s) * (MAX - d)`.
    Screen,
    /// `f = min(s, d)`.
    Darken,
    /// `f = max(s, d)`.
    Lighten,
    /// `f = min(MAX, s + d)`.
    Add,
    /// `f = max(0, d - s)`.
    Subtract,
}

impl CompositeOp {
    pub const ALL: [CompositeOp; 10] = [
        CompositeOp::Over,
        CompositeOp::Copy,
        CompositeOp::Erase,
        CompositeOp::Multiply,
        CompositeOp::Divide,
        CompositeOp::Screen,
        CompositeOp::Darken,
        CompositeOp::Lighten,
        CompositeOp::Add,
        CompositeOp::Subtract,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CompositeOp::Over => "over",
            CompositeOp::Copy => "copy",
            CompositeOp::Erase => "erase",
            CompositeOp::Multiply => "multiply",
            CompositeOp::Divide => "divide",
            CompositeOp::Screen => "screen",
            CompositeOp::Darken => "darken",
            CompositeOp::Lighten => "lighten",
            CompositeOp::Add => "add",
            CompositeOp::Subtract => "subtract",
        }
    }

    /// Whether the op is a per-channel blend `f(s, d)` under over-composited alpha.
    pub fn is_separable(self) -> bool {
        !matches!(self, CompositeOp::Copy | CompositeOp::Erase)
    }

    /// Per-channel color function `f(s, d)` of a separable op.
    ///
    /// Non-separable ops return `d`.
    pub(crate) fn blend_channel(self, s: u32, d: u32, max: u32) -> u32 {
        match self {
            CompositeOp::Over => s,
            CompositeOp::Multiply => mul_div(s, d, max),
            CompositeOp::Divide => {
                let q = (u64::from(d) * (u64::from(max) + 1) + u64::from(s / 2)) / (u64::from(s) + 1);
                q.min(u64::from(max)) as u32
            }
            CompositeOp::Screen => max - mul_div(max - s, max - d, max),
            CompositeOp::Darken => s.min(d),
            CompositeOp::Lighten => s.max(d),
            CompositeOp::Add => (s + d).min(max),
            CompositeOp::Subtract => d.saturating_sub(s),
            CompositeOp::Copy | CompositeOp::Erase => d,
        }
    }
}

impl fmt::Display for CompositeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CompositeOp {
    type Err = PixelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| PixelError::validation(format!("unknown composite op '{s}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composite/op.rs"]
mod tests;
