//! Fixed-point helpers shared by every channel depth.
//!
//! All values are unsigned channel values in `[0, max]` widened to `u32`; the
//! intermediate products are carried in `u64` so 16-bit channels never overflow.

/// `round(a * b / max)`: multiply two normalized fixed-point values.
pub(crate) fn mul_div(a: u32, b: u32, max: u32) -> u32 {
    div_round(u64::from(a) * u64::from(b), u64::from(max)) as u32
}

/// `min(max, round(a * max / b))`: divide two normalized fixed-point values.
///
/// `b == 0` saturates.
pub(crate) fn div_norm(a: u32, b: u32, max: u32) -> u32 {
    if b == 0 {
        return max;
    }
    (div_round(u64::from(a) * u64::from(max), u64::from(b)) as u32).min(max)
}

/// Linear interpolation from `dst` towards `src` by `k / max`, rounded half away from zero.
pub(crate) fn blend(src: u32, dst: u32, k: u32, max: u32) -> u32 {
    let (src, dst) = (i64::from(src), i64::from(dst));
    let k = i64::from(k);
    let max = i64::from(max);
    let delta = (src - dst) * k;
    let step = if delta >= 0 {
        (delta + max / 2) / max
    } else {
        -((-delta + max / 2) / max)
    };
    (dst + step) as u32
}

/// Integer division rounding half up. `den` must be non-zero.
pub(crate) fn div_round(num: u64, den: u64) -> u64 {
    (num + den / 2) / den
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
