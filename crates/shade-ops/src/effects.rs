//! Photographic color effects.
//!
//! Two per-pixel adjustments from the original shading stage:
//!
//! - [`hue_saturation`] - multiplicative HSV scaling
//! - [`color_balance`] - midtone-weighted color shift
//!
//! Both are pure and total. Out-of-range factors are accepted and produce
//! out-of-gamut output; clamping is the caller's job.

use shade_color::{convert_range3, hsv_to_rgb, rgb_to_hsv, rgb_to_value};
use shade_math::{Range, Vec3, Vec4, saturate};

/// Domain of the caller-facing color-balance shift, per channel.
pub const SHIFT_RANGE: Range = Range::new(-100.0, 100.0);

/// Half-width of each midtone ramp in brightness units.
const MIDTONE_RAMP: f32 = 0.25;

/// Brightness offset where the shadow and highlight ramps engage.
const MIDTONE_OFFSET: f32 = 0.333;

/// Overall strength of the midtone weight.
const MIDTONE_STRENGTH: f32 = 0.7;

/// Scales the HSV components of a color.
///
/// Converts to HSV, multiplies (hue, saturation, value) by the given
/// factors, and converts back. A factor of 1.0 leaves that component
/// alone; 0.0 collapses it (zero hue lands on the red baseline, zero
/// saturation grays the color out, zero value blacks it out). These are
/// scales, not additive shifts.
///
/// # Example
///
/// ```rust
/// use shade_math::Vec3;
/// use shade_ops::effects::hue_saturation;
///
/// let c = Vec3::new(0.8, 0.4, 0.2);
/// let same = hue_saturation(c, 1.0, 1.0, 1.0);
/// assert!((same.x - c.x).abs() < 1e-5);
/// ```
#[inline]
pub fn hue_saturation(color: Vec3, hue: f32, saturation: f32, value: f32) -> Vec3 {
    hsv_to_rgb(rgb_to_hsv(color) * Vec3::new(hue, saturation, value))
}

/// [`hue_saturation`] on an RGBA pixel; alpha passes through untouched.
#[inline]
pub fn hue_saturation_rgba(pixel: Vec4, hue: f32, saturation: f32, value: f32) -> Vec4 {
    Vec4::from_rgb(hue_saturation(pixel.rgb(), hue, saturation, value), pixel.w)
}

/// Weight of the color-balance effect at a given brightness.
///
/// Two clamped ramps multiplied together: one rising out of the shadows,
/// one falling into the highlights, scaled by the overall strength. The
/// product peaks for mid-brightness pixels and tapers to zero at both
/// ends, which is what confines the balance shift to the midtones.
#[inline]
pub fn midtone_weight(value: f32) -> f32 {
    saturate((value - MIDTONE_OFFSET) / MIDTONE_RAMP + 0.5)
        * saturate((value + MIDTONE_OFFSET - 1.0) / -MIDTONE_RAMP + 0.5)
        * MIDTONE_STRENGTH
}

/// Midtone-weighted color balance.
///
/// `shift` is a per-channel adjustment in [`SHIFT_RANGE`] ([-100, 100]).
/// The shift is remapped to 8-bit range, normalized, scaled by
/// [`midtone_weight`], added to the color, and the result's hue and
/// saturation are recombined with the original brightness. The effect
/// tints the midtones while leaving the pixel's value channel where it
/// was.
///
/// A perfectly neutral shift (all three channels exactly equal after the
/// remap, checked with float equality by design) is promoted to full
/// white rather than applied as-is.
///
/// The output is not clamped; whether it needs to be depends on the
/// caller's gamut convention.
///
/// # Example
///
/// ```rust
/// use shade_math::Vec3;
/// use shade_ops::effects::color_balance;
///
/// // Push the midtones toward red.
/// let warmed = color_balance(Vec3::new(0.4, 0.4, 0.4), Vec3::new(60.0, 0.0, 0.0));
/// assert!(warmed.x > warmed.z);
/// ```
pub fn color_balance(color: Vec3, shift: Vec3) -> Vec3 {
    let shift = convert_range3(SHIFT_RANGE, Range::RGB8, shift);
    let shift = if shift.x == shift.y && shift.y == shift.z {
        Vec3::splat(Range::RGB8.max)
    } else {
        shift
    };

    let value = rgb_to_value(color);
    let balance = (shift / Range::RGB8.max).clamp01();

    // Tint the color, then splice the original brightness back under the
    // tinted hue and saturation. The double HSV round-trip is part of the
    // effect's look and is kept literally.
    let hsv = rgb_to_hsv(balance * midtone_weight(value) + color);
    hsv_to_rgb(Vec3::new(hsv.x, hsv.y, value))
}

/// [`color_balance`] on an RGBA pixel; alpha passes through untouched.
#[inline]
pub fn color_balance_rgba(pixel: Vec4, shift: Vec3) -> Vec4 {
    Vec4::from_rgb(color_balance(pixel.rgb(), shift), pixel.w)
}
