//! Interpolation and ramp functions.
//!
//! CPU equivalents of the GLSL built-ins the color code was written
//! against: [`mix`], [`smoothstep`], [`step`], [`fract`], [`saturate`].
//!
//! # Usage
//!
//! ```rust
//! use shade_math::{lerp, smoothstep};
//!
//! let mid = lerp(0.0, 10.0, 0.5);
//! assert_eq!(mid, 5.0);
//!
//! let smooth = smoothstep(0.0, 1.0, 0.25);
//! assert!(smooth < 0.25);
//! ```

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
/// For values outside [0, 1], the result is extrapolated.
///
/// # Formula
///
/// `a * (1 - t) + b * t`
///
/// The two-product form is the GLSL `mix` definition. Unlike
/// `a + (b - a) * t`, it returns the endpoints exactly at `t = 0` and
/// `t = 1` even when they are not exactly representable, which the
/// gradient stop colors rely on.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Mix: alias for [`lerp`], under its shader-language name.
#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    lerp(a, b, t)
}

/// Inverse linear interpolation.
///
/// Given a value between `a` and `b`, returns the corresponding `t` value.
/// Returns 0 when the interval is degenerate.
#[inline]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if (b - a).abs() < 1e-10 {
        0.0
    } else {
        (value - a) / (b - a)
    }
}

/// Clamps a value to [0, 1].
///
/// # Example
///
/// ```rust
/// use shade_math::saturate;
///
/// assert_eq!(saturate(-0.5), 0.0);
/// assert_eq!(saturate(0.5), 0.5);
/// assert_eq!(saturate(1.5), 1.0);
/// ```
#[inline]
pub fn saturate(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

/// Hermite smoothstep interpolation.
///
/// Returns 0 for `x <= edge0`, 1 for `x >= edge1`, and smoothly
/// interpolates between using a cubic polynomial.
///
/// # Formula
///
/// `t * t * (3 - 2 * t)` where `t = saturate((x - edge0) / (edge1 - edge0))`
///
/// Swapped edges (`edge0 > edge1`) yield a descending ramp rather than the
/// undefined behavior GLSL reserves for that case.
///
/// # Example
///
/// ```rust
/// use shade_math::smoothstep;
///
/// assert_eq!(smoothstep(0.0, 1.0, 0.0), 0.0);
/// assert_eq!(smoothstep(0.0, 1.0, 0.5), 0.5);
/// assert_eq!(smoothstep(0.0, 1.0, 1.0), 1.0);
/// ```
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = saturate(inverse_lerp(edge0, edge1, x));
    t * t * (3.0 - 2.0 * t)
}

/// Step function.
///
/// Returns 0 for `x < edge`, 1 for `x >= edge`.
#[inline]
pub fn step(edge: f32, x: f32) -> f32 {
    if x < edge { 0.0 } else { 1.0 }
}

/// Fract: returns the fractional part of a value.
///
/// Follows the GLSL convention `x - floor(x)`, so the result is always in
/// [0, 1) even for negative input.
///
/// # Example
///
/// ```rust
/// use shade_math::fract;
///
/// assert!((fract(1.75) - 0.75).abs() < 1e-6);
/// assert!((fract(-0.25) - 0.75).abs() < 1e-6);
/// ```
#[inline]
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}
