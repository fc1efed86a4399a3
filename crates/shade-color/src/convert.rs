//! Range remapping and RGB <-> HSV conversion.
//!
//! These are the leaf utilities of the library; everything else composes
//! them. The HSV pair is the scalar rendition of the classic branchless
//! GPU formulation: the step/mix blends become explicit branches on the
//! dominant channel, with the same tie-breaking (green wins over blue,
//! red wins over both) and the same epsilon-guarded denominators, so the
//! numeric results match the shader bit-for-bit on the non-degenerate
//! paths.

use shade_math::{Range, Vec3, fract, lerp, saturate};

/// Guard against division by zero when chroma or value is zero.
/// Small enough to leave saturated colors untouched at f32 precision.
const EPSILON: f32 = 1.0e-10;

/// Linearly remaps `value` from the `origin` interval to the `target`
/// interval.
///
/// # Formula
///
/// `(value - origin.min) * (target.width() / origin.width()) + target.min`
///
/// No clamping: input outside `origin` maps outside `target`. No
/// zero-width guard: a degenerate `origin` divides by zero and the
/// infinity or NaN propagates to the caller rather than trapping.
///
/// # Example
///
/// ```rust
/// use shade_math::Range;
/// use shade_color::convert_range;
///
/// let v = convert_range(Range::UNIT, Range::RGB8, 0.5);
/// assert_eq!(v, 127.5);
/// ```
#[inline]
pub fn convert_range(origin: Range, target: Range, value: f32) -> f32 {
    let ratio = target.width() / origin.width();
    (value - origin.min) * ratio + target.min
}

/// Remaps each component of a vector from `origin` to `target`.
///
/// Component-wise [`convert_range`]; the same degeneracies apply.
#[inline]
pub fn convert_range3(origin: Range, target: Range, value: Vec3) -> Vec3 {
    Vec3::new(
        convert_range(origin, target, value.x),
        convert_range(origin, target, value.y),
        convert_range(origin, target, value.z),
    )
}

/// Converts an RGB color to HSV.
///
/// Value is the largest channel, saturation is chroma over value, hue is
/// the piecewise sector formula. All components land in [0, 1] for
/// in-gamut input.
///
/// Grayscale input has zero chroma, where hue is mathematically undefined;
/// the epsilon in the denominator pins it to 0 instead of NaN.
///
/// # Example
///
/// ```rust
/// use shade_math::Vec3;
/// use shade_color::rgb_to_hsv;
///
/// let hsv = rgb_to_hsv(Vec3::new(0.0, 1.0, 0.0));
/// assert!((hsv.x - 1.0 / 3.0).abs() < 1e-6); // green hue
/// assert!(hsv.y > 0.999); // fully saturated
/// assert_eq!(hsv.z, 1.0);
/// ```
#[inline]
pub fn rgb_to_hsv(rgb: Vec3) -> Vec3 {
    let (r, g, b) = (rgb.x, rgb.y, rgb.z);

    // Dominant channel selects the hue sector: (value, min of the other
    // two, sector offset, signed chroma numerator). Ties resolve exactly
    // as the GPU step() blends do.
    let (v, lo, offset, num) = if g >= b {
        if r >= g {
            (r, b, 0.0, g - b)
        } else {
            (g, r.min(b), -1.0 / 3.0, r - b)
        }
    } else if r >= b {
        (r, g, -1.0, b - g)
    } else {
        (b, r.min(g), 2.0 / 3.0, r - g)
    };

    let chroma = v - lo;
    let h = (offset + num / (6.0 * chroma + EPSILON)).abs();
    let s = chroma / (v + EPSILON);

    Vec3::new(h, s, v)
}

/// Converts an HSV color to RGB.
///
/// The closed-form six-fold blend: each channel folds the hue into a
/// triangle wave offset by thirds, clamps it, and scales by saturation
/// and value. Hue wraps, so inputs outside [0, 1] are folded rather than
/// rejected.
///
/// # Example
///
/// ```rust
/// use shade_math::Vec3;
/// use shade_color::hsv_to_rgb;
///
/// let rgb = hsv_to_rgb(Vec3::new(0.0, 1.0, 1.0));
/// assert_eq!(rgb, Vec3::new(1.0, 0.0, 0.0)); // pure red
/// ```
#[inline]
pub fn hsv_to_rgb(hsv: Vec3) -> Vec3 {
    let (h, s, v) = (hsv.x, hsv.y, hsv.z);

    let channel = |k: f32| -> f32 {
        let p = (fract(h + k) * 6.0 - 3.0).abs();
        v * lerp(1.0, saturate(p - 1.0), s)
    };

    Vec3::new(channel(1.0), channel(2.0 / 3.0), channel(1.0 / 3.0))
}

/// Returns the HSV value (brightness) of an RGB color.
///
/// Equivalent to `rgb_to_hsv(rgb).z` without computing hue or saturation.
///
/// # Example
///
/// ```rust
/// use shade_math::Vec3;
/// use shade_color::rgb_to_value;
///
/// assert_eq!(rgb_to_value(Vec3::new(0.2, 0.8, 0.4)), 0.8);
/// ```
#[inline]
pub fn rgb_to_value(rgb: Vec3) -> f32 {
    rgb.max_element()
}

/// Converts an RGB pixel to HSV in place.
#[inline]
pub fn apply_rgb_to_hsv(rgb: &mut [f32; 3]) {
    let hsv = rgb_to_hsv(Vec3::from_array(*rgb));
    *rgb = hsv.to_array();
}

/// Converts an HSV pixel to RGB in place.
#[inline]
pub fn apply_hsv_to_rgb(hsv: &mut [f32; 3]) {
    let rgb = hsv_to_rgb(Vec3::from_array(*hsv));
    *hsv = rgb.to_array();
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_convert_range_identity() {
        let r = Range::new(-3.0, 7.0);
        assert_eq!(convert_range(r, r, 2.5), 2.5);
        assert_eq!(convert_range(r, r, -100.0), -100.0);
    }

    #[test]
    fn test_convert_range_linearity() {
        assert_eq!(convert_range(Range::UNIT, Range::RGB8, 0.5), 127.5);
        assert_eq!(convert_range(Range::new(-100.0, 100.0), Range::RGB8, 0.0), 127.5);
        assert_eq!(convert_range(Range::new(-100.0, 100.0), Range::RGB8, 100.0), 255.0);
    }

    #[test]
    fn test_convert_range_no_clamp() {
        // Out-of-origin input extrapolates past the target.
        assert_eq!(convert_range(Range::UNIT, Range::RGB8, 2.0), 510.0);
        assert_eq!(convert_range(Range::UNIT, Range::RGB8, -1.0), -255.0);
    }

    #[test]
    fn test_convert_range_degenerate_origin() {
        // Zero-width origin divides by zero; the result propagates.
        let v = convert_range(Range::new(1.0, 1.0), Range::UNIT, 2.0);
        assert!(!v.is_finite());
    }

    #[test]
    fn test_convert_range3() {
        let v = convert_range3(Range::UNIT, Range::RGB8, Vec3::new(0.0, 0.5, 1.0));
        assert_eq!(v, Vec3::new(0.0, 127.5, 255.0));
    }

    #[test]
    fn test_rgb_to_hsv_primaries() {
        let red = rgb_to_hsv(Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(red.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(red.y, 1.0, epsilon = 1e-6);
        assert_eq!(red.z, 1.0);

        let green = rgb_to_hsv(Vec3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(green.x, 1.0 / 3.0, epsilon = 1e-6);

        let blue = rgb_to_hsv(Vec3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(blue.x, 2.0 / 3.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rgb_to_hsv_secondaries() {
        let yellow = rgb_to_hsv(Vec3::new(1.0, 1.0, 0.0));
        assert_relative_eq!(yellow.x, 1.0 / 6.0, epsilon = 1e-6);

        let cyan = rgb_to_hsv(Vec3::new(0.0, 1.0, 1.0));
        assert_relative_eq!(cyan.x, 0.5, epsilon = 1e-6);

        let magenta = rgb_to_hsv(Vec3::new(1.0, 0.0, 1.0));
        assert_relative_eq!(magenta.x, 5.0 / 6.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rgb_to_hsv_gray_is_degenerate_not_nan() {
        let hsv = rgb_to_hsv(Vec3::splat(0.5));
        assert_eq!(hsv.x, 0.0);
        assert_eq!(hsv.y, 0.0);
        assert_eq!(hsv.z, 0.5);
        assert!(!hsv.is_nan());

        let black = rgb_to_hsv(Vec3::ZERO);
        assert!(!black.is_nan());
        assert_eq!(black.z, 0.0);
    }

    #[test]
    fn test_hsv_to_rgb_known_values() {
        assert_eq!(hsv_to_rgb(Vec3::new(0.0, 1.0, 1.0)), Vec3::new(1.0, 0.0, 0.0));

        let yellow = hsv_to_rgb(Vec3::new(1.0 / 6.0, 1.0, 1.0));
        assert_relative_eq!(yellow.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(yellow.y, 1.0, epsilon = 1e-6);
        assert_relative_eq!(yellow.z, 0.0, epsilon = 1e-6);

        // Zero saturation ignores hue entirely.
        let gray = hsv_to_rgb(Vec3::new(0.37, 0.0, 0.5));
        assert_eq!(gray, Vec3::splat(0.5));
    }

    #[test]
    fn test_hsv_to_rgb_hue_wraps() {
        let a = hsv_to_rgb(Vec3::new(0.25, 0.8, 0.9));
        let b = hsv_to_rgb(Vec3::new(1.25, 0.8, 0.9));
        assert_relative_eq!(a.x, b.x, epsilon = 1e-5);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-5);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-5);
    }

    #[test]
    fn test_hsv_round_trip() {
        // Grid over saturated colors; hue is arbitrary at s == 0 so the
        // grid stays away from gray.
        for ri in 0..6 {
            for gi in 0..6 {
                for bi in 0..6 {
                    let c = Vec3::new(ri as f32 / 5.0, gi as f32 / 5.0, bi as f32 / 5.0);
                    if rgb_to_hsv(c).y < 1e-6 {
                        continue;
                    }
                    let back = hsv_to_rgb(rgb_to_hsv(c));
                    assert_relative_eq!(back.x, c.x, epsilon = 1e-5);
                    assert_relative_eq!(back.y, c.y, epsilon = 1e-5);
                    assert_relative_eq!(back.z, c.z, epsilon = 1e-5);
                }
            }
        }
    }

    #[test]
    fn test_rgb_to_value() {
        assert_eq!(rgb_to_value(Vec3::new(0.2, 0.8, 0.4)), 0.8);
        assert_eq!(rgb_to_value(Vec3::ZERO), 0.0);
        // Matches the full conversion.
        let c = Vec3::new(0.3, 0.1, 0.9);
        assert_eq!(rgb_to_value(c), rgb_to_hsv(c).z);
    }

    #[test]
    fn test_apply_in_place() {
        let mut px = [1.0, 0.5, 0.25];
        let orig = px;
        apply_rgb_to_hsv(&mut px);
        apply_hsv_to_rgb(&mut px);
        for (a, b) in px.iter().zip(orig.iter()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-5);
        }
    }
}
