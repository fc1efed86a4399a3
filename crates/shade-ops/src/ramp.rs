//! Visualization color ramps.
//!
//! Maps scalar field data to display colors: [`basic_color`] turns a
//! magnitude into a hue, [`gradient_color`] builds a three-stop vertical
//! gradient keyed on world height. Both were originally evaluated per
//! vertex by the heatmap surface shaders.

use shade_color::{convert_range, hsv_to_rgb};
use shade_math::{Range, Vec3, saturate, smoothstep};

/// Fraction of the bound at which the middle gradient stop sits.
const COLOR_STOP: f32 = 0.3;

/// Maps a scalar magnitude to a hue-coded RGB color.
///
/// The magnitude is remapped from `bound` into `color_range`, clamped to
/// [0, 1], and used as the hue of an HSV color with the given saturation
/// and lightness. Magnitudes outside `bound` saturate at the ends of the
/// hue ramp rather than wrapping, so any finite input yields a valid
/// color.
///
/// # Example
///
/// ```rust
/// use shade_math::Range;
/// use shade_ops::ramp::basic_color;
///
/// // Map a field value onto the blue-to-red two-thirds of the hue wheel.
/// let c = basic_color(Range::new(0.0, 50.0), Range::new(0.0, 0.66), 25.0, 1.0, 1.0);
/// assert!(c.is_finite());
/// ```
#[inline]
pub fn basic_color(
    bound: Range,
    color_range: Range,
    magnitude: f32,
    saturation: f32,
    lightness: f32,
) -> Vec3 {
    let hue = saturate(convert_range(bound, color_range, magnitude));
    hsv_to_rgb(Vec3::new(hue, saturation, lightness))
}

/// Three-stop vertical gradient.
///
/// Blends `low` into `medium` as `position.y` rises from `bound.min` to
/// the color stop at 30% of the bound's width, then into `high` from the
/// stop up to `bound.max`. The stop fraction is fixed.
///
/// A reversed bound (`min > max`) swaps the smoothstep edges; the ramps
/// then run downhill per the [`smoothstep`] swapped-edge convention
/// instead of being undefined as in GLSL.
///
/// # Example
///
/// ```rust
/// use shade_math::{Range, Vec3};
/// use shade_ops::ramp::gradient_color;
///
/// let low = Vec3::new(0.0, 0.0, 1.0);
/// let medium = Vec3::new(0.0, 1.0, 0.0);
/// let high = Vec3::new(1.0, 0.0, 0.0);
///
/// let bottom = gradient_color(Range::new(0.0, 10.0), Vec3::ZERO, low, medium, high);
/// assert_eq!(bottom, low);
/// ```
#[inline]
pub fn gradient_color(bound: Range, position: Vec3, low: Vec3, medium: Vec3, high: Vec3) -> Vec3 {
    let color_stop = bound.width().abs() * COLOR_STOP;
    let y = position.y;
    low.lerp(medium, smoothstep(bound.min, color_stop, y))
        .lerp(high, smoothstep(color_stop, bound.max, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shade_color::rgb_to_hsv;

    const LOW: Vec3 = Vec3::new(0.0, 0.0, 1.0);
    const MEDIUM: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    const HIGH: Vec3 = Vec3::new(1.0, 0.0, 0.0);

    fn at_y(y: f32) -> Vec3 {
        gradient_color(Range::new(0.0, 10.0), Vec3::new(5.0, y, -2.0), LOW, MEDIUM, HIGH)
    }

    #[test]
    fn test_gradient_stops() {
        // Bottom of the bound is exactly the low color, the 30% stop is
        // exactly the medium color, the top is exactly the high color.
        assert_eq!(at_y(0.0), LOW);
        assert_eq!(at_y(3.0), MEDIUM);
        assert_eq!(at_y(10.0), HIGH);
    }

    #[test]
    fn test_gradient_stops_exact_for_arbitrary_colors() {
        // Stop colors with no exact float representation must still come
        // back bit-for-bit at the stops, as GLSL mix delivers.
        let low = Vec3::new(0.1, 0.1, 0.8);
        let medium = Vec3::new(0.1, 0.8, 0.1);
        let high = Vec3::new(0.8, 0.1, 0.1);
        let bound = Range::new(0.0, 10.0);
        let at = |y: f32| gradient_color(bound, Vec3::new(0.0, y, 0.0), low, medium, high);

        assert_eq!(at(0.0), low);
        assert_eq!(at(3.0), medium);
        assert_eq!(at(10.0), high);
    }

    #[test]
    fn test_gradient_monotonic_blend() {
        // Rising through the lower segment trades blue for green.
        let a = at_y(1.0);
        let b = at_y(2.0);
        assert!(b.y > a.y);
        assert!(b.z < a.z);

        // Rising through the upper segment trades green for red.
        let c = at_y(5.0);
        let d = at_y(8.0);
        assert!(d.x > c.x);
        assert!(d.y < c.y);
    }

    #[test]
    fn test_gradient_flat_outside_bound() {
        assert_eq!(at_y(-5.0), LOW);
        assert_eq!(at_y(25.0), HIGH);
    }

    #[test]
    fn test_basic_color_maps_magnitude_to_hue() {
        let bound = Range::new(0.0, 50.0);
        let hues = Range::UNIT;

        let lowest = basic_color(bound, hues, 0.0, 1.0, 1.0);
        assert_eq!(rgb_to_hsv(lowest).x, 0.0);

        let mid = basic_color(bound, hues, 25.0, 1.0, 1.0);
        assert!((rgb_to_hsv(mid).x - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_basic_color_clamps_before_conversion() {
        let bound = Range::new(0.0, 10.0);
        let hues = Range::UNIT;

        // Far outside the bound: still a finite, valid color.
        let over = basic_color(bound, hues, 1.0e7, 1.0, 1.0);
        assert!(over.is_finite());
        assert_eq!(over, basic_color(bound, hues, 10.0, 1.0, 1.0));

        let under = basic_color(bound, hues, -1.0e7, 1.0, 1.0);
        assert!(under.is_finite());
        assert_eq!(under, basic_color(bound, hues, 0.0, 1.0, 1.0));
    }
}
