//! Effects applied across interleaved pixel buffers.
//!
//! The shader invoked the per-pixel effects once per fragment; on the CPU
//! the same math runs over an interleaved `f32` buffer of RGB or RGBA
//! pixels. The math is referentially transparent, so with the default
//! `parallel` feature the pixels are processed in rayon chunks in
//! whatever order the pool picks.
//!
//! Only the buffer shape is validated; pixel values are passed through
//! the same total math as the scalar API.

use crate::effects::{color_balance, hue_saturation};
use crate::{OpsError, OpsResult};
use shade_math::Vec3;
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Channel counts accepted by the buffer appliers.
const RGB: usize = 3;
const RGBA: usize = 4;

fn check_shape(len: usize, channels: usize) -> OpsResult<()> {
    if channels != RGB && channels != RGBA {
        return Err(OpsError::InvalidParameter(format!(
            "channels must be 3 (RGB) or 4 (RGBA), got {}",
            channels
        )));
    }
    if len % channels != 0 {
        return Err(OpsError::InvalidDimensions(format!(
            "buffer length {} is not a multiple of {} channels",
            len, channels
        )));
    }
    Ok(())
}

/// Runs a pure color transform over every pixel. Alpha, when present, is
/// left untouched.
fn map_pixels<F>(pixels: &mut [f32], channels: usize, op: F)
where
    F: Fn(Vec3) -> Vec3 + Sync,
{
    let per_pixel = |px: &mut [f32]| {
        let out = op(Vec3::new(px[0], px[1], px[2]));
        px[0] = out.x;
        px[1] = out.y;
        px[2] = out.z;
    };

    #[cfg(feature = "parallel")]
    pixels.par_chunks_exact_mut(channels).for_each(per_pixel);

    #[cfg(not(feature = "parallel"))]
    pixels.chunks_exact_mut(channels).for_each(per_pixel);
}

/// Applies [`hue_saturation`] to every pixel of an interleaved buffer.
///
/// `channels` must be 3 or 4; with 4, alpha passes through.
///
/// # Example
///
/// ```rust
/// use shade_ops::buffer::hue_saturation_buffer;
///
/// let mut pixels = vec![0.8, 0.4, 0.2, 1.0, 0.1, 0.9, 0.5, 0.5];
/// hue_saturation_buffer(&mut pixels, 4, 1.0, 0.5, 1.0).unwrap();
/// assert_eq!(pixels[3], 1.0); // alpha untouched
/// ```
pub fn hue_saturation_buffer(
    pixels: &mut [f32],
    channels: usize,
    hue: f32,
    saturation: f32,
    value: f32,
) -> OpsResult<()> {
    check_shape(pixels.len(), channels)?;
    debug!(
        pixels = pixels.len() / channels,
        channels, "Applying hue/saturation"
    );
    trace!(hue, saturation, value, "hue_saturation_buffer");

    map_pixels(pixels, channels, |rgb| {
        hue_saturation(rgb, hue, saturation, value)
    });
    Ok(())
}

/// Applies [`color_balance`] to every pixel of an interleaved buffer.
///
/// `channels` must be 3 or 4; with 4, alpha passes through.
pub fn color_balance_buffer(pixels: &mut [f32], channels: usize, shift: Vec3) -> OpsResult<()> {
    check_shape(pixels.len(), channels)?;
    debug!(
        pixels = pixels.len() / channels,
        channels, "Applying color balance"
    );
    trace!(shift.x, shift.y, shift.z, "color_balance_buffer");

    map_pixels(pixels, channels, |rgb| color_balance(rgb, shift));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_matches_per_pixel() {
        let colors = [
            Vec3::new(0.8, 0.4, 0.2),
            Vec3::new(0.1, 0.9, 0.5),
            Vec3::new(0.5, 0.5, 0.5),
        ];
        let mut buf: Vec<f32> = colors.iter().flat_map(|c| c.to_array()).collect();
        let shift = Vec3::new(30.0, 0.0, -10.0);

        color_balance_buffer(&mut buf, 3, shift).unwrap();

        for (chunk, &c) in buf.chunks_exact(3).zip(colors.iter()) {
            let expected = color_balance(c, shift);
            assert_eq!(chunk, expected.to_array());
        }
    }

    #[test]
    fn test_buffer_rgba_preserves_alpha() {
        let mut buf = vec![0.8, 0.4, 0.2, 0.25, 0.1, 0.9, 0.5, 0.75];
        hue_saturation_buffer(&mut buf, 4, 1.0, 0.5, 1.0).unwrap();
        assert_eq!(buf[3], 0.25);
        assert_eq!(buf[7], 0.75);
    }

    #[test]
    fn test_buffer_rejects_bad_channels() {
        let mut buf = vec![0.0; 10];
        let err = hue_saturation_buffer(&mut buf, 5, 1.0, 1.0, 1.0).unwrap_err();
        assert!(matches!(err, OpsError::InvalidParameter(_)));
    }

    #[test]
    fn test_buffer_rejects_ragged_length() {
        let mut buf = vec![0.0; 10];
        let err = color_balance_buffer(&mut buf, 3, Vec3::ZERO).unwrap_err();
        assert!(matches!(err, OpsError::InvalidDimensions(_)));
    }

    #[test]
    fn test_empty_buffer_is_fine() {
        let mut buf: Vec<f32> = vec![];
        color_balance_buffer(&mut buf, 3, Vec3::ZERO).unwrap();
        hue_saturation_buffer(&mut buf, 4, 1.0, 1.0, 1.0).unwrap();
    }
}
