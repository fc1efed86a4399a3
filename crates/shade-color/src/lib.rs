//! # shade-color
//!
//! Color-space conversion primitives for the shading math library:
//!
//! - [`convert_range`] / [`convert_range3`] - linear range remapping
//! - [`rgb_to_hsv`] / [`hsv_to_rgb`] - RGB/HSV conversion
//! - [`rgb_to_value`] - HSV value (brightness) without a full conversion
//!
//! # Conventions
//!
//! Colors are [`Vec3`](shade_math::Vec3) triplets. Whether a triplet is
//! normalized [0, 1] or 8-bit [0, 255] RGB is decided entirely by which
//! [`Range`](shade_math::Range) constants the caller remaps through; the
//! functions here never assume one.
//!
//! All functions are total: degenerate inputs produce well-defined
//! degenerate outputs (gray input gives hue 0, a zero-width origin range
//! gives infinity or NaN), never an error.
//!
//! # Usage
//!
//! ```rust
//! use shade_math::Vec3;
//! use shade_color::{rgb_to_hsv, hsv_to_rgb};
//!
//! let hsv = rgb_to_hsv(Vec3::new(1.0, 0.5, 0.25));
//! let rgb = hsv_to_rgb(hsv);
//! assert!((rgb.x - 1.0).abs() < 1e-5);
//! ```
//!
//! # Used By
//!
//! - `shade-ops` - hue/saturation, color balance, gradient ramps

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod convert;

pub use convert::*;
