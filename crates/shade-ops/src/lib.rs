//! # shade-ops
//!
//! Color effects and visualization ramps built on `shade-color`.
//!
//! # Modules
//!
//! - [`effects`] - hue/saturation scaling and midtone-weighted color balance
//! - [`ramp`] - magnitude-to-hue mapping and three-stop vertical gradients
//! - [`buffer`] - the same effects applied across interleaved pixel buffers
//!
//! # Example
//!
//! ```rust
//! use shade_math::Vec3;
//! use shade_ops::effects::{hue_saturation, color_balance};
//!
//! let color = Vec3::new(0.8, 0.4, 0.2);
//!
//! // Desaturate by half, keep hue and brightness.
//! let muted = hue_saturation(color, 1.0, 0.5, 1.0);
//! assert!(muted.y > color.y * 0.9);
//!
//! // Warm up the midtones.
//! let warmed = color_balance(color, Vec3::new(30.0, 0.0, -10.0));
//! # let _ = warmed;
//! ```
//!
//! # Failure modes
//!
//! The per-pixel functions are total: NaN and infinity propagate, nothing
//! traps, and out-of-gamut output is returned unclamped for the caller to
//! deal with. Only the [`buffer`] appliers validate anything, and only the
//! buffer shape.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;

pub mod buffer;
pub mod effects;
pub mod ramp;

pub use error::{OpsError, OpsResult};
