//! # shade-math
//!
//! Portable substitutes for the shader built-ins used by the color library:
//!
//! - [`Vec2`], [`Vec3`], [`Vec4`] - small float vectors for ranges and colors
//! - [`Range`] - a scalar (min, max) interval
//! - Interpolation free functions ([`lerp`], [`smoothstep`], [`fract`], ...)
//!
//! # Design
//!
//! GLSL gives shaders `mix`, `smoothstep`, `clamp`, `step`, `fract` and
//! component swizzling for free; a general-purpose target does not. This
//! crate provides those primitives as plain functions and lightweight value
//! types so the color code reads the same on the CPU as it did on the GPU.
//!
//! The vector types interoperate with [`glam`] for callers that already
//! carry glam data.
//!
//! # Usage
//!
//! ```rust
//! use shade_math::{Vec3, Range, smoothstep};
//!
//! let rgb = Vec3::new(1.0, 0.5, 0.25);
//! let clamped = (rgb * 2.0).clamp01();
//!
//! let bound = Range::new(0.0, 10.0);
//! let t = smoothstep(bound.min, bound.max, 5.0);
//! ```
//!
//! # Used By
//!
//! - `shade-color` - RGB/HSV conversion and range remapping
//! - `shade-ops` - hue/saturation, color balance, gradient ramps

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod interp;
mod range;
mod vec2;
mod vec3;
mod vec4;

pub use interp::*;
pub use range::*;
pub use vec2::*;
pub use vec3::*;
pub use vec4::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{Vec2 as GlamVec2, Vec3 as GlamVec3, Vec4 as GlamVec4};
}
