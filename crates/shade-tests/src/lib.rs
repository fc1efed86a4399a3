//! Integration tests for the shade-rs crates.
//!
//! End-to-end checks that the conversion, effect, and ramp layers compose
//! the way the shading stage expects.
