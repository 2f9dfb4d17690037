//! Procedural generator for the letter-T icon set
//!
//! Draws a white "T" from two filled rectangles on a steel-blue square and
//! writes it as PNG at each of the shipped sizes.

pub mod error;
pub mod generator;
pub mod icon;

pub use error::GenerateError;
pub use generator::{check_capability, IconGenerator, ICON_SIZES, OUTPUT_DIR, OUTPUT_FORMAT};
