//! Letter-T icon model and in-memory rendering

mod canvas;
mod geometry;
mod render;
mod spec;

pub use canvas::*;
pub use geometry::*;
pub use render::*;
pub use spec::*;
