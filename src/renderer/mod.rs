//! Rendering module
//!
//! The host engine owns pixels; this module only transforms models and
//! describes what to draw through the [`Canvas`] trait.

pub mod canvas;
pub mod lines;
pub mod scene;
pub mod vertex;
pub mod wireframe;

pub use canvas::Canvas;
pub use lines::{LineBatch, TextItem};
pub use scene::Scene;
pub use vertex::{Color, Vertex, colors};
pub use wireframe::{Model, Wireframe, transform_into};
