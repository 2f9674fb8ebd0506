//! wgpu rendering module
//!
//! Everything is drawn as flat-colored triangles built on the CPU each frame.

pub mod font;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderError, RenderState};
pub use scene::SceneBuilder;
pub use vertex::Vertex;
