//! WebGPU rendering module
//!
//! The scene is rebuilt from the current kinematic state every frame as a
//! flat triangle list. World-space vertices are projected to NDC on the CPU
//! through the active camera, so the shader stays a plain passthrough.

pub mod camera;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use camera::Camera;
pub use pipeline::RenderState;
pub use vertex::{SceneVertex, Vertex};
