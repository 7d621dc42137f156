//! Vertex types for scene rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// GPU vertex: NDC position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// World-space vertex, projected to NDC by the camera before upload
#[derive(Copy, Clone, Debug)]
pub struct SceneVertex {
    pub pos: Vec3,
    pub color: [f32; 4],
}

impl SceneVertex {
    pub const fn new(pos: Vec3, color: [f32; 4]) -> Self {
        Self { pos, color }
    }
}

/// Colors for scene elements
pub mod colors {
    pub const ORBIT_RING: [f32; 4] = [0.35, 0.4, 0.5, 1.0];
    pub const RADIUS_LINE: [f32; 4] = [0.45, 0.45, 0.5, 0.6];
    pub const ANGLE_ARC: [f32; 4] = [1.0, 0.67, 0.0, 1.0];
    pub const BODY: [f32; 4] = [0.95, 0.95, 1.0, 1.0];
    pub const VELOCITY: [f32; 4] = [0.2, 0.85, 0.9, 1.0];
    pub const ACCELERATION: [f32; 4] = [0.95, 0.35, 0.6, 1.0];
    pub const GRID: [f32; 4] = [0.25, 0.25, 0.28, 0.5];
    pub const GRID_AXIS: [f32; 4] = [0.4, 0.4, 0.45, 0.7];
    pub const STAR: [f32; 4] = [0.8, 0.85, 1.0, 0.8];
    pub const BACKGROUND: [f32; 4] = [0.02, 0.02, 0.05, 1.0];
}
