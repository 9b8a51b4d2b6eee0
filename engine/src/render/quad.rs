//! Sprite and Shadow Quads
//!
//! Builds the world-space corners of the agent's billboard sprite and of its
//! contact shadow. The renderer uploads them as [`QuadVertex`] data and draws
//! them with [`QUAD_INDICES`].
//!
//! Corner order is bottom-left, bottom-right, top-right, top-left (as seen
//! from the camera for the sprite, from above for the shadow).

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::shadow::{ShadowConfig, ShadowParams};
use crate::physics::frame::{local_up, tangent_direction};

/// Two triangles covering a quad with corners in the order above
pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Texture coordinates for each corner
const QUAD_UVS: [[f32; 2]; 4] = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

/// Sprite size settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteConfig {
    /// Sprite width in meters
    pub width: f32,
    /// Sprite height in meters
    pub height: f32,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            width: 1.2,
            height: 1.6,
        }
    }
}

/// Vertex for sprite and shadow quads
///
/// Layout (24 bytes): position (12) + uv (8) + opacity (4)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
    pub opacity: f32,
}

static_assertions::assert_eq_size!(QuadVertex, [u8; 24]);

impl QuadVertex {
    /// Vertex buffer layout matching the field order above.
    pub fn buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // position: vec3<f32> at offset 0
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                // uv: vec2<f32> at offset 12
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 12,
                    shader_location: 1,
                },
                // opacity: f32 at offset 20
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32,
                    offset: 20,
                    shader_location: 2,
                },
            ],
        }
    }
}

fn quad_vertices(corners: &[Vec3; 4], opacity: f32) -> [QuadVertex; 4] {
    std::array::from_fn(|i| QuadVertex {
        position: corners[i].to_array(),
        uv: QUAD_UVS[i],
        opacity,
    })
}

/// Camera-facing sprite quad standing on the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteQuad {
    pub corners: [Vec3; 4],
}

impl SpriteQuad {
    /// Build the sprite for an agent centered at `position`.
    ///
    /// The bottom edge sits at the agent's feet (`agent_radius` below its
    /// center). `right` is re-projected onto the tangent plane so the sprite
    /// stands upright.
    pub fn build(
        position: Vec3,
        center: Vec3,
        right: Vec3,
        agent_radius: f32,
        sprite: &SpriteConfig,
    ) -> Self {
        let up = local_up(position, center);
        let right = tangent_direction(right, up);
        let feet = position - up * agent_radius;

        let half_width = right * (sprite.width * 0.5);
        let rise = up * sprite.height;
        let bottom_left = feet - half_width;
        let bottom_right = feet + half_width;

        Self {
            corners: [bottom_left, bottom_right, bottom_right + rise, bottom_left + rise],
        }
    }

    /// Renderer vertices (fully opaque).
    pub fn vertices(&self) -> [QuadVertex; 4] {
        quad_vertices(&self.corners, 1.0)
    }
}

/// Shadow quad lying on the sphere under the agent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowQuad {
    pub corners: [Vec3; 4],
    pub opacity: f32,
}

impl ShadowQuad {
    /// Build the shadow under an agent centered at `position`.
    pub fn build(
        position: Vec3,
        center: Vec3,
        sphere_radius: f32,
        right: Vec3,
        params: ShadowParams,
        config: &ShadowConfig,
    ) -> Self {
        let up = local_up(position, center);
        let right = tangent_direction(right, up);
        let forward = up.cross(right);
        let ground = center + up * (sphere_radius + config.surface_offset);

        let half_width = right * (config.width * params.scale * 0.5);
        let half_depth = forward * (config.depth * params.scale * 0.5);

        Self {
            corners: [
                ground - half_width - half_depth,
                ground + half_width - half_depth,
                ground + half_width + half_depth,
                ground - half_width + half_depth,
            ],
            opacity: params.opacity,
        }
    }

    /// Renderer vertices carrying the shadow opacity.
    pub fn vertices(&self) -> [QuadVertex; 4] {
        quad_vertices(&self.corners, self.opacity)
    }

    /// Center of the quad.
    pub fn center(&self) -> Vec3 {
        self.corners.iter().copied().sum::<Vec3>() * 0.25
    }
}
