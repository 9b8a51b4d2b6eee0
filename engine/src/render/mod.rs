//! Render Module
//!
//! Renderer-facing geometry for the agent: the billboard's right axis, the
//! sprite and shadow quads, and the vertex layout they are uploaded with.
//! Nothing here touches a GPU API; an external renderer consumes the output.

pub mod billboard;
pub mod quad;
pub mod shadow;

// Re-export commonly used types for convenience
pub use billboard::{
    BillboardOrientation, BillboardOrienter, CAMERA_WEIGHT, MOVEMENT_WEIGHT, SMOOTHING_PER_TICK,
};
pub use quad::{QUAD_INDICES, QuadVertex, ShadowQuad, SpriteConfig, SpriteQuad};
pub use shadow::{ShadowConfig, ShadowParams};
