/// Wirecube Core Library - math and rendering pipeline
///
/// This library provides the stateless core of the wireframe renderer:
/// fixed-dimension vector/matrix types, the oblique projection with depth
/// shading, the unit-step line rasterizer, and the cube scene. It writes to
/// any display surface implementing the `Surface` trait and owns no terminal
/// state of its own.

pub mod geometry;
pub mod matrix;
pub mod projection;
pub mod render;
pub mod transform;
pub mod vector;

// Re-export commonly used types
pub use geometry::{cube_edges, Segment};
pub use matrix::Matrix;
pub use render::{draw_cube, draw_line, draw_point, FrameContext, Surface};
pub use vector::Vector;
