/// Surface contract, line rasterizer, and cube scene
use crate::geometry::cube_edges;
use crate::matrix::Matrix;
use crate::projection::{shade, to_screen};
use crate::vector::Vector;
use std::io;

/// Minimal display-surface contract the renderer writes through.
///
/// The core owns no terminal state; implementations decide what a cell write
/// outside their bounds means (the terminal surface drops it).
pub trait Surface {
    /// Current (width, height) in cells.
    fn size(&self) -> (u16, u16);
    /// Reset every cell to blank.
    fn clear(&mut self);
    /// Write one glyph at (row, col).
    fn put(&mut self, row: i32, col: i32, glyph: char);
    /// Flip the buffer to visible output.
    fn present(&mut self) -> io::Result<()>;
}

/// Immutable per-frame render state: rotation, projection, and the screen
/// centre in buffer coordinates. Built fresh each frame by the animation
/// loop, read-only to the rasterizer.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    pub rotation: Matrix<3, 3>,
    pub projection: Matrix<3, 2>,
    pub center: Vector<2>,
}

/// Project and shade a single 3D point into one surface cell.
pub fn draw_point(surface: &mut impl Surface, ctx: &FrameContext, point: Vector<3>) {
    let (row, col) = to_screen(&ctx.projection, point, ctx.center);
    surface.put(row, col, shade(point[2]));
}

/// Rasterize a 3D segment by marching in unit steps along its direction.
///
/// Emits exactly `trunc(length)` samples. Sample spacing is one world unit
/// along the segment, not one screen cell, so short segments may leave gaps
/// and long ones overdraw; that is the intended look. A zero-length segment
/// draws nothing.
pub fn draw_line(surface: &mut impl Surface, ctx: &FrameContext, from: Vector<3>, to: Vector<3>) {
    let displacement = to - from;
    let steps = displacement.length() as u32;
    let Some(direction) = displacement.normalized() else {
        return;
    };

    let mut position = from;
    for _ in 0..steps {
        draw_point(surface, ctx, position);
        position += direction;
    }
}

/// Draw the wireframe cube: rotate each of the 12 edges by the frame's
/// rotation, then rasterize it.
pub fn draw_cube(surface: &mut impl Surface, ctx: &FrameContext, side: f64) {
    log::trace!("drawing cube, side {side}");
    for edge in cube_edges(side) {
        let edge = edge.transformed(&ctx.rotation);
        draw_line(surface, ctx, edge.from, edge.to);
    }
}
