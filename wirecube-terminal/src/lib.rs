/// Terminal front-end for the wirecube renderer
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use wirecube_core::{draw_cube, projection, transform, FrameContext, Surface};

pub mod surface;

pub use surface::{SurfaceError, TerminalSurface};

/// Side length of the rendered cube, in world units.
pub const CUBE_SIDE: f64 = 20.0;

/// Fixed pacing sleep per frame; true frame period is render time plus this.
const FRAME_DELAY: Duration = Duration::from_millis(50);

/// Terminal size and centre offset observed on the last frame, reported once
/// the loop exits.
#[derive(Debug, Clone, Copy)]
pub struct FrameStats {
    pub frames: u64,
    pub width: u16,
    pub height: u16,
    pub center: (f64, f64),
}

/// The animation loop: one rotating cube on a terminal surface.
pub struct App {
    surface: TerminalSurface,
    frame: u64,
}

impl App {
    pub fn new() -> Result<Self, SurfaceError> {
        Ok(Self {
            surface: TerminalSurface::new()?,
            frame: 0,
        })
    }

    /// Run until the shutdown flag is raised. Each frame: clear, re-query the
    /// terminal size, rebuild the frame context from the frame counter, draw
    /// the cube, present, then sleep the fixed pacing delay.
    pub fn run(&mut self, shutdown: &AtomicBool) -> Result<FrameStats, SurfaceError> {
        let projection = projection::oblique();

        while !shutdown.load(Ordering::Relaxed) {
            self.surface.clear();
            self.surface.resize_to_terminal()?;

            let ctx = FrameContext {
                rotation: transform::rotation(self.frame),
                projection,
                center: self.surface.center(),
            };
            draw_cube(&mut self.surface, &ctx, CUBE_SIDE);
            self.surface.present()?;

            self.frame += 1;
            thread::sleep(FRAME_DELAY);
        }

        log::info!("shutdown requested after {} frames", self.frame);
        let (width, height) = self.surface.size();
        let center = self.surface.center();
        Ok(FrameStats {
            frames: self.frame,
            width,
            height,
            center: (center[0], center[1]),
        })
    }
}
