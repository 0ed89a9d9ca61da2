/// Crossterm-backed display surface
use crossterm::{cursor, execute, queue, style::Print, terminal};
use std::io::{self, stdout, Stdout, Write};
use thiserror::Error;
use wirecube_core::{Surface, Vector};

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("failed to initialize terminal: {0}")]
    Init(#[source] io::Error),
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
}

/// A character buffer matching the terminal, flipped to the screen on
/// `present`. Raw mode and the alternate screen are held for the surface's
/// lifetime and restored on drop, including the Ctrl-C exit path.
pub struct TerminalSurface {
    out: Stdout,
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl TerminalSurface {
    pub fn new() -> Result<Self, SurfaceError> {
        terminal::enable_raw_mode().map_err(SurfaceError::Init)?;
        let mut out = stdout();
        execute!(out, terminal::EnterAlternateScreen, cursor::Hide).map_err(SurfaceError::Init)?;
        let (width, height) = terminal::size().map_err(SurfaceError::Init)?;
        log::info!("terminal surface ready, {width}x{height}");

        Ok(Self {
            out,
            width,
            height,
            cells: vec![' '; width as usize * height as usize],
        })
    }

    /// Re-query the terminal and rebuild the buffer when its size changed,
    /// so a live resize takes effect on the next frame.
    pub fn resize_to_terminal(&mut self) -> Result<(), SurfaceError> {
        let (width, height) = terminal::size()?;
        if (width, height) != (self.width, self.height) {
            log::debug!("terminal resized to {width}x{height}");
            self.width = width;
            self.height = height;
            self.cells = vec![' '; width as usize * height as usize];
        }
        Ok(())
    }

    /// The screen centre in buffer coordinates, the origin all projected
    /// points are translated by.
    pub fn center(&self) -> Vector<2> {
        Vector::new([f64::from(self.width / 2), f64::from(self.height / 2)])
    }
}

impl Surface for TerminalSurface {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = ' ';
        }
    }

    fn put(&mut self, row: i32, col: i32, glyph: char) {
        // Writes outside the buffer are dropped, not an error
        if row < 0 || col < 0 {
            return;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.height as usize || col >= self.width as usize {
            return;
        }
        self.cells[row * self.width as usize + col] = glyph;
    }

    fn present(&mut self) -> io::Result<()> {
        for row in 0..self.height as usize {
            let start = row * self.width as usize;
            let line: String = self.cells[start..start + self.width as usize]
                .iter()
                .collect();
            queue!(self.out, cursor::MoveTo(0, row as u16), Print(line))?;
        }
        self.out.flush()
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        let _ = execute!(self.out, terminal::LeaveAlternateScreen, cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // TerminalSurface itself needs a tty; the buffer arithmetic is shared
    // with put/center and testable via a detached instance.
    fn detached(width: u16, height: u16) -> TerminalSurface {
        TerminalSurface {
            out: stdout(),
            width,
            height,
            cells: vec![' '; width as usize * height as usize],
        }
    }

    #[test]
    fn test_put_drops_out_of_bounds_writes() {
        let mut surface = detached(10, 5);
        surface.put(-1, 0, '@');
        surface.put(0, -3, '@');
        surface.put(5, 0, '@');
        surface.put(0, 10, '@');
        assert!(surface.cells.iter().all(|&c| c == ' '));
    }

    #[test]
    fn test_put_writes_in_bounds_cell() {
        let mut surface = detached(10, 5);
        surface.put(2, 3, '@');
        assert_eq!(surface.cells[2 * 10 + 3], '@');
    }

    #[test]
    fn test_center_uses_integer_halves() {
        let surface = detached(81, 25);
        let center = surface.center();
        assert_eq!(center[0], 40.0);
        assert_eq!(center[1], 12.0);
    }
}
