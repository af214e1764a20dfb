//! Drawing surfaces a render pass can paint into.

use crate::{rendering::context::DrawCommand, Result};

/// Pixel-addressable drawing target owned by one map.
///
/// A render pass asks the surface for its container size, resizes the
/// backing store to it, then presents a full frame. `present` always starts
/// from a cleared surface; nothing of the previous frame survives.
pub trait Surface {
    /// Current size of the element hosting the surface, `None` while it is not mounted
    fn container_size(&self) -> Option<(u32, u32)>;

    /// Resize the backing store
    fn resize(&mut self, width: u32, height: u32) -> Result<()>;

    /// Clear and repaint the surface from a recorded frame
    fn present(&mut self, commands: &[DrawCommand]) -> Result<()>;
}

/// Surface that keeps the last presented frame instead of painting it.
///
/// Useful headless, in tests, and for replaying a frame onto another backend later.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    container: Option<(u32, u32)>,
    size: (u32, u32),
    frame: Vec<DrawCommand>,
    frames_presented: usize,
}

impl RecordingSurface {
    /// Mounted surface with a container of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            container: Some((width, height)),
            ..Self::default()
        }
    }

    /// Surface whose container is not mounted yet
    pub fn unmounted() -> Self {
        Self::default()
    }

    /// Simulate the container being laid out at a new size
    pub fn set_container_size(&mut self, size: Option<(u32, u32)>) {
        self.container = size;
    }

    /// Size of the backing store after the last resize
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    pub fn frame(&self) -> &[DrawCommand] {
        &self.frame
    }

    pub fn frames_presented(&self) -> usize {
        self.frames_presented
    }
}

impl Surface for RecordingSurface {
    fn container_size(&self) -> Option<(u32, u32)> {
        self.container
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.size = (width, height);
        Ok(())
    }

    fn present(&mut self, commands: &[DrawCommand]) -> Result<()> {
        self.frame = commands.to_vec();
        self.frames_presented += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::color::Color;

    #[test]
    fn test_recording_surface_keeps_last_frame() {
        let mut surface = RecordingSurface::new(200, 100);
        assert_eq!(surface.container_size(), Some((200, 100)));

        surface.resize(200, 100).unwrap();
        surface
            .present(&[DrawCommand::Clear {
                color: Color::WHITE,
            }])
            .unwrap();
        surface.present(&[]).unwrap();

        assert_eq!(surface.size(), (200, 100));
        assert!(surface.frame().is_empty());
        assert_eq!(surface.frames_presented(), 2);
    }

    #[test]
    fn test_unmounted_surface_has_no_container() {
        let mut surface = RecordingSurface::unmounted();
        assert_eq!(surface.container_size(), None);

        surface.set_container_size(Some((320, 320)));
        assert_eq!(surface.container_size(), Some((320, 320)));
    }
}
