use egui::{Align2, FontId, Painter, Pos2, Rect, Stroke};

use crate::{
    core::geo::Point,
    rendering::{
        context::{DrawCommand, TextAlign},
        surface::Surface,
    },
    Result,
};

/// Replays frames onto an egui painter.
///
/// The widget rect is the container; frame coordinates are relative to its
/// top-left corner.
pub struct EguiSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, point: &Point) -> Pos2 {
        Pos2::new(
            self.rect.min.x + point.x as f32,
            self.rect.min.y + point.y as f32,
        )
    }
}

impl Surface for EguiSurface<'_> {
    fn container_size(&self) -> Option<(u32, u32)> {
        let (width, height) = (self.rect.width(), self.rect.height());
        if !width.is_finite() || !height.is_finite() || width < 1.0 || height < 1.0 {
            return None;
        }
        Some((width as u32, height as u32))
    }

    fn resize(&mut self, _width: u32, _height: u32) -> Result<()> {
        // egui lays the rect out every frame; there is no backing store to reallocate
        Ok(())
    }

    fn present(&mut self, commands: &[DrawCommand]) -> Result<()> {
        for command in commands {
            match command {
                DrawCommand::Clear { color } => {
                    self.painter.rect_filled(self.rect, 0.0, *color);
                }
                DrawCommand::FillRect { min, max, color } => {
                    let rect = Rect::from_min_max(self.to_screen(min), self.to_screen(max));
                    self.painter.rect_filled(rect, 0.0, *color);
                }
                DrawCommand::Line { from, to, style } => {
                    self.painter.line_segment(
                        [self.to_screen(from), self.to_screen(to)],
                        Stroke::new(style.width, style.color),
                    );
                }
                DrawCommand::FillCircle { center, style } => {
                    self.painter.circle_filled(
                        self.to_screen(center),
                        style.radius,
                        style.fill_color,
                    );
                }
                DrawCommand::StrokeCircle {
                    center,
                    radius,
                    style,
                } => {
                    self.painter.circle_stroke(
                        self.to_screen(center),
                        *radius,
                        Stroke::new(style.width, style.color),
                    );
                }
                DrawCommand::Text {
                    position,
                    text,
                    style,
                } => {
                    // Canvas text sits on its baseline; bottom anchoring is the closest egui has
                    let anchor = match style.align {
                        TextAlign::Left => Align2::LEFT_BOTTOM,
                        TextAlign::Center => Align2::CENTER_BOTTOM,
                        TextAlign::Right => Align2::RIGHT_BOTTOM,
                    };
                    self.painter.text(
                        self.to_screen(position),
                        anchor,
                        text,
                        FontId::proportional(style.font_size),
                        style.color.into(),
                    );
                }
            }
        }
        Ok(())
    }
}
