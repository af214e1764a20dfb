use serde::{Deserialize, Serialize};

use crate::{core::geo::Point, rendering::color::Color};

/// Styles for circle primitives
#[derive(Debug, Clone, PartialEq)]
pub struct CircleStyle {
    pub fill_color: Color,
    pub radius: f32,
}

/// Styles for straight line segments
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub color: Color,
    pub width: f32,
}

/// Horizontal anchoring of a text label around its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl TextAlign {
    /// Canvas `textAlign` keyword
    pub fn as_css(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub font_size: f32,
    pub font_family: String,
    pub align: TextAlign,
}

impl TextStyle {
    /// CSS font shorthand, e.g. `12px sans-serif`
    pub fn font_css(&self) -> String {
        format!("{}px {}", self.font_size, self.font_family)
    }
}

/// Commands that can be issued to the render context.
///
/// Positions are surface pixels with the origin in the top-left corner.
/// Text positions are the baseline anchor, as on a 2-D canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface
    Clear { color: Color },
    FillRect {
        min: Point,
        max: Point,
        color: Color,
    },
    Line {
        from: Point,
        to: Point,
        style: LineStyle,
    },
    FillCircle {
        center: Point,
        style: CircleStyle,
    },
    StrokeCircle {
        center: Point,
        radius: f32,
        style: LineStyle,
    },
    Text {
        position: Point,
        text: String,
        style: TextStyle,
    },
}

/// Frame recorder: layers push primitives, a surface replays them
pub struct RenderContext {
    pub width: u32,
    pub height: u32,
    /// Drawing primitives of the current frame, in paint order
    pub drawing_queue: Vec<DrawCommand>,
}

impl RenderContext {
    /// Create a new render context
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            drawing_queue: Vec::new(),
        }
    }

    /// Begin a frame at the given surface size, dropping the previous one
    pub fn begin_frame(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.drawing_queue.clear();
    }

    pub fn clear(&mut self, color: Color) {
        self.drawing_queue.push(DrawCommand::Clear { color });
    }

    pub fn fill_rect(&mut self, min: Point, max: Point, color: Color) {
        self.drawing_queue.push(DrawCommand::FillRect { min, max, color });
    }

    pub fn line(&mut self, from: Point, to: Point, style: &LineStyle) {
        self.drawing_queue.push(DrawCommand::Line {
            from,
            to,
            style: style.clone(),
        });
    }

    pub fn fill_circle(&mut self, center: Point, style: &CircleStyle) {
        self.drawing_queue.push(DrawCommand::FillCircle {
            center,
            style: style.clone(),
        });
    }

    pub fn stroke_circle(&mut self, center: Point, radius: f32, style: &LineStyle) {
        self.drawing_queue.push(DrawCommand::StrokeCircle {
            center,
            radius,
            style: style.clone(),
        });
    }

    pub fn text(&mut self, position: Point, text: impl Into<String>, style: &TextStyle) {
        self.drawing_queue.push(DrawCommand::Text {
            position,
            text: text.into(),
            style: style.clone(),
        });
    }

    /// Get the current drawing queue
    pub fn get_drawing_queue(&self) -> &[DrawCommand] {
        &self.drawing_queue
    }
}
