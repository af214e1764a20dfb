//! Headless raster backend on top of `image::RgbaImage`.
//!
//! Coverage is decided per pixel center, with no antialiasing, so the same
//! frame always produces the same bytes.

use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::{
    core::geo::Point,
    rendering::{
        color::Color,
        context::{DrawCommand, TextAlign},
        surface::Surface,
    },
    Result,
};

/// Where a label ended up; glyphs are not rasterized because no font is bundled
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPlacement {
    pub text: String,
    /// Baseline anchor in surface pixels
    pub position: Point,
    pub align: TextAlign,
    pub font_size: f32,
    pub color: Color,
}

pub struct RasterSurface {
    container: Option<(u32, u32)>,
    image: RgbaImage,
    labels: Vec<LabelPlacement>,
}

impl RasterSurface {
    /// Raster surface inside a container of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            container: Some((width, height)),
            image: RgbaImage::new(0, 0),
            labels: Vec::new(),
        }
    }

    /// Simulate the container being laid out at a new size
    pub fn set_container_size(&mut self, size: Option<(u32, u32)>) {
        self.container = size;
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn labels(&self) -> &[LabelPlacement] {
        &self.labels
    }

    /// Color of a single pixel, `None` outside the surface
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.image.width() || y >= self.image.height() {
            return None;
        }
        let Rgba([r, g, b, a]) = *self.image.get_pixel(x, y);
        Some(Color::rgba(r, g, b, a))
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }

    fn execute(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Clear { color } => {
                let fill: Rgba<u8> = (*color).into();
                for pixel in self.image.pixels_mut() {
                    *pixel = fill;
                }
            }
            DrawCommand::FillRect { min, max, color } => {
                self.fill_where(*min, *max, *color, |x, y| {
                    x >= min.x && x < max.x && y >= min.y && y < max.y
                });
            }
            DrawCommand::Line { from, to, style } => {
                let half = style.width.max(1.0) as f64 / 2.0;
                if from.x == to.x || from.y == to.y {
                    // Axis-aligned: a line at integer coordinate c owns pixel c, as a
                    // canvas does for the half-covered column right of c
                    let across = |c: f64| (c - half + 0.5, c + half + 0.5);
                    let (min, max) = if from.x == to.x {
                        let (x0, x1) = across(from.x);
                        (Point::new(x0, from.y.min(to.y)), Point::new(x1, from.y.max(to.y)))
                    } else {
                        let (y0, y1) = across(from.y);
                        (Point::new(from.x.min(to.x), y0), Point::new(from.x.max(to.x), y1))
                    };
                    self.fill_where(min, max, style.color, |x, y| {
                        x >= min.x && x < max.x && y >= min.y && y < max.y
                    });
                } else {
                    let min = Point::new(from.x.min(to.x) - half, from.y.min(to.y) - half);
                    let max = Point::new(from.x.max(to.x) + half, from.y.max(to.y) + half);
                    let (a, b) = (*from, *to);
                    self.fill_where(min, max, style.color, |x, y| {
                        distance_to_segment(Point::new(x, y), a, b) <= half
                    });
                }
            }
            DrawCommand::FillCircle { center, style } => {
                let r = style.radius as f64;
                let c = *center;
                self.fill_where(
                    Point::new(c.x - r, c.y - r),
                    Point::new(c.x + r, c.y + r),
                    style.fill_color,
                    |x, y| Point::new(x, y).distance_to(&c) < r,
                );
            }
            DrawCommand::StrokeCircle {
                center,
                radius,
                style,
            } => {
                let half = style.width as f64 / 2.0;
                let inner = *radius as f64 - half;
                let outer = *radius as f64 + half;
                let c = *center;
                self.fill_where(
                    Point::new(c.x - outer, c.y - outer),
                    Point::new(c.x + outer, c.y + outer),
                    style.color,
                    |x, y| {
                        let d = Point::new(x, y).distance_to(&c);
                        d >= inner && d < outer
                    },
                );
            }
            DrawCommand::Text {
                position,
                text,
                style,
            } => {
                self.labels.push(LabelPlacement {
                    text: text.clone(),
                    position: *position,
                    align: style.align,
                    font_size: style.font_size,
                    color: style.color,
                });
            }
        }
    }

    /// Blend `color` into every pixel of the box whose center passes `covers`
    fn fill_where<F>(&mut self, min: Point, max: Point, color: Color, covers: F)
    where
        F: Fn(f64, f64) -> bool,
    {
        if color.a == 0 || !(min.x.is_finite() && min.y.is_finite()) {
            return;
        }
        if !(max.x.is_finite() && max.y.is_finite()) {
            return;
        }

        let (width, height) = self.image.dimensions();
        let x0 = min.x.floor().max(0.0) as u32;
        let y0 = min.y.floor().max(0.0) as u32;
        let x1 = (max.x.ceil().max(0.0) as u32).min(width);
        let y1 = (max.y.ceil().max(0.0) as u32).min(height);

        for y in y0..y1 {
            for x in x0..x1 {
                if covers(x as f64 + 0.5, y as f64 + 0.5) {
                    let pixel = self.image.get_pixel_mut(x, y);
                    *pixel = blend_over(color, *pixel);
                }
            }
        }
    }
}

impl Surface for RasterSurface {
    fn container_size(&self) -> Option<(u32, u32)> {
        self.container
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if self.image.dimensions() != (width, height) {
            self.image = RgbaImage::new(width, height);
        }
        Ok(())
    }

    fn present(&mut self, commands: &[DrawCommand]) -> Result<()> {
        for pixel in self.image.pixels_mut() {
            *pixel = Rgba([0, 0, 0, 0]);
        }
        self.labels.clear();

        for command in commands {
            self.execute(command);
        }
        Ok(())
    }
}

/// Source-over compositing of a straight-alpha color
fn blend_over(src: Color, dst: Rgba<u8>) -> Rgba<u8> {
    if src.a == 255 {
        return src.into();
    }

    let sa = src.a as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |s: u8, d: u8| {
        let value = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
        value.round().clamp(0.0, 255.0) as u8
    };

    Rgba([
        channel(src.r, dst[0]),
        channel(src.g, dst[1]),
        channel(src.b, dst[2]),
        (out_a * 255.0).round() as u8,
    ])
}

fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let ab = b.subtract(&a);
    let len_sq = ab.x * ab.x + ab.y * ab.y;
    if len_sq == 0.0 {
        return p.distance_to(&a);
    }
    let ap = p.subtract(&a);
    let t = ((ap.x * ab.x + ap.y * ab.y) / len_sq).clamp(0.0, 1.0);
    p.distance_to(&Point::new(a.x + ab.x * t, a.y + ab.y * t))
}
