//! Browser canvas backend and the JS entry point.

use std::f64::consts::TAU;

use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::{
    core::map::{MapProps, MarkerMap},
    rendering::{context::DrawCommand, surface::Surface},
    MapError, Result,
};

fn js_error(err: JsValue) -> MapError {
    MapError::Render(format!("{err:?}"))
}

/// Canvas element sized to the element it is laid out in
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas }
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn context_2d(&self) -> Result<CanvasRenderingContext2d> {
        self.canvas
            .get_context("2d")
            .map_err(js_error)?
            .ok_or(MapError::SurfaceNotReady)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| MapError::SurfaceNotReady)
    }
}

impl Surface for CanvasSurface {
    fn container_size(&self) -> Option<(u32, u32)> {
        if !self.canvas.is_connected() {
            return None;
        }
        let width = self.canvas.offset_width();
        let height = self.canvas.offset_height();
        Some((width.max(0) as u32, height.max(0) as u32))
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        Ok(())
    }

    fn present(&mut self, commands: &[DrawCommand]) -> Result<()> {
        let ctx = self.context_2d()?;
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        ctx.clear_rect(0.0, 0.0, width, height);

        for command in commands {
            match command {
                DrawCommand::Clear { color } => {
                    ctx.set_fill_style(&JsValue::from_str(&color.to_css()));
                    ctx.fill_rect(0.0, 0.0, width, height);
                }
                DrawCommand::FillRect { min, max, color } => {
                    ctx.set_fill_style(&JsValue::from_str(&color.to_css()));
                    ctx.fill_rect(min.x, min.y, max.x - min.x, max.y - min.y);
                }
                DrawCommand::Line { from, to, style } => {
                    ctx.set_stroke_style(&JsValue::from_str(&style.color.to_css()));
                    ctx.set_line_width(style.width as f64);
                    ctx.begin_path();
                    ctx.move_to(from.x, from.y);
                    ctx.line_to(to.x, to.y);
                    ctx.stroke();
                }
                DrawCommand::FillCircle { center, style } => {
                    ctx.set_fill_style(&JsValue::from_str(&style.fill_color.to_css()));
                    ctx.begin_path();
                    ctx.arc(center.x, center.y, style.radius as f64, 0.0, TAU)
                        .map_err(js_error)?;
                    ctx.fill();
                }
                DrawCommand::StrokeCircle {
                    center,
                    radius,
                    style,
                } => {
                    ctx.set_stroke_style(&JsValue::from_str(&style.color.to_css()));
                    ctx.set_line_width(style.width as f64);
                    ctx.begin_path();
                    ctx.arc(center.x, center.y, *radius as f64, 0.0, TAU)
                        .map_err(js_error)?;
                    ctx.stroke();
                }
                DrawCommand::Text {
                    position,
                    text,
                    style,
                } => {
                    ctx.set_fill_style(&JsValue::from_str(&style.color.to_css()));
                    ctx.set_font(&style.font_css());
                    ctx.set_text_align(style.align.as_css());
                    ctx.fill_text(text, position.x, position.y)
                        .map_err(js_error)?;
                }
            }
        }
        Ok(())
    }
}

/// Render a marker map onto `canvas`.
///
/// `props_json` has the shape of [`MapProps`]; only `markers` is required.
/// The canvas is resized to its laid-out size before painting.
#[wasm_bindgen]
pub fn render_interactive_map(canvas: HtmlCanvasElement, props_json: &str) -> std::result::Result<(), JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let props: MapProps =
        serde_json::from_str(props_json).map_err(|err| JsValue::from_str(&err.to_string()))?;
    let mut surface = CanvasSurface::new(canvas);
    let mut map = MarkerMap::default();

    match map.render(&props, &mut surface) {
        Ok(_) => Ok(()),
        Err(MapError::SurfaceNotReady) => {
            // Not attached yet; the host calls again once the canvas is mounted
            log::debug!("canvas not mounted, render skipped");
            Ok(())
        }
        Err(err) => {
            web_sys::console::error_1(&JsValue::from_str(&err.to_string()));
            Err(JsValue::from_str(&err.to_string()))
        }
    }
}
