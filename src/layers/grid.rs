use crate::{
    core::{config::MapStyle, geo::Point, viewport::ViewState},
    layers::base::{Layer, LayerProperties, LayerType},
    rendering::context::{LineStyle, RenderContext},
    Result,
};

/// Background fill plus a uniform grid anchored at the surface origin
pub struct GridLayer<'a> {
    properties: LayerProperties,
    style: &'a MapStyle,
}

impl<'a> GridLayer<'a> {
    pub fn new(style: &'a MapStyle) -> Self {
        Self {
            properties: LayerProperties::new("background", LayerType::Background),
            style,
        }
    }
}

impl Layer for GridLayer<'_> {
    crate::impl_layer_trait!(properties);

    fn render(&self, context: &mut RenderContext, view: &ViewState) -> Result<()> {
        let width = view.surface_width_px;
        let height = view.surface_height_px;
        let spacing = self.style.grid_spacing_px.max(1) as usize;
        let line = LineStyle {
            color: self.style.grid_color,
            width: self.style.grid_line_width,
        };

        context.clear(self.style.background_color);

        for x in (0..width).step_by(spacing) {
            context.line(
                Point::new(x as f64, 0.0),
                Point::new(x as f64, height as f64),
                &line,
            );
        }
        for y in (0..height).step_by(spacing) {
            context.line(
                Point::new(0.0, y as f64),
                Point::new(width as f64, y as f64),
                &line,
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{rendering::context::DrawCommand, LatLng};

    #[test]
    fn test_grid_lines_every_50px() {
        let style = MapStyle::default();
        let layer = GridLayer::new(&style);
        let view = ViewState::new(LatLng::default(), 12, 120, 60);
        let mut ctx = RenderContext::new(120, 60);

        layer.render(&mut ctx, &view).unwrap();
        let queue = ctx.get_drawing_queue();

        assert_eq!(
            queue[0],
            DrawCommand::Clear {
                color: style.background_color
            }
        );

        let lines: Vec<(Point, Point)> = queue
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect();

        // x = 0, 50, 100 and y = 0, 50
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[2], (Point::new(100.0, 0.0), Point::new(100.0, 60.0)));
        assert_eq!(lines[4], (Point::new(0.0, 50.0), Point::new(120.0, 50.0)));
    }

    #[test]
    fn test_empty_surface_only_clears() {
        let style = MapStyle::default();
        let view = ViewState::new(LatLng::default(), 12, 0, 0);
        let mut ctx = RenderContext::new(0, 0);

        GridLayer::new(&style).render(&mut ctx, &view).unwrap();
        assert_eq!(ctx.get_drawing_queue().len(), 1);
    }
}
