use egui::{Align2, Color32, FontId, Response, Sense, Ui, Vec2, Widget};

use crate::{
    core::{
        config::RenderConfig,
        geo::{LatLng, Point},
        height::HeightHint,
        map::{MapProps, MarkerMap},
    },
    layers::marker::Marker,
    rendering::painter::EguiSurface,
};

/// Immediate-mode marker map widget.
///
/// Takes the available width and the height hint's height, and repaints the
/// whole map every frame.
///
/// ```ignore
/// ui.add(InteractiveMap::new(MarkerPreset::Mobility.markers()));
///
/// ui.add(
///     InteractiveMap::new(markers)
///         .center(19.4326, -99.1332)
///         .zoom(12)
///         .height(HeightHint::Px(320.0)),
/// );
/// ```
#[derive(Clone)]
pub struct InteractiveMap {
    pub props: MapProps,
    pub config: RenderConfig,
    /// Show the coordinates under the pointer
    pub show_coordinates: bool,
}

impl InteractiveMap {
    pub fn new(markers: Vec<Marker>) -> Self {
        Self::from_props(MapProps::new(markers))
    }

    pub fn from_props(props: MapProps) -> Self {
        Self {
            props,
            config: RenderConfig::default(),
            show_coordinates: true,
        }
    }

    pub fn center(mut self, lat: f64, lng: f64) -> Self {
        self.props.center = LatLng::new(lat, lng);
        self
    }

    pub fn zoom(mut self, zoom: i32) -> Self {
        self.props.zoom = zoom;
        self
    }

    pub fn height(mut self, height: HeightHint) -> Self {
        self.props.height = height;
        self
    }

    pub fn config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn show_coordinates(mut self, show: bool) -> Self {
        self.show_coordinates = show;
        self
    }
}

impl Widget for InteractiveMap {
    fn ui(self, ui: &mut Ui) -> Response {
        let desired_size = Vec2::new(
            ui.available_width(),
            self.props.height.resolve(ui.available_height()),
        );
        let (rect, response) = ui.allocate_exact_size(desired_size, Sense::hover());
        if !ui.is_rect_visible(rect) {
            return response;
        }

        let painter = ui.painter_at(rect);
        let mut map = MarkerMap::new(self.config);
        let mut surface = EguiSurface::new(&painter, rect);

        if let Err(err) = map.render(&self.props, &mut surface) {
            log::warn!("map render skipped: {err}");
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                err.to_string(),
                FontId::proportional(12.0),
                Color32::DARK_RED,
            );
            return response;
        }

        if self.show_coordinates {
            if let Some(pos) = response.hover_pos() {
                let view = map.view_state(&self.props, rect.width() as u32, rect.height() as u32);
                let lat_lng = view.pixel_to_lat_lng(&Point::new(
                    (pos.x - rect.min.x) as f64,
                    (pos.y - rect.min.y) as f64,
                ));
                painter.text(
                    rect.left_bottom() + Vec2::new(6.0, -6.0),
                    Align2::LEFT_BOTTOM,
                    format!("{:.4}, {:.4}", lat_lng.lat, lat_lng.lng),
                    FontId::monospace(11.0),
                    Color32::from_gray(90),
                );
            }
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::presets::MarkerPreset;

    #[test]
    fn test_map_widget_defaults() {
        let map = InteractiveMap::new(Vec::new());
        assert_eq!(map.props.center, LatLng::new(19.4326, -99.1332));
        assert_eq!(map.props.zoom, 12);
        assert_eq!(map.props.height, HeightHint::Px(500.0));
        assert!(map.show_coordinates);
    }

    #[test]
    fn test_map_widget_builder_pattern() {
        let map = InteractiveMap::new(MarkerPreset::Hotspots.markers())
            .center(19.43, -99.14)
            .zoom(14)
            .height(HeightHint::Px(320.0))
            .show_coordinates(false);

        assert_eq!(map.props.markers.len(), 3);
        assert_eq!(map.props.center, LatLng::new(19.43, -99.14));
        assert_eq!(map.props.zoom, 14);
        assert_eq!(map.props.height, HeightHint::Px(320.0));
        assert!(!map.show_coordinates);
    }

    #[test]
    fn test_widget_allocates_height_hint() {
        let ctx = egui::Context::default();
        let mut height = 0.0;

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let response = ui.add(InteractiveMap::from_props(MarkerPreset::Hotspots.props()));
                height = response.rect.height();
            });
        });

        assert_eq!(height, 320.0);
    }
}
