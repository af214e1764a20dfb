//! The marker map render pass.

use serde::{Deserialize, Serialize};

use crate::{
    core::{
        config::RenderConfig, constants::DEFAULT_ZOOM, geo::LatLng, height::HeightHint,
        viewport::ViewState,
    },
    layers::{
        base::LayerStack,
        grid::GridLayer,
        marker::{Marker, MarkerLayer, ProjectedMarker},
    },
    rendering::{
        context::{DrawCommand, RenderContext},
        surface::Surface,
    },
    MapError, Result,
};

fn default_zoom() -> i32 {
    DEFAULT_ZOOM
}

/// Inputs of one render pass.
///
/// Deserializes from the same shape a page hands the map component:
/// `{ "markers": [...], "center": { "lat", "lng" }, "zoom": 12, "height": "500px" }`,
/// every field but `markers` optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapProps {
    pub markers: Vec<Marker>,
    #[serde(default)]
    pub center: LatLng,
    /// Accepted and carried into the view; the default projection ignores it
    #[serde(default = "default_zoom")]
    pub zoom: i32,
    #[serde(default)]
    pub height: HeightHint,
}

impl MapProps {
    pub fn new(markers: Vec<Marker>) -> Self {
        Self {
            markers,
            center: LatLng::default(),
            zoom: DEFAULT_ZOOM,
            height: HeightHint::default(),
        }
    }
}

impl Default for MapProps {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// What a render pass painted
#[derive(Debug, Clone, PartialEq)]
pub struct RenderReport {
    pub view: ViewState,
    /// One entry per marker, in paint order
    pub glyphs: Vec<ProjectedMarker>,
    pub commands: usize,
}

/// Everything that decides the pixels of a frame
#[derive(Debug, Clone, PartialEq)]
struct FrameKey {
    markers: Vec<Marker>,
    center: LatLng,
    zoom: i32,
    size: (u32, u32),
}

/// Projects markers and repaints a surface.
///
/// Every pass is independent: the frame is rebuilt from the props and the
/// surface's current container size. The only thing kept between passes is
/// the key of the last frame, used by [`MarkerMap::render_if_changed`].
pub struct MarkerMap {
    config: RenderConfig,
    context: RenderContext,
    last_frame: Option<FrameKey>,
}

impl MarkerMap {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            context: RenderContext::new(0, 0),
            last_frame: None,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Commands of the last frame
    pub fn frame(&self) -> &[DrawCommand] {
        self.context.get_drawing_queue()
    }

    pub fn view_state(&self, props: &MapProps, width: u32, height: u32) -> ViewState {
        ViewState::new(props.center, props.zoom, width, height)
            .with_projection(self.config.projection)
            .with_scale(self.config.scale_px_per_degree)
    }

    /// Clear and repaint `surface` from `props`.
    ///
    /// Fails with [`MapError::SurfaceNotReady`] when the surface has no
    /// container yet, and with [`MapError::Validation`] when any marker is
    /// malformed; in both cases the surface is left untouched.
    pub fn render(&mut self, props: &MapProps, surface: &mut dyn Surface) -> Result<RenderReport> {
        let (width, height) = surface.container_size().ok_or(MapError::SurfaceNotReady)?;
        let view = self.view_state(props, width, height);
        let markers = MarkerLayer::new(&props.markers, &self.config.style)?;
        let glyphs = markers.project(&view);

        surface.resize(width, height)?;

        let mut stack = LayerStack::new();
        stack.push(Box::new(GridLayer::new(&self.config.style)));
        stack.push(Box::new(markers));

        self.context.begin_frame(width, height);
        stack.render(&mut self.context, &view)?;
        surface.present(self.context.get_drawing_queue())?;

        log::debug!(
            "rendered {} markers on {}x{} surface ({} commands)",
            props.markers.len(),
            width,
            height,
            self.context.get_drawing_queue().len()
        );

        self.last_frame = Some(FrameKey {
            markers: props.markers.clone(),
            center: props.center,
            zoom: props.zoom,
            size: (width, height),
        });

        Ok(RenderReport {
            view,
            glyphs,
            commands: self.context.get_drawing_queue().len(),
        })
    }

    /// Repaint only when markers, center, zoom or the container size changed
    /// since the last successful pass. Returns `None` when nothing changed.
    pub fn render_if_changed(
        &mut self,
        props: &MapProps,
        surface: &mut dyn Surface,
    ) -> Result<Option<RenderReport>> {
        let size = surface.container_size().ok_or(MapError::SurfaceNotReady)?;
        if let Some(last) = &self.last_frame {
            let unchanged = last.size == size
                && last.center == props.center
                && last.zoom == props.zoom
                && last.markers == props.markers;
            if unchanged {
                return Ok(None);
            }
        }
        self.render(props, surface).map(Some)
    }
}

impl Default for MarkerMap {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::geo::Point, layers::marker::MarkerSize, rendering::surface::RecordingSurface,
    };

    fn centro() -> Marker {
        Marker::new(19.4326, -99.1332, "Centro", "#8B1538").with_size(MarkerSize::Large)
    }

    #[test]
    fn test_props_defaults_from_json() {
        let props: MapProps = serde_json::from_str(r#"{ "markers": [] }"#).unwrap();
        assert_eq!(props.center, LatLng::new(19.4326, -99.1332));
        assert_eq!(props.zoom, 12);
        assert_eq!(props.height, HeightHint::Px(500.0));
    }

    #[test]
    fn test_render_reports_glyphs() {
        let mut map = MarkerMap::default();
        let mut surface = RecordingSurface::new(400, 400);
        let report = map.render(&MapProps::new(vec![centro()]), &mut surface).unwrap();

        assert_eq!(surface.size(), (400, 400));
        assert_eq!(report.glyphs.len(), 1);
        assert_eq!(report.glyphs[0].center, Point::new(200.0, 200.0));
        assert_eq!(report.glyphs[0].radius, 12.0);
        assert_eq!(report.glyphs[0].label_anchor, Point::new(200.0, 183.0));
        assert_eq!(report.commands, surface.frame().len());
    }

    #[test]
    fn test_unmounted_surface_is_an_error() {
        let mut map = MarkerMap::default();
        let mut surface = RecordingSurface::unmounted();
        let err = map.render(&MapProps::default(), &mut surface).unwrap_err();
        assert!(matches!(err, MapError::SurfaceNotReady));
        assert_eq!(surface.frames_presented(), 0);
    }

    #[test]
    fn test_invalid_marker_leaves_surface_untouched() {
        let mut map = MarkerMap::default();
        let mut surface = RecordingSurface::new(100, 100);
        let props = MapProps::new(vec![centro(), Marker::new(f64::NAN, 0.0, "?", "#000")]);

        assert!(matches!(
            map.render(&props, &mut surface),
            Err(MapError::Validation { index: 1, .. })
        ));
        assert_eq!(surface.frames_presented(), 0);
        assert_eq!(surface.size(), (0, 0));
    }

    #[test]
    fn test_surface_resized_every_pass() {
        let mut map = MarkerMap::default();
        let mut surface = RecordingSurface::new(400, 400);
        let props = MapProps::new(vec![centro()]);
        map.render(&props, &mut surface).unwrap();

        surface.set_container_size(Some((300, 200)));
        let report = map.render(&props, &mut surface).unwrap();
        assert_eq!(surface.size(), (300, 200));
        assert_eq!(report.glyphs[0].center, Point::new(150.0, 100.0));
    }

    #[test]
    fn test_render_if_changed() {
        let mut map = MarkerMap::default();
        let mut surface = RecordingSurface::new(400, 400);
        let mut props = MapProps::new(vec![centro()]);

        assert!(map.render_if_changed(&props, &mut surface).unwrap().is_some());
        assert!(map.render_if_changed(&props, &mut surface).unwrap().is_none());

        props.zoom = 13;
        assert!(map.render_if_changed(&props, &mut surface).unwrap().is_some());

        surface.set_container_size(Some((500, 400)));
        assert!(map.render_if_changed(&props, &mut surface).unwrap().is_some());

        props.markers.push(Marker::new(19.42, -99.12, "Zona Sur", "#E91E63"));
        assert!(map.render_if_changed(&props, &mut surface).unwrap().is_some());
        assert_eq!(surface.frames_presented(), 4);
    }
}
