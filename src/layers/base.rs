use crate::{core::viewport::ViewState, rendering::context::RenderContext, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerType {
    Background,
    Marker,
}

impl std::fmt::Display for LayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerType::Background => write!(f, "background"),
            LayerType::Marker => write!(f, "marker"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayerProperties {
    pub id: String,
    pub layer_type: LayerType,
    pub z_index: i32,
    pub visible: bool,
}

impl LayerProperties {
    pub fn new(id: impl Into<String>, layer_type: LayerType) -> Self {
        Self {
            id: id.into(),
            layer_type,
            z_index: 0,
            visible: true,
        }
    }

    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }
}

/// Something that paints part of a frame
pub trait Layer {
    fn id(&self) -> &str;

    fn layer_type(&self) -> LayerType;

    fn is_visible(&self) -> bool;

    fn set_visible(&mut self, visible: bool);

    fn z_index(&self) -> i32;

    /// Record this layer's primitives for the given view
    fn render(&self, context: &mut RenderContext, view: &ViewState) -> Result<()>;
}

/// Layers of one frame, painted bottom to top by z-index.
/// Equal z-indices keep insertion order.
#[derive(Default)]
pub struct LayerStack<'a> {
    layers: Vec<Box<dyn Layer + 'a>>,
}

impl<'a> LayerStack<'a> {
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    pub fn push(&mut self, layer: Box<dyn Layer + 'a>) {
        let z_index = layer.z_index();
        let insert_pos = self
            .layers
            .iter()
            .position(|l| l.z_index() > z_index)
            .unwrap_or(self.layers.len());
        self.layers.insert(insert_pos, layer);
    }

    pub fn ids(&self) -> Vec<&str> {
        self.layers.iter().map(|l| l.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Renders all visible layers in order
    pub fn render(&self, context: &mut RenderContext, view: &ViewState) -> Result<()> {
        for layer in self.layers.iter().filter(|l| l.is_visible()) {
            log::trace!("rendering {} layer {}", layer.layer_type(), layer.id());
            layer.render(context, view)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::geo::Point, rendering::color::Color, LatLng};

    struct SolidLayer {
        properties: LayerProperties,
        color: Color,
    }

    impl Layer for SolidLayer {
        crate::impl_layer_trait!(properties);

        fn render(&self, context: &mut RenderContext, _view: &ViewState) -> Result<()> {
            context.fill_rect(Point::new(0.0, 0.0), Point::new(1.0, 1.0), self.color);
            Ok(())
        }
    }

    fn solid(id: &str, z: i32, color: Color) -> Box<SolidLayer> {
        Box::new(SolidLayer {
            properties: LayerProperties::new(id, LayerType::Background).with_z_index(z),
            color,
        })
    }

    #[test]
    fn test_layer_properties() {
        let props = LayerProperties::new("markers", LayerType::Marker);
        assert_eq!(props.id, "markers");
        assert_eq!(props.layer_type, LayerType::Marker);
        assert_eq!(props.z_index, 0);
        assert!(props.visible);
    }

    #[test]
    fn test_stack_orders_by_z_index_then_insertion() {
        let mut stack = LayerStack::new();
        stack.push(solid("top", 10, Color::BLACK));
        stack.push(solid("bottom", 0, Color::WHITE));
        stack.push(solid("bottom-2", 0, Color::WHITE));

        assert_eq!(stack.ids(), vec!["bottom", "bottom-2", "top"]);
    }

    #[test]
    fn test_hidden_layers_are_skipped() {
        let mut hidden = solid("hidden", 0, Color::BLACK);
        hidden.set_visible(false);

        let mut stack = LayerStack::new();
        stack.push(hidden);
        stack.push(solid("shown", 1, Color::WHITE));

        let mut ctx = RenderContext::new(1, 1);
        let view = ViewState::new(LatLng::default(), 12, 1, 1);
        stack.render(&mut ctx, &view).unwrap();
        assert_eq!(ctx.get_drawing_queue().len(), 1);
    }

    #[test]
    fn test_layer_type_display() {
        assert_eq!(LayerType::Background.to_string(), "background");
        assert_eq!(LayerType::Marker.to_string(), "marker");
    }
}
