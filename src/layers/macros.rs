//! Macros to reduce boilerplate in layer implementations

/// Implements the `Layer` accessors backed by a `LayerProperties` field:
/// `id()`, `layer_type()`, `is_visible()`, `set_visible()`, `z_index()`.
///
/// Usage:
/// ```ignore
/// impl Layer for MyLayer {
///     impl_layer_trait!(properties);
///
///     fn render(&self, context: &mut RenderContext, view: &ViewState) -> Result<()> { .. }
/// }
/// ```
#[macro_export]
macro_rules! impl_layer_trait {
    ($properties_field:ident) => {
        fn id(&self) -> &str {
            &self.$properties_field.id
        }

        fn layer_type(&self) -> $crate::layers::base::LayerType {
            self.$properties_field.layer_type
        }

        fn is_visible(&self) -> bool {
            self.$properties_field.visible
        }

        fn set_visible(&mut self, visible: bool) {
            self.$properties_field.visible = visible;
        }

        fn z_index(&self) -> i32 {
            self.$properties_field.z_index
        }
    };
}
