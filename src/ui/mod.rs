pub mod widget;

pub use widget::InteractiveMap;

use crate::core::map::MapProps;

pub trait UiMapExt {
    fn interactive_map(&mut self, props: MapProps) -> egui::Response;
}

impl UiMapExt for egui::Ui {
    fn interactive_map(&mut self, props: MapProps) -> egui::Response {
        self.add(InteractiveMap::from_props(props))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::presets::MarkerPreset;

    #[test]
    fn test_ui_extension_adds_map() {
        let ctx = egui::Context::default();
        let mut rect = egui::Rect::NOTHING;

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                rect = ui.interactive_map(MarkerPreset::Roi.props()).rect;
            });
        });

        assert_eq!(rect.height(), 500.0);
        assert!(rect.width() > 0.0);
    }
}
