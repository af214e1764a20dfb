use trackly_map::{
    data::markers::props_from_file, Color, InteractiveMap, MapProps, MarkerPreset, RenderConfig,
};

/// Standalone marker map viewer
///
/// `trackly-map-app [props.json]` opens the file; without an argument the
/// dashboard presets are shown.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = RenderConfig::from_env()?;
    let file_props = match std::env::args().nth(1) {
        Some(path) => Some(props_from_file(&path)?),
        None => None,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_title("Trackly Map"),
        ..Default::default()
    };

    eframe::run_native(
        "trackly-map-app",
        options,
        Box::new(move |_cc| Box::new(TracklyMapApp::new(config, file_props))),
    )?;

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Source {
    File,
    Preset(MarkerPreset),
}

struct TracklyMapApp {
    config: RenderConfig,
    file_props: Option<MapProps>,
    source: Source,
    props: MapProps,
    show_marker_panel: bool,
}

impl TracklyMapApp {
    fn new(config: RenderConfig, file_props: Option<MapProps>) -> Self {
        let (source, props) = match &file_props {
            Some(props) => (Source::File, props.clone()),
            None => (
                Source::Preset(MarkerPreset::Hotspots),
                MarkerPreset::Hotspots.props(),
            ),
        };

        Self {
            config,
            file_props,
            source,
            props,
            show_marker_panel: true,
        }
    }

    fn select(&mut self, source: Source) {
        if self.source == source {
            return;
        }
        self.props = match source {
            Source::Preset(preset) => preset.props(),
            Source::File => match &self.file_props {
                Some(props) => props.clone(),
                None => return,
            },
        };
        log::info!("showing {:?} ({} markers)", source, self.props.markers.len());
        self.source = source;
    }

    fn source_selector(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if self.file_props.is_some()
                && ui
                    .selectable_label(self.source == Source::File, "File")
                    .clicked()
            {
                self.select(Source::File);
            }

            for preset in MarkerPreset::ALL {
                let selected = self.source == Source::Preset(preset);
                if ui.selectable_label(selected, preset.title()).clicked() {
                    self.select(Source::Preset(preset));
                }
            }
        });
    }

    fn marker_panel(&self, ui: &mut egui::Ui) {
        ui.heading("Markers");
        ui.separator();

        let center = self.props.center;
        egui::ScrollArea::vertical().show(ui, |ui| {
            for marker in &self.props.markers {
                ui.horizontal(|ui| {
                    let swatch = Color::parse(&marker.color).unwrap_or(Color::BLACK);
                    let (rect, _) =
                        ui.allocate_exact_size(egui::Vec2::splat(12.0), egui::Sense::hover());
                    ui.painter()
                        .circle_filled(rect.center(), marker.size.radius() / 2.0, swatch);
                    ui.label(&marker.label);
                });
                ui.label(
                    egui::RichText::new(format!(
                        "{:.4}, {:.4} · {:.2} km",
                        marker.lat,
                        marker.lng,
                        marker.position().distance_to(&center) / 1000.0
                    ))
                    .small()
                    .weak(),
                );
                ui.add_space(4.0);
            }
        });
    }
}

impl eframe::App for TracklyMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_marker_panel, "Marker Panel");
                });

                ui.separator();
                self.source_selector(ui);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "Center: {:.4}, {:.4} | Zoom: {}",
                        self.props.center.lat, self.props.center.lng, self.props.zoom
                    ));
                });
            });
        });

        if self.show_marker_panel {
            egui::SidePanel::right("marker_panel")
                .resizable(true)
                .show(ctx, |ui| self.marker_panel(ui));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add(InteractiveMap::from_props(self.props.clone()).config(self.config.clone()));
        });
    }
}
