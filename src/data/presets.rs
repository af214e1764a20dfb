//! Marker sets shown by the Trackly dashboards.

use std::fmt;
use std::str::FromStr;

use crate::{
    core::{height::HeightHint, map::MapProps},
    layers::marker::{Marker, MarkerSize},
    MapError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerPreset {
    /// Trackly hotspot map
    Hotspots,
    Mobility,
    Sustainability,
    Roi,
}

impl MarkerPreset {
    pub const ALL: [MarkerPreset; 4] = [
        MarkerPreset::Hotspots,
        MarkerPreset::Mobility,
        MarkerPreset::Sustainability,
        MarkerPreset::Roi,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MarkerPreset::Hotspots => "hotspots",
            MarkerPreset::Mobility => "mobility",
            MarkerPreset::Sustainability => "sustainability",
            MarkerPreset::Roi => "roi",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MarkerPreset::Hotspots => "Hotspots y capas urbanas",
            MarkerPreset::Mobility => "Movilidad",
            MarkerPreset::Sustainability => "Sustentabilidad",
            MarkerPreset::Roi => "Analítica ROI",
        }
    }

    pub fn markers(&self) -> Vec<Marker> {
        use MarkerSize::*;

        let rows: &[(f64, f64, &str, &str, MarkerSize)] = match self {
            MarkerPreset::Hotspots => &[
                (19.4326, -99.1332, "Centro Histórico", "#7F56D9", Large),
                (19.4207, -99.1639, "Zona Roma", "#F97316", Medium),
                (19.425, -99.15, "Corredor Reforma", "#22C55E", Medium),
            ],
            MarkerPreset::Mobility => &[
                (19.4326, -99.1332, "Centro", "#8B1538", Large),
                (19.442, -99.145, "Zona Norte", "#C41E3A", Medium),
                (19.42, -99.12, "Zona Sur", "#E91E63", Medium),
                (19.438, -99.128, "Ruta 1", "#F06292", Small),
                (19.428, -99.138, "Ruta 2", "#F06292", Small),
            ],
            MarkerPreset::Sustainability => &[
                (19.4326, -99.1332, "Zona Verde", "#22c55e", Large),
                (19.442, -99.145, "Reciclaje", "#16a34a", Medium),
                (19.42, -99.12, "Transporte Eco", "#15803d", Medium),
                (19.438, -99.128, "Mercado Local", "#84cc16", Small),
                (19.428, -99.138, "Energía Solar", "#eab308", Small),
            ],
            MarkerPreset::Roi => &[
                (19.4326, -99.1332, "Alta Oportunidad", "#16a34a", Large),
                (19.442, -99.145, "Media-Alta", "#84cc16", Large),
                (19.42, -99.12, "Media", "#eab308", Medium),
                (19.438, -99.128, "Cafetería Rec.", "#8B1538", Medium),
                (19.428, -99.138, "Retail Rec.", "#C41E3A", Medium),
                (19.435, -99.14, "Zona Comercial", "#E91E63", Small),
            ],
        };

        rows.iter()
            .map(|&(lat, lng, label, color, size)| Marker::new(lat, lng, label, color).with_size(size))
            .collect()
    }

    /// Props the dashboard page renders this preset with
    pub fn props(&self) -> MapProps {
        let mut props = MapProps::new(self.markers());
        props.height = match self {
            MarkerPreset::Hotspots => HeightHint::Px(320.0),
            _ => HeightHint::Px(500.0),
        };
        props
    }
}

impl fmt::Display for MarkerPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MarkerPreset {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MarkerPreset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MapError::Config(format!("unknown marker preset {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_preset_is_valid() {
        for preset in MarkerPreset::ALL {
            let markers = preset.markers();
            assert!(!markers.is_empty(), "{preset}");
            for (index, marker) in markers.iter().enumerate() {
                marker.validate(index).unwrap();
            }
        }
    }

    #[test]
    fn test_presets_center_on_first_marker() {
        for preset in MarkerPreset::ALL {
            let props = preset.props();
            assert_eq!(props.markers[0].position(), props.center, "{preset}");
            assert_eq!(props.markers[0].size, MarkerSize::Large, "{preset}");
        }
    }

    #[test]
    fn test_hotspots_use_shorter_map() {
        assert_eq!(MarkerPreset::Hotspots.props().height, HeightHint::Px(320.0));
        assert_eq!(MarkerPreset::Roi.props().height, HeightHint::Px(500.0));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Mobility".parse::<MarkerPreset>().unwrap(), MarkerPreset::Mobility);
        assert_eq!(" roi ".parse::<MarkerPreset>().unwrap(), MarkerPreset::Roi);
        assert!("traffic".parse::<MarkerPreset>().is_err());
    }
}
