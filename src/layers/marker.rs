use serde::{Deserialize, Serialize};

use crate::{
    core::{config::MapStyle, constants, geo::LatLng, geo::Point, viewport::ViewState},
    layers::base::{Layer, LayerProperties, LayerType},
    rendering::{
        color::Color,
        context::{CircleStyle, LineStyle, RenderContext, TextStyle},
    },
    MapError, Result,
};

/// Size class of a marker glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl MarkerSize {
    /// Glyph radius in pixels under the default style
    pub fn radius(&self) -> f32 {
        match self {
            MarkerSize::Small => constants::MARKER_RADIUS_SMALL,
            MarkerSize::Medium => constants::MARKER_RADIUS_MEDIUM,
            MarkerSize::Large => constants::MARKER_RADIUS_LARGE,
        }
    }
}

/// A labeled point of interest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub lat: f64,
    pub lng: f64,
    pub label: String,
    /// CSS color, usually hex (`#8B1538`)
    pub color: String,
    #[serde(default)]
    pub size: MarkerSize,
}

impl Marker {
    pub fn new(lat: f64, lng: f64, label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            lat,
            lng,
            label: label.into(),
            color: color.into(),
            size: MarkerSize::default(),
        }
    }

    pub fn with_size(mut self, size: MarkerSize) -> Self {
        self.size = size;
        self
    }

    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }

    /// Checks coordinates and color, returning the parsed fill color.
    /// `index` is the marker's position in its list, used in the error.
    pub fn validate(&self, index: usize) -> Result<Color> {
        let invalid = |reason: String| MapError::Validation {
            index,
            label: self.label.clone(),
            reason,
        };

        if !self.lat.is_finite() || !self.lng.is_finite() {
            return Err(invalid(format!(
                "coordinates must be finite, got ({}, {})",
                self.lat, self.lng
            )));
        }
        if !self.position().is_valid() {
            return Err(invalid(format!(
                "coordinates out of range, got ({}, {})",
                self.lat, self.lng
            )));
        }
        Color::parse(&self.color).map_err(|_| invalid(format!("bad color {:?}", self.color)))
    }
}

/// Where a marker glyph lands on the surface
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedMarker {
    pub label: String,
    pub center: Point,
    pub radius: f32,
    /// Baseline anchor of the label
    pub label_anchor: Point,
}

/// Paints markers in input order, so later markers end up on top
pub struct MarkerLayer<'a> {
    properties: LayerProperties,
    markers: &'a [Marker],
    fills: Vec<Color>,
    style: &'a MapStyle,
}

impl<'a> MarkerLayer<'a> {
    /// Validates every marker up front; nothing is drawn for an invalid list
    pub fn new(markers: &'a [Marker], style: &'a MapStyle) -> Result<Self> {
        let fills = markers
            .iter()
            .enumerate()
            .map(|(index, marker)| marker.validate(index))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            properties: LayerProperties::new("markers", LayerType::Marker).with_z_index(1),
            markers,
            fills,
            style,
        })
    }

    pub fn project(&self, view: &ViewState) -> Vec<ProjectedMarker> {
        self.markers
            .iter()
            .map(|marker| {
                let center = view.lat_lng_to_pixel(&marker.position());
                let radius = self.style.radius_for(marker.size);
                ProjectedMarker {
                    label: marker.label.clone(),
                    center,
                    radius,
                    label_anchor: Point::new(
                        center.x,
                        center.y - (radius + self.style.label_gap) as f64,
                    ),
                }
            })
            .collect()
    }
}

impl Layer for MarkerLayer<'_> {
    crate::impl_layer_trait!(properties);

    fn render(&self, context: &mut RenderContext, view: &ViewState) -> Result<()> {
        let style = self.style;
        let offset = Point::new(style.shadow_offset as f64, style.shadow_offset as f64);
        let outline = LineStyle {
            color: style.marker_stroke_color,
            width: style.marker_stroke_width,
        };
        let text = TextStyle {
            color: style.label_color,
            font_size: style.label_font_size,
            font_family: style.label_font_family.clone(),
            align: style.label_align,
        };

        for (glyph, fill) in self.project(view).into_iter().zip(&self.fills) {
            log::trace!("marker {:?} at {:?}", glyph.label, glyph.center);

            context.fill_circle(
                glyph.center.add(&offset),
                &CircleStyle {
                    fill_color: style.shadow_color,
                    radius: glyph.radius,
                },
            );
            context.fill_circle(
                glyph.center,
                &CircleStyle {
                    fill_color: *fill,
                    radius: glyph.radius,
                },
            );
            context.stroke_circle(glyph.center, glyph.radius, &outline);
            context.text(glyph.label_anchor, glyph.label, &text);
        }
        Ok(())
    }
}
