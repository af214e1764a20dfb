use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{MapError, Result};

/// Display height of the map container, as a CSS-style length.
///
/// Only sizes the container; the projection scale does not depend on it.
/// Lengths other than px and percentages are kept verbatim for hosts that
/// understand CSS; native layouts fall back to the default height for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HeightHint {
    /// `"320px"` or a bare number
    Px(f32),
    /// `"50%"` of the parent's height
    Percent(f32),
    /// Any other CSS length, e.g. `"24rem"` or `"calc(100% - 2rem)"`
    Css(String),
}

impl HeightHint {
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let invalid = || MapError::InvalidHeight(input.to_string());

        let (number, hint): (&str, fn(f32) -> HeightHint) =
            if let Some(px) = trimmed.strip_suffix("px") {
                (px, HeightHint::Px)
            } else if let Some(pct) = trimmed.strip_suffix('%') {
                (pct, HeightHint::Percent)
            } else {
                (trimmed, HeightHint::Px)
            };

        if trimmed.is_empty() {
            return Err(invalid());
        }

        match number.trim().parse::<f32>() {
            Ok(value) if value.is_finite() && value >= 0.0 => Ok(hint(value)),
            Ok(_) => Err(invalid()),
            Err(_) => Ok(HeightHint::Css(trimmed.to_string())),
        }
    }

    /// Height in pixels inside a parent of `parent_height_px`
    pub fn resolve(&self, parent_height_px: f32) -> f32 {
        match self {
            HeightHint::Px(px) => *px,
            HeightHint::Percent(pct) => parent_height_px * pct / 100.0,
            HeightHint::Css(_) => HeightHint::default().resolve(parent_height_px),
        }
    }
}

impl Default for HeightHint {
    fn default() -> Self {
        HeightHint::Px(500.0)
    }
}

impl fmt::Display for HeightHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeightHint::Px(px) => write!(f, "{px}px"),
            HeightHint::Percent(pct) => write!(f, "{pct}%"),
            HeightHint::Css(css) => f.write_str(css),
        }
    }
}

impl FromStr for HeightHint {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HeightHint {
    type Error = MapError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<HeightHint> for String {
    fn from(hint: HeightHint) -> Self {
        hint.to_string()
    }
}
