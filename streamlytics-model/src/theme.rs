use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ModelError;

/// Dashboard color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Axis tick and legend text color.
    pub fn axis_tick_color(self) -> &'static str {
        match self {
            Theme::Light => "#000",
            Theme::Dark => "#fff",
        }
    }

    /// Fill for choropleth regions with no data.
    pub fn unknown_region_color(self) -> &'static str {
        match self {
            Theme::Light => "#001e35",
            Theme::Dark => "#ffefe4",
        }
    }

    pub fn tooltip_background(self) -> &'static str {
        match self {
            Theme::Light => "white",
            Theme::Dark => "hsl(var(--background))",
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ModelError::UnknownTheme(other.to_string())),
        }
    }
}
