use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ModelError;

/// Which half of the catalog a request or a dashboard tab refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MediaKind {
    /// Feature films
    #[default]
    Movies,
    /// Episodic series
    Series,
}

impl MediaKind {
    pub const ALL: [MediaKind; 2] = [MediaKind::Movies, MediaKind::Series];

    /// Path segment used by the statistics API.
    pub fn as_path_segment(&self) -> &'static str {
        match self {
            MediaKind::Movies => "movies",
            MediaKind::Series => "series",
        }
    }

    pub fn other(&self) -> MediaKind {
        match self {
            MediaKind::Movies => MediaKind::Series,
            MediaKind::Series => MediaKind::Movies,
        }
    }
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_path_segment())
    }
}

impl FromStr for MediaKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "movies" | "movie" => Ok(MediaKind::Movies),
            "series" | "serie" | "tv" => Ok(MediaKind::Series),
            other => Err(ModelError::UnknownMediaKind(other.to_string())),
        }
    }
}
