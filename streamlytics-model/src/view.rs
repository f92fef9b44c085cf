//! Chart-ready rows handed to rendering components.

/// One slice of a pie chart.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistributionEntry {
    pub name: String,
    pub value: u64,
}

impl DistributionEntry {
    pub fn new(name: impl Into<String>, value: u64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// One region of a choropleth layer, keyed by country code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChoroplethEntry {
    pub id: String,
    pub value: u64,
}

impl From<DistributionEntry> for ChoroplethEntry {
    fn from(entry: DistributionEntry) -> Self {
        Self {
            id: entry.name,
            value: entry.value,
        }
    }
}

/// One bar of the rating chart. `rating` carries two decimals.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RatingEntry {
    pub country: String,
    pub rating: f64,
    pub count: u64,
}

/// One x-axis tick of the yearly trend lines.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YearlyPoint {
    pub year: String,
    pub movies: u64,
    pub series: u64,
}

impl YearlyPoint {
    pub fn value_for(&self, kind: crate::MediaKind) -> u64 {
        match kind {
            crate::MediaKind::Movies => self.movies,
            crate::MediaKind::Series => self.series,
        }
    }
}

/// Closed `[min, max]` range for a color scale.
///
/// Both bounds are always finite and `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "[f64; 2]", from = "[f64; 2]"))]
pub struct NumericDomain {
    pub min: f64,
    pub max: f64,
}

impl NumericDomain {
    pub const EMPTY: NumericDomain = NumericDomain { min: 0.0, max: 0.0 };

    pub fn as_array(&self) -> [f64; 2] {
        [self.min, self.max]
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl From<NumericDomain> for [f64; 2] {
    fn from(domain: NumericDomain) -> Self {
        domain.as_array()
    }
}

impl From<[f64; 2]> for NumericDomain {
    fn from([a, b]: [f64; 2]) -> Self {
        NumericDomain {
            min: a.min(b),
            max: a.max(b),
        }
    }
}
