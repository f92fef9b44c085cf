use streamlytics_model::{
    ChoroplethEntry, Dimension, DistributionResponse, MediaKind, NumericDomain,
};

use super::{LoadState, MediaPair, ViewSlot};
use crate::api::StatsApi;
use crate::distribution::build_choropleth;
use crate::domain::numeric_domain;
use crate::error::Result;

/// Regions of one world map and the color scale bounds over them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChoroplethLayer {
    pub entries: Vec<ChoroplethEntry>,
    pub domain: NumericDomain,
}

impl From<DistributionResponse> for ChoroplethLayer {
    fn from(response: DistributionResponse) -> Self {
        let entries = build_choropleth(&response.data);
        // u64 counts convert exactly below 2^53.
        let domain =
            numeric_domain(entries.iter().map(|entry| entry.value as f64));
        Self { entries, domain }
    }
}

/// Titles per production country on a choropleth map.
///
/// Each tab gets its own color domain, computed over that tab's counts.
#[derive(Debug)]
pub struct CountryMapView {
    slot: ViewSlot<MediaPair<ChoroplethLayer>>,
}

impl CountryMapView {
    pub fn new() -> Self {
        Self {
            slot: ViewSlot::new("country_map"),
        }
    }

    pub async fn load<A>(&self, api: &A) -> Result<()>
    where
        A: StatsApi + ?Sized,
    {
        self.slot
            .run(async {
                let (movies, series) = tokio::try_join!(
                    api.fetch_distribution(
                        MediaKind::Movies,
                        Dimension::Countries
                    ),
                    api.fetch_distribution(
                        MediaKind::Series,
                        Dimension::Countries
                    ),
                )?;
                Ok(MediaPair::new(movies, series).map(ChoroplethLayer::from))
            })
            .await
    }

    pub fn state(&self) -> LoadState<MediaPair<ChoroplethLayer>> {
        self.slot.state()
    }

    pub fn select(&self, kind: MediaKind) -> Option<ChoroplethLayer> {
        self.slot
            .read(|state| state.ready().map(|pair| pair.get(kind).clone()))
    }

    pub(crate) fn cancel(&self) {
        self.slot.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.slot.is_cancelled()
    }
}

impl Default for CountryMapView {
    fn default() -> Self {
        Self::new()
    }
}
