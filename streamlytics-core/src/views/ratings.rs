use streamlytics_model::{MediaKind, RatingEntry, RatingResponse};

use super::{LoadState, MediaPair, ViewSlot};
use crate::api::StatsApi;
use crate::error::Result;
use crate::ratings::build_ratings;

/// Bar chart rows plus the aggregate figures shown beside them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RatingChart {
    pub rows: Vec<RatingEntry>,
    pub total_ratings: u64,
    pub average_rating: f64,
}

impl From<RatingResponse> for RatingChart {
    fn from(response: RatingResponse) -> Self {
        Self {
            rows: build_ratings(&response.data),
            total_ratings: response.total_ratings,
            average_rating: response.average_rating,
        }
    }
}

/// Average rating per production country.
#[derive(Debug)]
pub struct CountryRatingsView {
    slot: ViewSlot<MediaPair<RatingChart>>,
}

impl CountryRatingsView {
    pub fn new() -> Self {
        Self {
            slot: ViewSlot::new("country_ratings"),
        }
    }

    pub async fn load<A>(&self, api: &A) -> Result<()>
    where
        A: StatsApi + ?Sized,
    {
        self.slot
            .run(async {
                let (movies, series) = tokio::try_join!(
                    api.fetch_country_ratings(MediaKind::Movies),
                    api.fetch_country_ratings(MediaKind::Series),
                )?;
                Ok(MediaPair::new(movies, series).map(RatingChart::from))
            })
            .await
    }

    pub fn state(&self) -> LoadState<MediaPair<RatingChart>> {
        self.slot.state()
    }

    pub fn select(&self, kind: MediaKind) -> Option<RatingChart> {
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

impl Default for CountryRatingsView {
    fn default() -> Self {
        Self::new()
    }
}
