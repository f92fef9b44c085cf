use streamlytics_model::prelude::*;

use super::{LoadState, MediaPair, ViewSlot};
use crate::api::StatsApi;
use crate::distribution::build_distribution;
use crate::error::Result;

/// Top genres pie chart for each media kind.
#[derive(Debug)]
pub struct GenreDistributionView {
    slot: ViewSlot<MediaPair<Vec<DistributionEntry>>>,
    limit: usize,
}

impl GenreDistributionView {
    pub fn new(limit: usize) -> Self {
        Self {
            slot: ViewSlot::new("genre_distribution"),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub async fn load<A>(&self, api: &A) -> Result<()>
    where
        A: StatsApi + ?Sized,
    {
        let limit = self.limit;
        self.slot
            .run(async {
                let (movies, series) = tokio::try_join!(
                    api.fetch_distribution(MediaKind::Movies, Dimension::Genres),
                    api.fetch_distribution(MediaKind::Series, Dimension::Genres),
                )?;
                Ok(MediaPair::new(movies, series).map(|response| {
                    build_distribution(&response.data, Some(limit))
                }))
            })
            .await
    }

    pub fn state(&self) -> LoadState<MediaPair<Vec<DistributionEntry>>> {
        self.slot.state()
    }

    /// Slices for the active tab, once loaded.
    pub fn select(&self, kind: MediaKind) -> Option<Vec<DistributionEntry>> {
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
