use streamlytics_model::{Dimension, MediaKind, YearlyPoint};

use super::{LoadState, ViewSlot};
use crate::api::StatsApi;
use crate::error::Result;
use crate::yearly::build_yearly_series;

/// Titles released per year, one line per media kind.
#[derive(Debug)]
pub struct YearlyTrendsView {
    slot: ViewSlot<Vec<YearlyPoint>>,
}

impl YearlyTrendsView {
    pub fn new() -> Self {
        Self {
            slot: ViewSlot::new("yearly_trends"),
        }
    }

    pub async fn load<A>(&self, api: &A) -> Result<()>
    where
        A: StatsApi + ?Sized,
    {
        self.slot
            .run(async {
                let (movies, series) = tokio::try_join!(
                    api.fetch_distribution(MediaKind::Movies, Dimension::Yearly),
                    api.fetch_distribution(MediaKind::Series, Dimension::Yearly),
                )?;
                Ok(build_yearly_series(Some(&movies.data), Some(&series.data)))
            })
            .await
    }

    pub fn state(&self) -> LoadState<Vec<YearlyPoint>> {
        self.slot.state()
    }

    /// `(year, count)` pairs of the line drawn for `kind`.
    pub fn select(&self, kind: MediaKind) -> Option<Vec<(String, u64)>> {
        self.slot.read(|state| {
            state.ready().map(|points| {
                points
                    .iter()
                    .map(|point| (point.year.clone(), point.value_for(kind)))
                    .collect()
            })
        })
    }

    pub(crate) fn cancel(&self) {
        self.slot.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.slot.is_cancelled()
    }
}

impl Default for YearlyTrendsView {
    fn default() -> Self {
        Self::new()
    }
}
