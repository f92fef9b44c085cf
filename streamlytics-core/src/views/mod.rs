//! Dashboard views: one loader and state holder per chart.
//!
//! Every view fetches its movies and series inputs together and applies
//! them all-or-nothing. A failed load leaves the view `Unavailable`. A view
//! whose token was cancelled never touches its state again.

mod countries;
mod dashboard;
mod genres;
mod ratings;
mod recent;
mod yearly;

use parking_lot::RwLock;
use streamlytics_model::MediaKind;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

use crate::error::{CoreError, Result};

pub use countries::{ChoroplethLayer, CountryMapView};
pub use dashboard::Dashboard;
pub use genres::GenreDistributionView;
pub use ratings::{CountryRatingsView, RatingChart};
pub use recent::RecentContentView;
pub use yearly::YearlyTrendsView;

/// Lifecycle of a view's data.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Ready(T),
    /// The last load failed. Distinct from `Loading` so the UI can say so.
    Unavailable,
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, LoadState::Unavailable)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadState<U> {
        match self {
            LoadState::Loading => LoadState::Loading,
            LoadState::Ready(value) => LoadState::Ready(f(value)),
            LoadState::Unavailable => LoadState::Unavailable,
        }
    }
}

/// Same chart data computed for both media kinds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MediaPair<T> {
    pub movies: T,
    pub series: T,
}

impl<T> MediaPair<T> {
    pub fn new(movies: T, series: T) -> Self {
        Self { movies, series }
    }

    pub fn get(&self, kind: MediaKind) -> &T {
        match kind {
            MediaKind::Movies => &self.movies,
            MediaKind::Series => &self.series,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> MediaPair<U> {
        MediaPair {
            movies: f(self.movies),
            series: f(self.series),
        }
    }
}

/// Shared state and cancellation plumbing behind every view.
#[derive(Debug)]
pub(crate) struct ViewSlot<T> {
    name: &'static str,
    state: RwLock<LoadState<T>>,
    cancel: CancellationToken,
}

impl<T: Clone> ViewSlot<T> {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            state: RwLock::new(LoadState::Loading),
            cancel: CancellationToken::new(),
        }
    }

    pub(crate) fn state(&self) -> LoadState<T> {
        self.state.read().clone()
    }

    pub(crate) fn read<R>(&self, f: impl FnOnce(&LoadState<T>) -> R) -> R {
        f(&self.state.read())
    }

    pub(crate) fn cancel(&self) {
        debug!(view = self.name, "view torn down");
        self.cancel.cancel();
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Drive one load and apply its outcome unless the view was cancelled.
    ///
    /// The request is allowed to finish; a cancelled view only drops the
    /// result. State is untouched until the outcome is applied, so a reload
    /// keeps showing the previous data.
    pub(crate) async fn run<F>(&self, load: F) -> Result<()>
    where
        F: Future<Output = Result<T>>,
    {
        if self.cancel.is_cancelled() {
            return Err(CoreError::Cancelled);
        }

        let outcome = load.await;

        if self.cancel.is_cancelled() {
            debug!(view = self.name, "discarding result of cancelled view");
            return Err(CoreError::Cancelled);
        }

        match outcome {
            Ok(value) => {
                *self.state.write() = LoadState::Ready(value);
                debug!(view = self.name, "view ready");
                Ok(())
            }
            Err(err) => {
                error!(view = self.name, error = %err, "Error loading data");
                *self.state.write() = LoadState::Unavailable;
                Err(err)
            }
        }
    }
}
