use parking_lot::RwLock;
use streamlytics_config::DashboardConfig;
use streamlytics_model::prelude::*;
use tracing::{info, warn};

use super::{
    CountryMapView, CountryRatingsView, GenreDistributionView, MediaPair,
    RecentContentView, YearlyTrendsView,
};
use crate::api::StatsApi;
use crate::error::Result;
use crate::settings::UiSettings;

/// Every chart of the statistics page plus the active media tab.
#[derive(Debug)]
pub struct Dashboard {
    tab: RwLock<MediaKind>,
    settings: UiSettings,
    genres: GenreDistributionView,
    yearly: YearlyTrendsView,
    ratings: CountryRatingsView,
    map: CountryMapView,
    recent: MediaPair<RecentContentView>,
}

impl Dashboard {
    pub fn new(config: &DashboardConfig) -> Self {
        Self::with_settings(config, UiSettings::new(config.default_theme))
    }

    /// Build a dashboard that shares an existing settings store.
    pub fn with_settings(config: &DashboardConfig, settings: UiSettings) -> Self {
        let recent = |kind| {
            RecentContentView::new(
                kind,
                config.recent_limit,
                config.poster_size.as_str(),
            )
        };
        Self {
            tab: RwLock::new(MediaKind::default()),
            settings,
            genres: GenreDistributionView::new(config.genre_limit),
            yearly: YearlyTrendsView::new(),
            ratings: CountryRatingsView::new(),
            map: CountryMapView::new(),
            recent: MediaPair::new(
                recent(MediaKind::Movies),
                recent(MediaKind::Series),
            ),
        }
    }

    pub fn tab(&self) -> MediaKind {
        *self.tab.read()
    }

    pub fn set_tab(&self, kind: MediaKind) {
        *self.tab.write() = kind;
    }

    pub fn settings(&self) -> &UiSettings {
        &self.settings
    }

    pub fn theme(&self) -> Theme {
        self.settings.theme()
    }

    pub fn genres(&self) -> &GenreDistributionView {
        &self.genres
    }

    pub fn yearly(&self) -> &YearlyTrendsView {
        &self.yearly
    }

    pub fn ratings(&self) -> &CountryRatingsView {
        &self.ratings
    }

    pub fn map(&self) -> &CountryMapView {
        &self.map
    }

    pub fn recent(&self, kind: MediaKind) -> &RecentContentView {
        self.recent.get(kind)
    }

    /// Load every view concurrently.
    ///
    /// Views succeed or fail independently. The first failure in chart order
    /// is returned once all loads have settled.
    pub async fn load_all<A>(&self, api: &A) -> Result<()>
    where
        A: StatsApi + ?Sized,
    {
        let results = tokio::join!(
            self.genres.load(api),
            self.yearly.load(api),
            self.ratings.load(api),
            self.map.load(api),
            self.recent.movies.load(api),
            self.recent.series.load(api),
        );
        let results = [
            results.0, results.1, results.2, results.3, results.4, results.5,
        ];

        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed == 0 {
            info!("dashboard loaded");
        } else {
            warn!(failed, total = results.len(), "dashboard partially loaded");
        }

        results.into_iter().collect::<Result<Vec<()>>>().map(|_| ())
    }

    /// Cancel every view. Loads still in flight drop their results.
    pub fn teardown(&self) {
        self.genres.cancel();
        self.yearly.cancel();
        self.ratings.cancel();
        self.map.cancel();
        self.recent.movies.cancel();
        self.recent.series.cancel();
    }
}
