use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use streamlytics_core::config::DashboardConfig;
use streamlytics_core::model::{
    CountryRating, Dimension, DistributionEntry, DistributionResponse,
    GenreField, MediaKind, NumericDomain, RatingResponse, RawContentRecord,
    Theme,
};
use streamlytics_core::{
    CoreError, CountryMapView, Dashboard, GenreDistributionView, LoadState,
    RecentContentView, Result, StatsApi, YearlyTrendsView,
};
use tokio::sync::Semaphore;

/// In-memory API. Anything not registered answers with a 500.
#[derive(Default)]
struct StubApi {
    distributions: HashMap<(MediaKind, Dimension), DistributionResponse>,
    ratings: HashMap<MediaKind, RatingResponse>,
    contents: HashMap<MediaKind, Vec<RawContentRecord>>,
    gate: Option<Arc<Semaphore>>,
}

impl StubApi {
    fn with_distribution(
        mut self,
        kind: MediaKind,
        dimension: Dimension,
        pairs: &[(&str, u64)],
    ) -> Self {
        let data = pairs.iter().map(|(k, v)| (*k, *v)).collect();
        self.distributions.insert(
            (kind, dimension),
            DistributionResponse {
                data,
                total: pairs.iter().map(|(_, v)| v).sum(),
                count: pairs.len() as u64,
            },
        );
        self
    }

    fn with_ratings(
        mut self,
        kind: MediaKind,
        rows: &[(&str, f64, u64)],
    ) -> Self {
        let data = rows
            .iter()
            .map(|(country, mean, count)| {
                (
                    *country,
                    CountryRating {
                        mean: *mean,
                        count: *count,
                    },
                )
            })
            .collect();
        self.ratings.insert(
            kind,
            RatingResponse {
                data,
                total_ratings: rows.iter().map(|(_, _, c)| c).sum(),
                average_rating: 0.0,
            },
        );
        self
    }

    fn with_contents(
        mut self,
        kind: MediaKind,
        records: Vec<RawContentRecord>,
    ) -> Self {
        self.contents.insert(kind, records);
        self
    }

    fn gated(mut self, gate: Arc<Semaphore>) -> Self {
        self.gate = Some(gate);
        self
    }

    async fn wait_for_gate(&self) {
        if let Some(gate) = &self.gate {
            let _permit = gate.acquire().await.unwrap();
        }
    }

    fn missing(route: String) -> CoreError {
        CoreError::Status {
            url: format!("http://stub{route}"),
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            body: "Internal Server Error".into(),
        }
    }
}

#[async_trait]
impl StatsApi for StubApi {
    async fn fetch_contents(
        &self,
        kind: MediaKind,
    ) -> Result<Vec<RawContentRecord>> {
        self.wait_for_gate().await;
        self.contents
            .get(&kind)
            .cloned()
            .ok_or_else(|| Self::missing(format!("/{kind}")))
    }

    async fn fetch_content(
        &self,
        kind: MediaKind,
        tmdb_id: i64,
    ) -> Result<RawContentRecord> {
        self.wait_for_gate().await;
        self.contents
            .get(&kind)
            .and_then(|rows| rows.iter().find(|r| r.tmdb_id == tmdb_id))
            .cloned()
            .ok_or_else(|| Self::missing(format!("/{kind}/{tmdb_id}")))
    }

    async fn fetch_distribution(
        &self,
        kind: MediaKind,
        dimension: Dimension,
    ) -> Result<DistributionResponse> {
        self.wait_for_gate().await;
        self.distributions.get(&(kind, dimension)).cloned().ok_or_else(|| {
            Self::missing(format!("/stats/distribution/{kind}/{dimension}"))
        })
    }

    async fn fetch_country_ratings(
        &self,
        kind: MediaKind,
    ) -> Result<RatingResponse> {
        self.wait_for_gate().await;
        self.ratings.get(&kind).cloned().ok_or_else(|| {
            Self::missing(format!("/stats/ratings/{kind}/countries"))
        })
    }
}

fn record(
    tmdb_id: i64,
    release: Option<&str>,
    first_air: Option<&str>,
) -> RawContentRecord {
    RawContentRecord {
        title: format!("title-{tmdb_id}"),
        tmdb_id,
        release_date: release.map(str::to_string),
        first_air_date: first_air.map(str::to_string),
        genre: GenreField::Joined("Drama, Crime".into()),
        original_language: "fr".into(),
        poster_path: format!("/{tmdb_id}.jpg"),
        ..Default::default()
    }
}

fn full_stub() -> StubApi {
    StubApi::default()
        .with_distribution(
            MediaKind::Movies,
            Dimension::Genres,
            &[
                ("Action", 789),
                ("Drama", 1234),
                ("Comedy", 987),
                ("Documentary", 456),
                ("Thriller", 678),
                ("Horror", 12),
            ],
        )
        .with_distribution(
            MediaKind::Series,
            Dimension::Genres,
            &[("Drama", 40), ("Kids", 55)],
        )
        .with_distribution(MediaKind::Movies, Dimension::Yearly, &[("2020", 5)])
        .with_distribution(MediaKind::Series, Dimension::Yearly, &[("2021", 3)])
        .with_distribution(
            MediaKind::Movies,
            Dimension::Countries,
            &[("US", 40), ("FR", 55)],
        )
        .with_distribution(
            MediaKind::Series,
            Dimension::Countries,
            &[("KR", 9), ("JP", 7), ("US", 30)],
        )
        .with_ratings(MediaKind::Movies, &[("US", 6.5, 120), ("FR", 7.125, 40)])
        .with_ratings(MediaKind::Series, &[("KR", 8.0, 10)])
        .with_contents(
            MediaKind::Movies,
            (1..=7)
                .map(|i| record(i, Some(&format!("201{i}-01-01")), None))
                .collect(),
        )
        .with_contents(
            MediaKind::Series,
            vec![
                record(100, None, Some("2019-05-01")),
                record(101, Some("2022-01-01"), None),
                record(102, None, Some("garbage")),
            ],
        )
}

#[tokio::test]
async fn genre_view_ready_with_top_five_per_kind() -> anyhow::Result<()> {
    let api = full_stub();
    let view = GenreDistributionView::new(5);
    assert!(view.state().is_loading());

    view.load(&api).await?;

    let movies = view.select(MediaKind::Movies).unwrap();
    let names: Vec<&str> = movies.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Drama", "Comedy", "Action", "Thriller", "Documentary"]
    );
    assert_eq!(
        view.select(MediaKind::Series).unwrap(),
        vec![
            DistributionEntry::new("Kids", 55),
            DistributionEntry::new("Drama", 40)
        ]
    );
    Ok(())
}

#[tokio::test]
async fn one_failing_side_makes_view_unavailable() {
    let api = StubApi::default().with_distribution(
        MediaKind::Movies,
        Dimension::Genres,
        &[("Drama", 1)],
    );
    let view = GenreDistributionView::new(5);

    let err = view.load(&api).await.unwrap_err();

    assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
    assert_eq!(view.state(), LoadState::Unavailable);
    assert!(view.select(MediaKind::Movies).is_none());
}

#[tokio::test]
async fn yearly_view_zero_fills_missing_years() -> anyhow::Result<()> {
    let api = full_stub();
    let view = YearlyTrendsView::new();
    view.load(&api).await?;

    assert_eq!(
        view.select(MediaKind::Movies).unwrap(),
        vec![("2020".to_string(), 5), ("2021".to_string(), 0)]
    );
    assert_eq!(
        view.select(MediaKind::Series).unwrap(),
        vec![("2020".to_string(), 0), ("2021".to_string(), 3)]
    );
    Ok(())
}

#[tokio::test]
async fn country_map_domain_follows_selected_tab() -> anyhow::Result<()> {
    let api = full_stub();
    let view = CountryMapView::new();
    view.load(&api).await?;

    let movies = view.select(MediaKind::Movies).unwrap();
    assert_eq!(movies.domain, NumericDomain { min: 40.0, max: 55.0 });
    assert_eq!(movies.entries[0].id, "FR");

    let series = view.select(MediaKind::Series).unwrap();
    assert_eq!(series.domain.as_array(), [7.0, 30.0]);
    assert_eq!(series.entries.len(), 3);
    Ok(())
}

#[tokio::test]
async fn recent_view_orders_and_truncates() -> anyhow::Result<()> {
    let api = full_stub();

    let movies = RecentContentView::new(MediaKind::Movies, 5, "w92");
    movies.load(&api).await?;
    let recent = movies.recent().unwrap();
    let ids: Vec<i64> = recent.iter().map(|r| r.tmdb_id).collect();
    assert_eq!(ids, vec![7, 6, 5, 4, 3]);
    assert_eq!(recent[0].genres, vec!["Drama", "Crime"]);
    assert_eq!(
        movies.poster_url(&recent[0]).as_deref(),
        Some("https://image.tmdb.org/t/p/w92/7.jpg")
    );

    let series = RecentContentView::new(MediaKind::Series, 5, "w92");
    series.load(&api).await?;
    let ids: Vec<i64> =
        series.recent().unwrap().iter().map(|r| r.tmdb_id).collect();
    assert_eq!(ids, vec![101, 100, 102]);
    Ok(())
}

#[tokio::test]
async fn dashboard_loads_every_view() -> anyhow::Result<()> {
    let api = full_stub();
    let config = DashboardConfig {
        default_theme: Theme::Dark,
        ..DashboardConfig::default()
    };
    let dashboard = Dashboard::new(&config);
    assert_eq!(dashboard.theme(), Theme::Dark);

    dashboard.load_all(&api).await?;

    assert!(dashboard.genres().state().is_ready());
    assert!(dashboard.yearly().state().is_ready());
    assert!(dashboard.map().state().is_ready());

    let ratings = dashboard.ratings().select(dashboard.tab()).unwrap();
    assert_eq!(ratings.rows[0].country, "FR");
    assert_eq!(ratings.rows[0].rating, 7.13);
    assert_eq!(ratings.total_ratings, 160);

    dashboard.set_tab(MediaKind::Series);
    let ratings = dashboard.ratings().select(dashboard.tab()).unwrap();
    assert_eq!(ratings.rows.len(), 1);

    let recent = dashboard.recent(MediaKind::Series).recent().unwrap();
    assert_eq!(recent.len(), 3);
    Ok(())
}

#[tokio::test]
async fn dashboard_reports_failures_without_blocking_other_views() {
    let mut api = full_stub().with_contents(MediaKind::Series, Vec::new());
    api.ratings.remove(&MediaKind::Series);

    let dashboard = Dashboard::new(&DashboardConfig::default());
    let result = dashboard.load_all(&api).await;

    assert!(result.is_err());
    assert!(dashboard.ratings().state().is_unavailable());
    assert!(dashboard.genres().state().is_ready());
    assert_eq!(
        dashboard.recent(MediaKind::Series).recent(),
        Some(Vec::new())
    );
}

#[tokio::test]
async fn teardown_discards_in_flight_results() {
    let gate = Arc::new(Semaphore::new(0));
    let api = full_stub().gated(gate.clone());
    let dashboard = Dashboard::new(&DashboardConfig::default());

    let (result, ()) = tokio::join!(dashboard.load_all(&api), async {
        tokio::task::yield_now().await;
        dashboard.teardown();
        gate.add_permits(1);
    });

    assert!(matches!(result, Err(CoreError::Cancelled)));
    assert!(dashboard.genres().state().is_loading());
    assert!(dashboard.map().state().is_loading());
    assert!(dashboard.recent(MediaKind::Movies).is_cancelled());

    // A torn down view stays inert.
    let again = dashboard.genres().load(&api).await;
    assert!(matches!(again, Err(CoreError::Cancelled)));
    assert!(dashboard.genres().state().is_loading());
}
