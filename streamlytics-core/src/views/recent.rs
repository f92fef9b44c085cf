use streamlytics_model::{ContentRecord, MediaKind};

use super::{LoadState, ViewSlot};
use crate::api::StatsApi;
use crate::content::{normalize_records, top_n};
use crate::error::Result;

/// Most recently released titles of one catalog endpoint.
///
/// Holds the whole normalized catalog ordered newest first; `recent` cuts
/// it to the configured length.
#[derive(Debug)]
pub struct RecentContentView {
    kind: MediaKind,
    limit: usize,
    poster_size: String,
    slot: ViewSlot<Vec<ContentRecord>>,
}

impl RecentContentView {
    pub fn new(
        kind: MediaKind,
        limit: usize,
        poster_size: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            limit,
            poster_size: poster_size.into(),
            slot: ViewSlot::new(match kind {
                MediaKind::Movies => "recent_movies",
                MediaKind::Series => "recent_series",
            }),
        }
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub async fn load<A>(&self, api: &A) -> Result<()>
    where
        A: StatsApi + ?Sized,
    {
        let kind = self.kind;
        self.slot
            .run(async move {
                let raw = api.fetch_contents(kind).await?;
                Ok(normalize_records(raw))
            })
            .await
    }

    pub fn state(&self) -> LoadState<Vec<ContentRecord>> {
        self.slot.state()
    }

    /// Newest records, at most the configured limit.
    pub fn recent(&self) -> Option<Vec<ContentRecord>> {
        self.slot.read(|state| {
            state
                .ready()
                .map(|records| top_n(records, self.limit).to_vec())
        })
    }

    /// Thumbnail URL for `record` at this view's poster size.
    pub fn poster_url(&self, record: &ContentRecord) -> Option<String> {
        record.poster_url(&self.poster_size)
    }

    pub(crate) fn cancel(&self) {
        self.slot.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.slot.is_cancelled()
    }
}
