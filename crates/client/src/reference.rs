//! Lazily fetched, time-bounded copies of the three reference datasets.
//!
//! Each dataset lives in its own slot and is refreshed independently once
//! it is older than [`REFERENCE_DATA_TTL`]. An expired snapshot is thrown
//! away before the refetch starts, so a failed refetch leaves the slot
//! empty rather than serving stale data.

use std::sync::Arc;
use std::time::Duration;

use enka_core::error::EnkaError;
use enka_core::reference::{
    CharacterRecord, DatasetKind, NameCardRecord, ProfilePictureRecord, ReferenceDataset,
    ReferenceSources,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;

use crate::config::SharedConfig;
use crate::http::HttpFetch;

/// How long a fetched dataset is served before it is refetched (24 hours).
pub const REFERENCE_DATA_TTL: Duration = Duration::from_secs(24 * 60 * 60);

struct Snapshot<T> {
    data: Arc<ReferenceDataset<T>>,
    fetched_at: Instant,
}

/// One dataset slot. `refresh` serializes refetches so concurrent cold
/// lookups share a single download.
struct Slot<T> {
    kind: DatasetKind,
    current: RwLock<Option<Snapshot<T>>>,
    refresh: Mutex<()>,
}

impl<T> Slot<T> {
    fn new(kind: DatasetKind) -> Self {
        Self {
            kind,
            current: RwLock::new(None),
            refresh: Mutex::new(()),
        }
    }

    async fn fresh(&self) -> Option<Arc<ReferenceDataset<T>>> {
        let now = Instant::now();
        self.current
            .read()
            .await
            .as_ref()
            .filter(|snap| now.saturating_duration_since(snap.fetched_at) < REFERENCE_DATA_TTL)
            .map(|snap| Arc::clone(&snap.data))
    }

    async fn info(&self) -> DatasetCacheInfo {
        let now = Instant::now();
        match self.current.read().await.as_ref() {
            Some(snap) => {
                let age = now.saturating_duration_since(snap.fetched_at);
                DatasetCacheInfo {
                    cached: true,
                    age: Some(age),
                    expired: age >= REFERENCE_DATA_TTL,
                }
            }
            None => DatasetCacheInfo {
                cached: false,
                age: None,
                expired: true,
            },
        }
    }

    async fn clear(&self) {
        *self.current.write().await = None;
    }
}

/// Freshness of one dataset slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatasetCacheInfo {
    pub cached: bool,
    pub age: Option<Duration>,
    /// `true` when the slot is empty or older than [`REFERENCE_DATA_TTL`].
    pub expired: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceCacheInfo {
    pub characters: DatasetCacheInfo,
    pub profile_pictures: DatasetCacheInfo,
    pub name_cards: DatasetCacheInfo,
}

/// All three datasets, as returned by [`ReferenceStore::preload_all`].
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub characters: Arc<ReferenceDataset<CharacterRecord>>,
    pub profile_pictures: Arc<ReferenceDataset<ProfilePictureRecord>>,
    pub name_cards: Arc<ReferenceDataset<NameCardRecord>>,
}

pub struct ReferenceStore {
    fetcher: Arc<dyn HttpFetch>,
    config: SharedConfig,
    sources: ReferenceSources,
    characters: Slot<CharacterRecord>,
    profile_pictures: Slot<ProfilePictureRecord>,
    name_cards: Slot<NameCardRecord>,
}

impl ReferenceStore {
    pub fn new(fetcher: Arc<dyn HttpFetch>, config: SharedConfig, sources: ReferenceSources) -> Self {
        Self {
            fetcher,
            config,
            sources,
            characters: Slot::new(DatasetKind::Characters),
            profile_pictures: Slot::new(DatasetKind::ProfilePictures),
            name_cards: Slot::new(DatasetKind::NameCards),
        }
    }

    pub fn sources(&self) -> &ReferenceSources {
        &self.sources
    }

    pub async fn characters(&self) -> Result<Arc<ReferenceDataset<CharacterRecord>>, EnkaError> {
        self.load(&self.characters).await
    }

    pub async fn profile_pictures(
        &self,
    ) -> Result<Arc<ReferenceDataset<ProfilePictureRecord>>, EnkaError> {
        self.load(&self.profile_pictures).await
    }

    pub async fn name_cards(&self) -> Result<Arc<ReferenceDataset<NameCardRecord>>, EnkaError> {
        self.load(&self.name_cards).await
    }

    /// Load all three datasets concurrently. Any single failure fails the
    /// whole call; datasets that did load stay cached.
    pub async fn preload_all(&self) -> Result<ReferenceData, EnkaError> {
        let (characters, profile_pictures, name_cards) = tokio::try_join!(
            self.characters(),
            self.profile_pictures(),
            self.name_cards(),
        )?;

        tracing::info!(
            characters = characters.len(),
            profile_pictures = profile_pictures.len(),
            name_cards = name_cards.len(),
            "Reference data preloaded",
        );

        Ok(ReferenceData {
            characters,
            profile_pictures,
            name_cards,
        })
    }

    /// Forget every cached dataset.
    pub async fn clear(&self) {
        self.characters.clear().await;
        self.profile_pictures.clear().await;
        self.name_cards.clear().await;
        tracing::debug!("Reference data cache cleared");
    }

    pub async fn cache_info(&self) -> ReferenceCacheInfo {
        ReferenceCacheInfo {
            characters: self.characters.info().await,
            profile_pictures: self.profile_pictures.info().await,
            name_cards: self.name_cards.info().await,
        }
    }

    // ---- private helpers ----

    async fn load<T>(&self, slot: &Slot<T>) -> Result<Arc<ReferenceDataset<T>>, EnkaError>
    where
        T: DeserializeOwned,
    {
        if let Some(data) = slot.fresh().await {
            return Ok(data);
        }

        let _refresh = slot.refresh.lock().await;
        // A concurrent caller may have finished the refetch while we waited.
        if let Some(data) = slot.fresh().await {
            return Ok(data);
        }

        if slot.current.write().await.take().is_some() {
            tracing::debug!(dataset = %slot.kind, "Discarded expired reference data");
        }

        let data = Arc::new(self.fetch_dataset::<T>(slot.kind).await?);
        *slot.current.write().await = Some(Snapshot {
            data: Arc::clone(&data),
            fetched_at: Instant::now(),
        });

        tracing::info!(dataset = %slot.kind, entries = data.len(), "Reference data refreshed");
        Ok(data)
    }

    async fn fetch_dataset<T>(&self, kind: DatasetKind) -> Result<ReferenceDataset<T>, EnkaError>
    where
        T: DeserializeOwned,
    {
        let url = self.sources.url(kind);
        let user_agent = self.config.snapshot().user_agent;

        let fetch_failed = |reason: String| {
            tracing::warn!(dataset = %kind, url, reason = %reason, "Reference data fetch failed");
            EnkaError::ReferenceFetch {
                dataset: kind,
                reason,
            }
        };

        let response = self
            .fetcher
            .get(url, &user_agent)
            .await
            .map_err(|e| fetch_failed(e.to_string()))?;

        if !response.is_success() {
            return Err(fetch_failed(format!("HTTP status {}", response.status)));
        }

        response
            .json::<ReferenceDataset<T>>()
            .map_err(|e| fetch_failed(format!("malformed body: {e}")))
    }
}
