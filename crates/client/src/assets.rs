//! Top-level façade: cached player asset lookups.
//!
//! [`EnkaAssets`] owns the player cache, the reference store and the shared
//! configuration. Create one per process (or per distinct config) and
//! share it behind an `Arc`; call [`EnkaAssets::shutdown`] when done.

use std::sync::Arc;

use enka_core::assets::PlayerAssets;
use enka_core::cache::{CacheEntryInfo, CacheStats, TtlCache};
use enka_core::config::{ConfigUpdate, EnkaConfig};
use enka_core::error::EnkaError;
use enka_core::naming::player_cache_key;
use enka_core::reference::ReferenceSources;
use enka_core::url::{AssetUrlOptions, UrlBuilder};

use crate::api::EnkaApi;
use crate::config::SharedConfig;
use crate::http::{HttpFetch, ReqwestFetcher};
use crate::reference::{ReferenceCacheInfo, ReferenceData, ReferenceStore};
use crate::resolver::{AssetResolver, DataStats};

pub struct EnkaAssets {
    config: SharedConfig,
    api: EnkaApi,
    resolver: AssetResolver,
    cache: TtlCache<PlayerAssets>,
}

impl std::fmt::Debug for EnkaAssets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnkaAssets").finish_non_exhaustive()
    }
}

impl EnkaAssets {
    /// Build an instance that talks to the network through `reqwest`.
    pub fn new(config: EnkaConfig) -> Result<Self, EnkaError> {
        let fetcher = Arc::new(ReqwestFetcher::new()?);
        Self::with_fetcher(config, fetcher, ReferenceSources::default())
    }

    /// Build an instance on top of a custom [`HttpFetch`] and dataset
    /// locations.
    pub fn with_fetcher(
        config: EnkaConfig,
        fetcher: Arc<dyn HttpFetch>,
        sources: ReferenceSources,
    ) -> Result<Self, EnkaError> {
        let config = config.normalized()?;

        let cache = TtlCache::new(config.cache_duration, config.enable_cache);
        let shared = SharedConfig::new(config);
        let store = Arc::new(ReferenceStore::new(
            Arc::clone(&fetcher),
            shared.clone(),
            sources,
        ));

        Ok(Self {
            api: EnkaApi::new(fetcher, shared.clone()),
            resolver: AssetResolver::new(store, shared.clone()),
            config: shared,
            cache,
        })
    }

    pub fn api(&self) -> &EnkaApi {
        &self.api
    }

    pub fn resolver(&self) -> &AssetResolver {
        &self.resolver
    }

    /// Resolved assets for `uid`, served from the player cache when a
    /// valid entry exists.
    pub async fn get_player_assets(&self, uid: &str) -> Result<PlayerAssets, EnkaError> {
        let key = player_cache_key(uid);
        if let Some(cached) = self.cache.get(&key).await {
            tracing::debug!(uid, "Player assets served from cache");
            return Ok(cached);
        }

        let assets = self.fetch_and_resolve(uid).await.map_err(wrap_unexpected)?;
        self.cache.set(key, assets.clone()).await;

        tracing::info!(uid, avatars = assets.show_avatars.len(), "Player assets resolved");
        Ok(assets)
    }

    /// Always fetch and resolve; the player cache is neither read nor
    /// written.
    pub async fn get_player_assets_uncached(&self, uid: &str) -> Result<PlayerAssets, EnkaError> {
        self.fetch_and_resolve(uid).await.map_err(wrap_unexpected)
    }

    pub fn build_asset_url(&self, icon_name: &str, options: &AssetUrlOptions) -> String {
        self.url_builder().build_url(icon_name, options)
    }

    /// A [`UrlBuilder`] for the current base URL.
    pub fn url_builder(&self) -> UrlBuilder {
        UrlBuilder::new(self.config.snapshot().base_url)
    }

    pub async fn is_player_cached(&self, uid: &str) -> bool {
        self.cache.contains_valid(&player_cache_key(uid)).await
    }

    pub async fn player_cache_info(&self, uid: &str) -> Option<CacheEntryInfo> {
        self.cache.entry_info(&player_cache_key(uid)).await
    }

    pub async fn clear_player_cache(&self, uid: &str) -> bool {
        self.cache.invalidate(&player_cache_key(uid)).await
    }

    pub async fn clear_all_cache(&self) {
        self.cache.clear().await;
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.stats().await
    }

    pub async fn cleanup_cache(&self) -> usize {
        self.cache.cleanup().await
    }

    pub async fn data_stats(&self) -> Result<DataStats, EnkaError> {
        self.resolver.data_stats().await
    }

    pub async fn has_character(&self, avatar_id: u32) -> Result<bool, EnkaError> {
        self.resolver.has_character(avatar_id).await
    }

    pub async fn has_profile_picture(&self, id: u32) -> Result<bool, EnkaError> {
        self.resolver.has_profile_picture(id).await
    }

    pub async fn has_name_card(&self, id: u32) -> Result<bool, EnkaError> {
        self.resolver.has_name_card(id).await
    }

    pub async fn preload_reference_data(&self) -> Result<ReferenceData, EnkaError> {
        self.resolver.store().preload_all().await
    }

    pub async fn reference_cache_info(&self) -> ReferenceCacheInfo {
        self.resolver.store().cache_info().await
    }

    pub async fn clear_reference_data(&self) {
        self.resolver.store().clear().await;
    }

    pub fn config(&self) -> EnkaConfig {
        self.config.snapshot()
    }

    /// Merge `update` into the configuration and push the cache settings
    /// down to the player cache. An invalid update changes nothing.
    pub async fn update_config(&self, update: ConfigUpdate) -> Result<EnkaConfig, EnkaError> {
        let next = self.config.update(update)?;
        self.cache
            .configure(next.enable_cache, next.cache_duration)
            .await;

        tracing::info!(
            base_url = %next.base_url,
            api_url = %next.api_url,
            enable_cache = next.enable_cache,
            cache_duration_secs = next.cache_duration.as_secs(),
            "Configuration updated",
        );
        Ok(next)
    }

    /// Drop every cached player record and reference dataset.
    pub async fn shutdown(&self) {
        tracing::info!("Shutting down Enka asset client");
        self.cache.clear().await;
        self.resolver.store().clear().await;
    }

    // ---- private helpers ----

    async fn fetch_and_resolve(&self, uid: &str) -> Result<PlayerAssets, EnkaError> {
        let response = self.api.get_player_data(uid).await?;
        self.resolver.resolve(&response).await
    }
}

/// Pass domain errors through untouched; hide everything else behind a
/// generic message.
fn wrap_unexpected(err: EnkaError) -> EnkaError {
    if err.is_domain() {
        return err;
    }
    tracing::error!(error = %err, "Unexpected failure while getting player assets");
    EnkaError::Unexpected(format!("Failed to get player assets: {err}"))
}
