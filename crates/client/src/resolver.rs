//! Joins a raw player profile against the reference datasets.
//!
//! Resolution is all-or-nothing: the first id missing from its dataset
//! (or a character with an unknown quality label) fails the whole player.

use std::sync::Arc;

use enka_core::assets::{
    PlayerAssets, PlayerSummary, Quality, ResolvedAvatar, ResolvedNameCard,
    ResolvedProfilePicture,
};
use enka_core::error::EnkaError;
use enka_core::naming::transform_icon_name;
use enka_core::profile::{EnkaApiResponse, ShowAvatarInfo};
use enka_core::reference::{
    CharacterRecord, DatasetKind, NameCardRecord, ProfilePictureRecord,
};
use enka_core::url::{AssetUrlOptions, UrlBuilder};
use futures::future::try_join_all;
use serde::Serialize;

use crate::config::SharedConfig;
use crate::reference::ReferenceStore;

/// Number of entries in each reference dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DataStats {
    pub characters: usize,
    pub profile_pictures: usize,
    pub name_cards: usize,
}

pub struct AssetResolver {
    store: Arc<ReferenceStore>,
    config: SharedConfig,
}

impl AssetResolver {
    pub fn new(store: Arc<ReferenceStore>, config: SharedConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &Arc<ReferenceStore> {
        &self.store
    }

    /// Resolve a raw profile into a URL-annotated [`PlayerAssets`].
    ///
    /// The profile picture, the name card and every showcased avatar are
    /// looked up concurrently; avatars come back in showcase order.
    pub async fn resolve(&self, response: &EnkaApiResponse) -> Result<PlayerAssets, EnkaError> {
        let info = &response.player_info;
        let urls = UrlBuilder::new(self.config.snapshot().base_url);

        let avatars = try_join_all(
            info.show_avatar_info_list
                .iter()
                .map(|avatar| self.resolve_avatar(avatar, &urls)),
        );

        let (profile_picture, name_card, show_avatars) = tokio::try_join!(
            self.resolve_profile_picture(info.profile_picture.id, &urls),
            self.resolve_name_card(info.name_card_id, &urls),
            avatars,
        )?;

        tracing::debug!(
            nickname = %info.nickname,
            avatars = show_avatars.len(),
            "Resolved player assets",
        );

        Ok(PlayerAssets {
            player_info: PlayerSummary::from(info),
            profile_picture,
            name_card,
            show_avatars,
            ttl: response.ttl,
            last_updated: chrono::Utc::now(),
        })
    }

    pub async fn character(&self, avatar_id: u32) -> Result<Option<CharacterRecord>, EnkaError> {
        let data = self.store.characters().await?;
        Ok(data.get(&avatar_id.to_string()).cloned())
    }

    pub async fn profile_picture(
        &self,
        id: u32,
    ) -> Result<Option<ProfilePictureRecord>, EnkaError> {
        let data = self.store.profile_pictures().await?;
        Ok(data.get(&id.to_string()).cloned())
    }

    pub async fn name_card(&self, id: u32) -> Result<Option<NameCardRecord>, EnkaError> {
        let data = self.store.name_cards().await?;
        Ok(data.get(&id.to_string()).cloned())
    }

    pub async fn has_character(&self, avatar_id: u32) -> Result<bool, EnkaError> {
        let data = self.store.characters().await?;
        Ok(data.contains_key(&avatar_id.to_string()))
    }

    pub async fn has_profile_picture(&self, id: u32) -> Result<bool, EnkaError> {
        let data = self.store.profile_pictures().await?;
        Ok(data.contains_key(&id.to_string()))
    }

    pub async fn has_name_card(&self, id: u32) -> Result<bool, EnkaError> {
        let data = self.store.name_cards().await?;
        Ok(data.contains_key(&id.to_string()))
    }

    pub async fn data_stats(&self) -> Result<DataStats, EnkaError> {
        let data = self.store.preload_all().await?;
        Ok(DataStats {
            characters: data.characters.len(),
            profile_pictures: data.profile_pictures.len(),
            name_cards: data.name_cards.len(),
        })
    }

    // ---- private helpers ----

    async fn resolve_profile_picture(
        &self,
        id: u32,
        urls: &UrlBuilder,
    ) -> Result<ResolvedProfilePicture, EnkaError> {
        let data = self.store.profile_pictures().await?;
        let record = data
            .get(&id.to_string())
            .ok_or_else(|| not_found(DatasetKind::ProfilePictures, id))?;

        Ok(ResolvedProfilePicture {
            id,
            icon_name: record.icon_path.clone(),
            url: urls.build_profile_picture_url(&record.icon_path),
        })
    }

    async fn resolve_name_card(
        &self,
        id: u32,
        urls: &UrlBuilder,
    ) -> Result<ResolvedNameCard, EnkaError> {
        let data = self.store.name_cards().await?;
        let record = data
            .get(&id.to_string())
            .ok_or_else(|| not_found(DatasetKind::NameCards, id))?;

        Ok(ResolvedNameCard {
            id,
            icon_name: record.icon.clone(),
            url: urls.build_name_card_url(&record.icon, &AssetUrlOptions::default()),
        })
    }

    async fn resolve_avatar(
        &self,
        avatar: &ShowAvatarInfo,
        urls: &UrlBuilder,
    ) -> Result<ResolvedAvatar, EnkaError> {
        let data = self.store.characters().await?;
        let record = data
            .get(&avatar.avatar_id.to_string())
            .ok_or_else(|| not_found(DatasetKind::Characters, avatar.avatar_id))?;

        let quality =
            Quality::from_label(&record.quality_type).ok_or_else(|| EnkaError::UnknownQuality {
                id: avatar.avatar_id.to_string(),
                label: record.quality_type.clone(),
            })?;

        let icon_name = transform_icon_name(&record.side_icon_name);
        let url = urls.build_character_icon_url(&icon_name, &AssetUrlOptions::default());

        Ok(ResolvedAvatar {
            avatar_id: avatar.avatar_id,
            icon_name,
            url,
            quality,
            level: avatar.level,
            talent_level: avatar.talent_level,
            element: record.element.clone(),
            weapon_type: record.weapon_type.clone(),
        })
    }
}

fn not_found(dataset: DatasetKind, id: u32) -> EnkaError {
    tracing::warn!(dataset = %dataset, id, "Reference entry not found");
    EnkaError::MappingNotFound {
        dataset,
        id: id.to_string(),
    }
}
