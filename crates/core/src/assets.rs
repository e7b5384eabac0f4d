//! Resolved, URL-annotated player records.
//!
//! A [`PlayerAssets`] is produced once per successful resolution and never
//! patched afterwards; a later resolution for the same player replaces it.

use serde::{Deserialize, Serialize};

use crate::profile::PlayerInfo;
use crate::types::Timestamp;

/// Label used by the character store for 5-star characters.
pub const QUALITY_ORANGE: &str = "QUALITY_ORANGE";
/// Label used by the character store for 4-star characters.
pub const QUALITY_PURPLE: &str = "QUALITY_PURPLE";

/// Character rarity tier. Serialized as the numeric star count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Quality {
    FourStar,
    FiveStar,
}

impl Quality {
    /// Map a store quality label to its tier. Unknown labels yield `None`
    /// so callers can flag them instead of guessing.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            QUALITY_ORANGE => Some(Quality::FiveStar),
            QUALITY_PURPLE => Some(Quality::FourStar),
            _ => None,
        }
    }

    pub fn stars(self) -> u8 {
        match self {
            Quality::FourStar => 4,
            Quality::FiveStar => 5,
        }
    }
}

impl From<Quality> for u8 {
    fn from(quality: Quality) -> Self {
        quality.stars()
    }
}

impl TryFrom<u8> for Quality {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(Quality::FourStar),
            5 => Ok(Quality::FiveStar),
            other => Err(format!("unsupported quality tier {other}")),
        }
    }
}

/// Display fields copied verbatim from `playerInfo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    pub nickname: String,
    pub level: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub world_level: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_achievement_num: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tower_floor_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tower_level_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theater_act_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theater_mode_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theater_star_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_show_avatar_talent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetter_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tower_star_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stygian_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stygian_seconds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stygian_id: Option<u32>,
}

impl From<&PlayerInfo> for PlayerSummary {
    fn from(info: &PlayerInfo) -> Self {
        Self {
            nickname: info.nickname.clone(),
            level: info.level,
            signature: info.signature.clone(),
            world_level: info.world_level,
            finish_achievement_num: info.finish_achievement_num,
            tower_floor_index: info.tower_floor_index,
            tower_level_index: info.tower_level_index,
            theater_act_index: info.theater_act_index,
            theater_mode_index: info.theater_mode_index,
            theater_star_index: info.theater_star_index,
            is_show_avatar_talent: info.is_show_avatar_talent,
            fetter_count: info.fetter_count,
            tower_star_index: info.tower_star_index,
            stygian_index: info.stygian_index,
            stygian_seconds: info.stygian_seconds,
            stygian_id: info.stygian_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedProfilePicture {
    pub id: u32,
    pub icon_name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedNameCard {
    pub id: u32,
    pub icon_name: String,
    pub url: String,
}

/// A showcased character with its icon resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAvatar {
    pub avatar_id: u32,
    pub icon_name: String,
    pub url: String,
    pub quality: Quality,
    pub level: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub talent_level: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapon_type: Option<String>,
}

/// Fully resolved player profile card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAssets {
    pub player_info: PlayerSummary,
    pub profile_picture: ResolvedProfilePicture,
    pub name_card: ResolvedNameCard,
    pub show_avatars: Vec<ResolvedAvatar>,
    /// TTL hint (seconds) forwarded from the profile API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u64>,
    pub last_updated: Timestamp,
}
