//! Raw player profile as returned by `GET {api}/uid/{uid}`.
//!
//! Only the `playerInfo` section is decoded into typed fields. The detailed
//! `avatarInfoList` (talents, equipment, fight props) is carried as opaque
//! JSON; nothing in the resolution pipeline reads it.

use serde::{Deserialize, Serialize};

/// Top-level response of the profile endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnkaApiResponse {
    pub player_info: PlayerInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_info_list: Option<Vec<serde_json::Value>>,
    /// Seconds until the API will serve a refreshed snapshot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInfo {
    pub nickname: String,
    pub level: u32,
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub world_level: Option<u32>,
    pub name_card_id: u32,
    #[serde(default)]
    pub finish_achievement_num: Option<u32>,
    #[serde(default)]
    pub tower_floor_index: Option<u32>,
    #[serde(default)]
    pub tower_level_index: Option<u32>,
    #[serde(default)]
    pub show_avatar_info_list: Vec<ShowAvatarInfo>,
    #[serde(default)]
    pub show_name_card_id_list: Vec<u32>,
    pub profile_picture: ProfilePictureRef,
    #[serde(default)]
    pub theater_act_index: Option<u32>,
    #[serde(default)]
    pub theater_mode_index: Option<u32>,
    #[serde(default)]
    pub theater_star_index: Option<u32>,
    #[serde(default)]
    pub is_show_avatar_talent: Option<bool>,
    #[serde(default)]
    pub fetter_count: Option<u32>,
    #[serde(default)]
    pub tower_star_index: Option<u32>,
    #[serde(default)]
    pub stygian_index: Option<u32>,
    #[serde(default)]
    pub stygian_seconds: Option<u32>,
    #[serde(default)]
    pub stygian_id: Option<u32>,
}

/// One entry of the showcase list on the player's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowAvatarInfo {
    pub avatar_id: u32,
    pub level: u32,
    #[serde(default)]
    pub talent_level: Option<u32>,
    #[serde(default)]
    pub energy_type: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfilePictureRef {
    pub id: u32,
}
