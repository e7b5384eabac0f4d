//! Shared fixtures for the `enka-client` integration tests.
//!
//! [`FakeFetcher`] stands in for the network: responses are registered per
//! URL, and every request is counted so tests can assert how often the
//! client went out.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use enka_client::http::{HttpFetch, HttpResponse};
use enka_client::EnkaAssets;
use enka_core::config::EnkaConfig;
use enka_core::error::EnkaError;
use enka_core::reference::{ReferenceSources, CHARACTERS_URL, NAME_CARDS_URL, PROFILE_PICTURES_URL};

pub const UID: &str = "800000000";
pub const PLAYER_URL: &str = "https://enka.network/api/uid/800000000?info";

enum Route {
    Respond(HttpResponse),
    Fail(String),
}

/// In-memory [`HttpFetch`] with per-URL canned responses.
#[derive(Default)]
pub struct FakeFetcher {
    routes: Mutex<HashMap<String, Route>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl FakeFetcher {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Fetcher preloaded with the reference datasets and one player.
    pub fn with_fixtures() -> Arc<Self> {
        let fetcher = Self::new();
        fetcher.respond(CHARACTERS_URL, 200, CHARACTERS_JSON);
        fetcher.respond(PROFILE_PICTURES_URL, 200, PFPS_JSON);
        fetcher.respond(NAME_CARDS_URL, 200, NAMECARDS_JSON);
        fetcher.respond(PLAYER_URL, 200, PLAYER_JSON);
        fetcher
    }

    pub fn respond(&self, url: &str, status: u16, body: &str) {
        self.routes.lock().unwrap().insert(
            url.to_string(),
            Route::Respond(HttpResponse::new(status, body)),
        );
    }

    /// Make requests to `url` fail without a response.
    pub fn fail(&self, url: &str, reason: &str) {
        self.routes
            .lock()
            .unwrap()
            .insert(url.to_string(), Route::Fail(reason.to_string()));
    }

    pub fn calls(&self, url: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(called, _)| called == url)
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_user_agent(&self) -> Option<String> {
        self.calls.lock().unwrap().last().map(|(_, ua)| ua.clone())
    }
}

#[async_trait]
impl HttpFetch for FakeFetcher {
    async fn get(&self, url: &str, user_agent: &str) -> Result<HttpResponse, EnkaError> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), user_agent.to_string()));

        match self.routes.lock().unwrap().get(url) {
            Some(Route::Respond(response)) => Ok(response.clone()),
            Some(Route::Fail(reason)) => Err(EnkaError::Transport(reason.clone())),
            None => Ok(HttpResponse::new(404, "Not Found")),
        }
    }
}

pub fn build_assets(fetcher: &Arc<FakeFetcher>) -> EnkaAssets {
    build_assets_with(fetcher, EnkaConfig::default())
}

pub fn build_assets_with(fetcher: &Arc<FakeFetcher>, config: EnkaConfig) -> EnkaAssets {
    let fetcher: Arc<dyn HttpFetch> = fetcher.clone();
    EnkaAssets::with_fetcher(config, fetcher, ReferenceSources::default()).unwrap()
}

pub const CHARACTERS_JSON: &str = r#"{
    "10000002": {
        "Element": "Ice",
        "Consts": ["UI_Talent_S_Ayaka_01"],
        "SkillOrder": [10024, 10018, 10019],
        "Skills": {"10024": "Skill_A_01"},
        "ProudMap": {"10024": 232},
        "NameTextMapHash": 1006042610,
        "SideIconName": "UI_AvatarIcon_Side_Ayaka",
        "QualityType": "QUALITY_ORANGE",
        "WeaponType": "WEAPON_SWORD_ONE_HAND"
    },
    "10000023": {
        "Element": "Fire",
        "NameTextMapHash": 1041896486,
        "SideIconName": "UI_AvatarIcon_Side_Xiangling",
        "QualityType": "QUALITY_PURPLE",
        "WeaponType": "WEAPON_POLE"
    },
    "10000099": {
        "Element": "Rock",
        "SideIconName": "UI_AvatarIcon_Side_Mystery",
        "QualityType": "QUALITY_GREEN",
        "WeaponType": "WEAPON_BOW"
    }
}"#;

pub const PFPS_JSON: &str = r#"{
    "1": {"IconPath": "UI_AvatarIcon_PlayerBoy_Circle"},
    "100": {"IconPath": "/ui/UI_AvatarIcon_Ayaka_Circle.png"}
}"#;

pub const NAMECARDS_JSON: &str = r#"{
    "210001": {"Icon": "UI_NameCardPic_0_P"},
    "210059": {"Icon": "UI_NameCardPic_Ayaka_P"}
}"#;

pub const PLAYER_JSON: &str = r#"{
    "playerInfo": {
        "nickname": "Traveler",
        "level": 60,
        "signature": "hello",
        "worldLevel": 9,
        "nameCardId": 210059,
        "finishAchievementNum": 1200,
        "towerFloorIndex": 12,
        "towerLevelIndex": 3,
        "showAvatarInfoList": [
            {"avatarId": 10000023, "level": 80, "talentLevel": 6},
            {"avatarId": 10000002, "level": 90}
        ],
        "showNameCardIdList": [210001, 210059],
        "profilePicture": {"id": 100},
        "theaterActIndex": 10,
        "theaterModeIndex": 4,
        "theaterStarIndex": 10,
        "isShowAvatarTalent": true,
        "fetterCount": 30,
        "towerStarIndex": 36
    },
    "ttl": 60,
    "uid": "800000000"
}"#;

/// Player JSON with a custom showcase list; ids are emitted verbatim.
pub fn player_json_with_avatars(avatar_ids: &[u32]) -> String {
    let avatars: Vec<String> = avatar_ids
        .iter()
        .map(|id| format!(r#"{{"avatarId": {id}, "level": 90}}"#))
        .collect();
    format!(
        r#"{{
            "playerInfo": {{
                "nickname": "Traveler",
                "level": 60,
                "nameCardId": 210001,
                "profilePicture": {{"id": 1}},
                "showAvatarInfoList": [{}]
            }}
        }}"#,
        avatars.join(",")
    )
}
