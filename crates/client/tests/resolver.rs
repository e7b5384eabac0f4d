//! Tests for `AssetResolver`: the join of a raw profile against the
//! reference datasets.

mod common;

use std::sync::Arc;

use assert_matches::assert_matches;
use enka_client::config::SharedConfig;
use enka_client::http::HttpFetch;
use enka_client::reference::ReferenceStore;
use enka_client::resolver::{AssetResolver, DataStats};
use enka_core::assets::Quality;
use enka_core::config::{ConfigUpdate, EnkaConfig};
use enka_core::error::EnkaError;
use enka_core::profile::EnkaApiResponse;
use enka_core::reference::{DatasetKind, ReferenceSources};

use common::{player_json_with_avatars, FakeFetcher, PLAYER_JSON};

fn resolver(fetcher: &Arc<FakeFetcher>, config: SharedConfig) -> AssetResolver {
    let fetcher: Arc<dyn HttpFetch> = fetcher.clone();
    let store = Arc::new(ReferenceStore::new(
        fetcher,
        config.clone(),
        ReferenceSources::default(),
    ));
    AssetResolver::new(store, config)
}

fn profile(json: &str) -> EnkaApiResponse {
    serde_json::from_str(json).unwrap()
}

// ---------------------------------------------------------------------------
// Full resolution
// ---------------------------------------------------------------------------

#[tokio::test]
async fn resolves_full_profile() {
    let fetcher = FakeFetcher::with_fixtures();
    let resolver = resolver(&fetcher, SharedConfig::default());

    let assets = resolver.resolve(&profile(PLAYER_JSON)).await.unwrap();

    assert_eq!(assets.player_info.nickname, "Traveler");
    assert_eq!(assets.player_info.world_level, Some(9));
    assert_eq!(assets.player_info.tower_star_index, Some(36));
    assert_eq!(assets.player_info.is_show_avatar_talent, Some(true));
    assert_eq!(assets.ttl, Some(60));

    assert_eq!(assets.name_card.id, 210059);
    assert_eq!(assets.name_card.icon_name, "UI_NameCardPic_Ayaka_P");
    assert_eq!(
        assets.name_card.url,
        "https://enka.network/ui/UI_NameCardPic_Ayaka_P.png"
    );

    assert_eq!(assets.profile_picture.id, 100);
    assert_eq!(
        assets.profile_picture.icon_name,
        "/ui/UI_AvatarIcon_Ayaka_Circle.png"
    );
    assert_eq!(
        assets.profile_picture.url,
        "https://enka.network/ui/UI_AvatarIcon_Ayaka_Circle.png"
    );
}

#[tokio::test]
async fn avatars_keep_showcase_order_and_fields() {
    let fetcher = FakeFetcher::with_fixtures();
    let resolver = resolver(&fetcher, SharedConfig::default());

    let assets = resolver.resolve(&profile(PLAYER_JSON)).await.unwrap();
    let avatars = &assets.show_avatars;

    assert_eq!(avatars.len(), 2);

    let xiangling = &avatars[0];
    assert_eq!(xiangling.avatar_id, 10000023);
    assert_eq!(xiangling.icon_name, "UI_AvatarIcon_Xiangling");
    assert_eq!(
        xiangling.url,
        "https://enka.network/ui/UI_AvatarIcon_Xiangling.png"
    );
    assert_eq!(xiangling.quality, Quality::FourStar);
    assert_eq!(xiangling.level, 80);
    assert_eq!(xiangling.talent_level, Some(6));
    assert_eq!(xiangling.element.as_deref(), Some("Fire"));
    assert_eq!(xiangling.weapon_type.as_deref(), Some("WEAPON_POLE"));

    let ayaka = &avatars[1];
    assert_eq!(ayaka.avatar_id, 10000002);
    assert_eq!(ayaka.quality, Quality::FiveStar);
    assert_eq!(ayaka.talent_level, None);
}

#[tokio::test]
async fn reference_data_is_fetched_once_per_resolution() {
    let fetcher = FakeFetcher::with_fixtures();
    let resolver = resolver(&fetcher, SharedConfig::default());

    let json = player_json_with_avatars(&[10000002, 10000023, 10000002, 10000023]);
    resolver.resolve(&profile(&json)).await.unwrap();

    // three datasets, each downloaded once despite four avatar lookups
    assert_eq!(fetcher.total_calls(), 3);
}

#[tokio::test]
async fn empty_showcase_resolves() {
    let fetcher = FakeFetcher::with_fixtures();
    let resolver = resolver(&fetcher, SharedConfig::default());

    let assets = resolver
        .resolve(&profile(&player_json_with_avatars(&[])))
        .await
        .unwrap();

    assert!(assets.show_avatars.is_empty());
    assert_eq!(
        assets.profile_picture.url,
        "https://enka.network/ui/UI_AvatarIcon_PlayerBoy_Circle.png"
    );
}

#[tokio::test]
async fn base_url_applies_to_icons_but_not_profile_pictures() {
    let fetcher = FakeFetcher::with_fixtures();
    let config = SharedConfig::new(EnkaConfig::default());
    config
        .update(ConfigUpdate {
            base_url: Some("https://cdn.example.com/ui".into()),
            ..Default::default()
        })
        .unwrap();
    let resolver = resolver(&fetcher, config);

    let assets = resolver.resolve(&profile(PLAYER_JSON)).await.unwrap();

    assert_eq!(
        assets.show_avatars[0].url,
        "https://cdn.example.com/ui/UI_AvatarIcon_Xiangling.png"
    );
    assert_eq!(
        assets.name_card.url,
        "https://cdn.example.com/ui/UI_NameCardPic_Ayaka_P.png"
    );
    assert_eq!(
        assets.profile_picture.url,
        "https://enka.network/ui/UI_AvatarIcon_Ayaka_Circle.png"
    );
}

// ---------------------------------------------------------------------------
// All-or-nothing failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_character_fails_whole_resolution() {
    let fetcher = FakeFetcher::with_fixtures();
    let resolver = resolver(&fetcher, SharedConfig::default());

    let json = player_json_with_avatars(&[10000002, 10000046]);
    let err = resolver.resolve(&profile(&json)).await.unwrap_err();

    assert_eq!(
        err,
        EnkaError::MappingNotFound {
            dataset: DatasetKind::Characters,
            id: "10000046".into(),
        }
    );
}

#[tokio::test]
async fn unknown_name_card_fails() {
    let fetcher = FakeFetcher::with_fixtures();
    let resolver = resolver(&fetcher, SharedConfig::default());

    let json = PLAYER_JSON.replace("\"nameCardId\": 210059", "\"nameCardId\": 999999");
    let err = resolver.resolve(&profile(&json)).await.unwrap_err();

    assert_matches!(
        err,
        EnkaError::MappingNotFound { dataset: DatasetKind::NameCards, ref id } if id == "999999"
    );
}

#[tokio::test]
async fn unknown_profile_picture_fails() {
    let fetcher = FakeFetcher::with_fixtures();
    let resolver = resolver(&fetcher, SharedConfig::default());

    let json = PLAYER_JSON.replace("\"profilePicture\": {\"id\": 100}", "\"profilePicture\": {\"id\": 7}");
    let err = resolver.resolve(&profile(&json)).await.unwrap_err();

    assert_matches!(
        err,
        EnkaError::MappingNotFound { dataset: DatasetKind::ProfilePictures, ref id } if id == "7"
    );
}

#[tokio::test]
async fn unknown_quality_label_is_flagged() {
    let fetcher = FakeFetcher::with_fixtures();
    let resolver = resolver(&fetcher, SharedConfig::default());

    let json = player_json_with_avatars(&[10000099]);
    let err = resolver.resolve(&profile(&json)).await.unwrap_err();

    assert_matches!(
        err,
        EnkaError::UnknownQuality { ref id, ref label } if id == "10000099" && label == "QUALITY_GREEN"
    );
}

#[tokio::test]
async fn reference_fetch_failure_propagates() {
    let fetcher = FakeFetcher::with_fixtures();
    fetcher.respond(enka_core::reference::CHARACTERS_URL, 500, "boom");
    let resolver = resolver(&fetcher, SharedConfig::default());

    let err = resolver.resolve(&profile(PLAYER_JSON)).await.unwrap_err();

    assert_matches!(
        err,
        EnkaError::ReferenceFetch {
            dataset: DatasetKind::Characters,
            ..
        }
    );
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

#[tokio::test]
async fn presence_checks() {
    let fetcher = FakeFetcher::with_fixtures();
    let resolver = resolver(&fetcher, SharedConfig::default());

    assert!(resolver.has_character(10000002).await.unwrap());
    assert!(!resolver.has_character(1).await.unwrap());
    assert!(resolver.has_profile_picture(1).await.unwrap());
    assert!(!resolver.has_profile_picture(2).await.unwrap());
    assert!(resolver.has_name_card(210001).await.unwrap());
    assert!(!resolver.has_name_card(210002).await.unwrap());
}

#[tokio::test]
async fn record_lookups() {
    let fetcher = FakeFetcher::with_fixtures();
    let resolver = resolver(&fetcher, SharedConfig::default());

    let ayaka = resolver.character(10000002).await.unwrap().unwrap();
    assert_eq!(ayaka.weapon_type.as_deref(), Some("WEAPON_SWORD_ONE_HAND"));
    assert!(resolver.character(42).await.unwrap().is_none());

    let card = resolver.name_card(210001).await.unwrap().unwrap();
    assert_eq!(card.icon, "UI_NameCardPic_0_P");

    let pfp = resolver.profile_picture(1).await.unwrap().unwrap();
    assert_eq!(pfp.icon_path, "UI_AvatarIcon_PlayerBoy_Circle");
}

#[tokio::test]
async fn data_stats_counts_entries() {
    let fetcher = FakeFetcher::with_fixtures();
    let resolver = resolver(&fetcher, SharedConfig::default());

    assert_eq!(
        resolver.data_stats().await.unwrap(),
        DataStats {
            characters: 3,
            profile_pictures: 2,
            name_cards: 2,
        }
    );
}
