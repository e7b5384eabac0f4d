//! Static reference datasets published in the Enka API-docs store.
//!
//! Each dataset maps a string-encoded numeric id to a metadata record. The
//! datasets are fetched whole and only read afterwards.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Character metadata store (`characters.json`).
pub const CHARACTERS_URL: &str =
    "https://raw.githubusercontent.com/EnkaNetwork/API-docs/master/store/characters.json";
/// Profile picture store (`gi/pfps.json`).
pub const PROFILE_PICTURES_URL: &str =
    "https://raw.githubusercontent.com/EnkaNetwork/API-docs/master/store/gi/pfps.json";
/// Name card store (`gi/namecards.json`).
pub const NAME_CARDS_URL: &str =
    "https://raw.githubusercontent.com/EnkaNetwork/API-docs/master/store/gi/namecards.json";

/// A full reference dataset keyed by id in string form.
pub type ReferenceDataset<T> = HashMap<String, T>;

/// Which of the three reference datasets an operation concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    Characters,
    ProfilePictures,
    NameCards,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 3] = [
        DatasetKind::Characters,
        DatasetKind::ProfilePictures,
        DatasetKind::NameCards,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DatasetKind::Characters => "characters",
            DatasetKind::ProfilePictures => "profile_pictures",
            DatasetKind::NameCards => "name_cards",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of `characters.json`. Fields the pipeline never reads
/// (skills, constellations, costumes) are ignored on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CharacterRecord {
    #[serde(default)]
    pub element: Option<String>,
    pub side_icon_name: String,
    pub quality_type: String,
    #[serde(default)]
    pub weapon_type: Option<String>,
    #[serde(default)]
    pub name_text_map_hash: Option<u64>,
}

/// One entry of `pfps.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfilePictureRecord {
    #[serde(rename = "IconPath")]
    pub icon_path: String,
}

/// One entry of `namecards.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameCardRecord {
    #[serde(rename = "Icon")]
    pub icon: String,
}

/// Locations the three datasets are downloaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceSources {
    pub characters: String,
    pub profile_pictures: String,
    pub name_cards: String,
}

impl ReferenceSources {
    pub fn url(&self, kind: DatasetKind) -> &str {
        match kind {
            DatasetKind::Characters => &self.characters,
            DatasetKind::ProfilePictures => &self.profile_pictures,
            DatasetKind::NameCards => &self.name_cards,
        }
    }
}

impl Default for ReferenceSources {
    fn default() -> Self {
        Self {
            characters: CHARACTERS_URL.to_string(),
            profile_pictures: PROFILE_PICTURES_URL.to_string(),
            name_cards: NAME_CARDS_URL.to_string(),
        }
    }
}
