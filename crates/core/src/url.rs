//! Asset URL construction.
//!
//! Character icons and name cards live under the configurable UI base URL
//! (`{base}/{icon}{suffix}{ext}`). Profile pictures are always served from
//! the fixed Enka host, whatever the configured base URL.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::naming;

/// Host that serves profile picture icons regardless of `base_url`.
pub const PROFILE_PICTURE_HOST: &str = "https://enka.network";
/// UI directory on [`PROFILE_PICTURE_HOST`] for bare icon names.
pub const PROFILE_PICTURE_BASE_URL: &str = "https://enka.network/ui";

/// Image encoding of an asset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetFormat {
    #[default]
    Png,
    Webp,
}

impl AssetFormat {
    pub const ALL: [AssetFormat; 2] = [AssetFormat::Png, AssetFormat::Webp];

    /// File extension including the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            AssetFormat::Png => ".png",
            AssetFormat::Webp => ".webp",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AssetFormat::Png => "png",
            AssetFormat::Webp => "webp",
        }
    }
}

impl FromStr for AssetFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(AssetFormat::Png),
            "webp" => Ok(AssetFormat::Webp),
            other => Err(format!("unsupported asset format {other:?}")),
        }
    }
}

impl fmt::Display for AssetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Size variant of an asset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetSize {
    #[default]
    Original,
    Small,
    Medium,
}

impl AssetSize {
    pub const ALL: [AssetSize; 3] = [AssetSize::Original, AssetSize::Small, AssetSize::Medium];

    /// Suffix inserted between the icon name and the extension.
    pub fn suffix(self) -> &'static str {
        match self {
            AssetSize::Original => "",
            AssetSize::Small => "_small",
            AssetSize::Medium => "_medium",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AssetSize::Original => "original",
            AssetSize::Small => "small",
            AssetSize::Medium => "medium",
        }
    }
}

impl FromStr for AssetSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "original" => Ok(AssetSize::Original),
            "small" => Ok(AssetSize::Small),
            "medium" => Ok(AssetSize::Medium),
            other => Err(format!("unsupported asset size {other:?}")),
        }
    }
}

impl fmt::Display for AssetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetUrlOptions {
    #[serde(default)]
    pub format: AssetFormat,
    #[serde(default)]
    pub size: AssetSize,
}

/// Builds asset URLs under a UI base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    base_url: String,
}

impl UrlBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/{icon_name}{size suffix}{extension}`.
    pub fn build_url(&self, icon_name: &str, options: &AssetUrlOptions) -> String {
        format!(
            "{}/{}{}{}",
            self.base_url,
            icon_name,
            options.size.suffix(),
            options.format.extension()
        )
    }

    pub fn build_character_icon_url(&self, icon_name: &str, options: &AssetUrlOptions) -> String {
        self.build_url(icon_name, options)
    }

    pub fn build_name_card_url(&self, icon_name: &str, options: &AssetUrlOptions) -> String {
        self.build_url(icon_name, options)
    }

    /// Profile picture URL on [`PROFILE_PICTURE_HOST`].
    ///
    /// Absolute paths (`/ui/....png`) already carry directory and extension
    /// and are appended to the host as-is. Bare icon names are treated like
    /// any other icon under [`PROFILE_PICTURE_BASE_URL`].
    pub fn build_profile_picture_url(&self, icon_path: &str) -> String {
        if icon_path.starts_with('/') {
            format!("{PROFILE_PICTURE_HOST}{icon_path}")
        } else {
            format!(
                "{PROFILE_PICTURE_BASE_URL}/{icon_path}{}",
                AssetFormat::Png.extension()
            )
        }
    }

    pub fn build_multiple_urls<S: AsRef<str>>(
        &self,
        icon_names: &[S],
        options: &AssetUrlOptions,
    ) -> Vec<String> {
        icon_names
            .iter()
            .map(|name| self.build_url(name.as_ref(), options))
            .collect()
    }

    pub fn is_valid_icon_name(&self, icon_name: &str) -> bool {
        naming::is_valid_icon_name(icon_name)
    }

    pub fn supported_formats() -> Vec<&'static str> {
        AssetFormat::ALL.iter().map(|f| f.as_str()).collect()
    }

    pub fn supported_sizes() -> Vec<&'static str> {
        AssetSize::ALL.iter().map(|s| s.as_str()).collect()
    }
}
