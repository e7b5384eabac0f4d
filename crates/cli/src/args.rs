//! Command-line parsing.
//!
//! Usage: `enka-assets <uid>... [--uncached] [--format png|webp] [--size original|small|medium]`

use enka_core::url::{AssetFormat, AssetSize, AssetUrlOptions};

pub const USAGE: &str =
    "usage: enka-assets <uid>... [--uncached] [--format png|webp] [--size original|small|medium]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub uids: Vec<String>,
    pub uncached: bool,
    /// Set when `--format` or `--size` was given; triggers the extra
    /// icon URL listing.
    pub icon_options: Option<AssetUrlOptions>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgsError {
    #[error("at least one UID is required")]
    MissingUid,

    #[error("{0} expects a value")]
    MissingValue(&'static str),

    #[error("invalid value for {flag}: {value}")]
    InvalidValue { flag: &'static str, value: String },

    #[error("unknown flag: {0}")]
    UnknownFlag(String),
}

impl CliArgs {
    /// Parse arguments, excluding the program name.
    pub fn parse<I, S>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut uids = Vec::new();
        let mut uncached = false;
        let mut format = None;
        let mut size = None;

        let mut iter = args.into_iter().map(Into::into);
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--uncached" => uncached = true,
                "--format" => {
                    let value = iter.next().ok_or(ArgsError::MissingValue("--format"))?;
                    format = Some(value.parse::<AssetFormat>().map_err(|_| {
                        ArgsError::InvalidValue {
                            flag: "--format",
                            value,
                        }
                    })?);
                }
                "--size" => {
                    let value = iter.next().ok_or(ArgsError::MissingValue("--size"))?;
                    size = Some(value.parse::<AssetSize>().map_err(|_| {
                        ArgsError::InvalidValue {
                            flag: "--size",
                            value,
                        }
                    })?);
                }
                flag if flag.starts_with("--") => {
                    return Err(ArgsError::UnknownFlag(flag.to_string()))
                }
                _ => uids.push(arg),
            }
        }

        if uids.is_empty() {
            return Err(ArgsError::MissingUid);
        }

        let icon_options = (format.is_some() || size.is_some()).then(|| AssetUrlOptions {
            format: format.unwrap_or_default(),
            size: size.unwrap_or_default(),
        });

        Ok(Self {
            uids,
            uncached,
            icon_options,
        })
    }
}
