//! Icon naming conventions and cache key derivation.

/// Infix that marks a side icon in the character store.
pub const SIDE_ICON_MARKER: &str = "_Side_";

/// Prefix shared by every UI icon asset.
pub const ICON_NAME_PREFIX: &str = "UI_";

/// Prefix for resolved player records in the player cache.
pub const PLAYER_CACHE_PREFIX: &str = "player";

/// Turn a side icon name into the canonical icon basename.
///
/// Only the first marker occurrence is replaced; names without the marker
/// come back unchanged.
///
/// # Examples
///
/// ```
/// use enka_core::naming::transform_icon_name;
///
/// assert_eq!(transform_icon_name("UI_AvatarIcon_Side_Ayaka"), "UI_AvatarIcon_Ayaka");
/// assert_eq!(transform_icon_name("UI_AvatarIcon_Ayaka"), "UI_AvatarIcon_Ayaka");
/// ```
pub fn transform_icon_name(side_icon_name: &str) -> String {
    side_icon_name.replacen(SIDE_ICON_MARKER, "_", 1)
}

/// Advisory check that a name follows the `UI_` asset convention.
pub fn is_valid_icon_name(icon_name: &str) -> bool {
    icon_name.starts_with(ICON_NAME_PREFIX)
}

/// Cache key under which a player's resolved record is stored.
pub fn player_cache_key(uid: &str) -> String {
    format!("{PLAYER_CACHE_PREFIX}_{uid}")
}
