//! Class names emitted by the card components.
//!
//! These strings are the stable contract with `style/cards.css`; renaming any
//! of them breaks existing themes.

#[cfg(test)]
#[path = "class_name_test.rs"]
mod class_name_test;

/// Class on the navigable element rendered by `Card`.
pub const CARD_CLASS: &str = "card";

/// Prefix joined with the icon identifier to form the glyph class.
pub const ICON_CLASS_PREFIX: &str = "icon-";

/// Base class on the `CardGroup` container.
pub const CARD_GROUP_CLASS: &str = "card-group";

/// Glyph class for `icon`, e.g. `rocket` -> `icon-rocket`.
pub fn icon_class(icon: &str) -> String {
    format!("{ICON_CLASS_PREFIX}{icon}")
}

/// Container class for a group of `cols` columns, e.g. `3` -> `card-group cols-3`.
///
/// `cols` is passed through as-is; the stylesheet decides what an unstyled
/// count such as `0` looks like.
pub fn card_group_class(cols: u32) -> String {
    format!("{CARD_GROUP_CLASS} cols-{cols}")
}
