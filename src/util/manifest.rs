//! Card manifests: JSON descriptions of a card group.
//!
//! DESIGN
//! ======
//! A manifest mirrors the component props one-to-one so `CardList` can hand
//! entries straight to `Card` and `CardGroup`. Parsing rejects entries whose
//! text props are blank but leaves `cols` unchecked, matching `CardGroup`.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "manifest_test.rs"]
mod manifest_test;

/// Error returned by [`parse_manifest`].
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// The input is not valid manifest JSON.
    #[error("failed to parse card manifest: {0}")]
    Parse(#[from] serde_json::Error),
    /// A required text field of a card entry is empty.
    #[error("card {index} has an empty `{field}`")]
    MissingField { index: usize, field: &'static str },
}

/// One card in a manifest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CardEntry {
    pub title: String,
    pub icon: String,
    pub href: String,
    /// Inline markdown shown in the card paragraph.
    #[serde(default)]
    pub body: String,
}

/// A group of cards and the column count to lay them out in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CardManifest {
    pub cols: u32,
    pub cards: Vec<CardEntry>,
}

/// Parse and check a JSON card manifest.
///
/// # Errors
///
/// Returns [`ManifestError::Parse`] for malformed JSON or unknown fields, and
/// [`ManifestError::MissingField`] for the first entry with a blank title,
/// icon, or href.
pub fn parse_manifest(json: &str) -> Result<CardManifest, ManifestError> {
    let manifest: CardManifest = serde_json::from_str(json)?;
    for (index, entry) in manifest.cards.iter().enumerate() {
        if let Some(field) = first_blank_field(entry) {
            return Err(ManifestError::MissingField { index, field });
        }
    }
    log::debug!("parsed card manifest: {} cards, {} cols", manifest.cards.len(), manifest.cols);
    Ok(manifest)
}

fn first_blank_field(entry: &CardEntry) -> Option<&'static str> {
    [("title", &entry.title), ("icon", &entry.icon), ("href", &entry.href)]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
}
