//! Domain Errors
//!
//! One enum per failure surface. None of these are fatal to the app.

use thiserror::Error;

/// Catalog asset could not be turned into a usable catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog json parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog entry #{index} has unknown rarity `{rarity}`")]
    UnknownCategory { index: usize, rarity: String },
    #[error("catalog entry #{index} has an empty name")]
    EmptyName { index: usize },
    #[error("duplicate catalog item `{0}`")]
    DuplicateId(String),
}

/// Persisted slot rejected a write
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("storage write to `{key}` failed: {reason}")]
pub struct StorageError {
    pub key: String,
    pub reason: String,
}

/// Import document was rejected; completion state is left untouched
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Failed to parse the file: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("Invalid file format: missing `{0}` list")]
    MissingField(&'static str),
    #[error("Invalid file format: entry #{index} in `{field}` is not a string")]
    InvalidEntry { field: &'static str, index: usize },
    #[error("Imported progress could not be saved: {0}")]
    Storage(#[from] StorageError),
}

/// A single snapshot asset could not be fetched or decoded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("asset `{src}` failed to load: {reason}")]
pub struct AssetError {
    pub src: String,
    pub reason: String,
}

/// Snapshot could not be turned into a downloadable file
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error(
        "The image could not be exported because the canvas contains cross-origin images. \
         Right-click the preview and choose \"Save image as\", or take a screenshot instead."
    )]
    Tainted,
    #[error("canvas unavailable: {0}")]
    Canvas(String),
    #[error("image encoding failed: {0}")]
    Encode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tainted_message_offers_manual_fallback() {
        let msg = SnapshotError::Tainted.to_string();
        assert!(msg.contains("Right-click"));
        assert!(msg.contains("screenshot"));
    }

    #[test]
    fn test_import_missing_field_message() {
        let msg = ImportError::MissingField("gildedJokers").to_string();
        assert!(msg.starts_with("Invalid file format"));
        assert!(msg.contains("gildedJokers"));
    }
}
