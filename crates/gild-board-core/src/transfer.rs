//! Import/Export
//!
//! Portable JSON document carrying the completion set:
//! `{version, exportDate, totalItems, gildedCount, gildedJokers}`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Catalog, ImportError, ItemId};
use crate::storage::KeyValueSlot;
use crate::store::CompletionStore;

pub const EXPORT_VERSION: u32 = 1;
pub const COMPLETED_FIELD: &str = "gildedJokers";

/// Serialized progress document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub version: u32,
    pub export_date: String,
    #[serde(alias = "totalJokers")]
    pub total_items: usize,
    pub gilded_count: usize,
    pub gilded_jokers: Vec<ItemId>,
}

impl ExportDocument {
    /// Snapshot of the store. Ids come in catalog order, unknown ids last (sorted).
    pub fn build<S: KeyValueSlot>(
        catalog: &Catalog,
        store: &CompletionStore<S>,
        now: DateTime<Utc>,
    ) -> Self {
        let mut ids: Vec<ItemId> = store.ids().cloned().collect();
        // BTreeSet order is already sorted, so a stable sort keeps unknown ids sorted
        ids.sort_by_key(|id| catalog.position(id).unwrap_or(usize::MAX));
        Self {
            version: EXPORT_VERSION,
            export_date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            total_items: catalog.len(),
            gilded_count: ids.len(),
            gilded_jokers: ids,
        }
    }

    /// Pretty-printed with two-space indentation
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| {
            log::error!("export serialization failed: {}", e);
            String::from("{}")
        })
    }
}

/// `{prefix}-YYYY-MM-DD.{ext}`
pub fn dated_filename(prefix: &str, now: DateTime<Utc>, ext: &str) -> String {
    format!("{}-{}.{}", prefix, now.format("%Y-%m-%d"), ext)
}

/// Validate an import document and pull out its completed ids.
///
/// Only the completed-id list is required; every other field is ignored.
pub fn parse_import(text: &str) -> Result<Vec<ItemId>, ImportError> {
    let value: Value = serde_json::from_str(text).map_err(ImportError::Parse)?;
    let entries = value
        .get(COMPLETED_FIELD)
        .and_then(Value::as_array)
        .ok_or(ImportError::MissingField(COMPLETED_FIELD))?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            entry
                .as_str()
                .map(ItemId::from)
                .ok_or(ImportError::InvalidEntry {
                    field: COMPLETED_FIELD,
                    index,
                })
        })
        .collect()
}

/// Result of a successful import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Distinct ids now marked complete
    pub marked: usize,
    /// Of those, ids the catalog does not know
    pub unknown: usize,
}

impl ImportSummary {
    pub fn message(&self) -> String {
        let mut msg = format!("Successfully imported! {} Jokers marked as gilded.", self.marked);
        if self.unknown > 0 {
            msg.push_str(&format!(" ({} unrecognized entries kept but not shown.)", self.unknown));
        }
        msg
    }
}

/// Parse `text` and, only if it is valid, replace the whole completion set
pub fn import_into<S: KeyValueSlot>(
    catalog: &Catalog,
    store: &mut CompletionStore<S>,
    text: &str,
) -> Result<ImportSummary, ImportError> {
    let ids = parse_import(text).inspect_err(|e| log::warn!("import rejected: {}", e))?;
    store.replace(ids)?;
    let unknown = store.ids().filter(|id| !catalog.contains(id)).count();
    let summary = ImportSummary {
        marked: store.len(),
        unknown,
    };
    log::info!("import applied: {} marked, {} unknown", summary.marked, summary.unknown);
    Ok(summary)
}
