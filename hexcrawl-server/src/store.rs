//! In-memory map store with JSON-document persistence
//!
//! One record per hex, keyed by label; the map key is the authoritative
//! uniqueness guard. The on-disk format and the export format are the same
//! JSON document, so a saved data file can be re-imported as-is.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::Utc;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use hexcrawl_core::content::{Danger, Faction, Feature, HexRecord, HexStatus, Resources, Rumor, Terrain};
use hexcrawl_core::{generate_ring, parse_ring_count};

use crate::error::{ApiError, Result};

pub const META_RING_COUNT: &str = "current_ring_count";
pub const META_ONBOARDING: &str = "onboarding_complete";
pub const META_MAP_NAME: &str = "map_name";

/// Rings seeded on first boot
const INITIAL_RING_COUNT: u32 = 4;

/// One audit entry: a single field of a single hex changed
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: u64,
    pub hex_label: String,
    pub field_name: String,
    pub old_value: String,
    pub new_value: String,
    pub changed_at: String,
}

/// Field-level update to one hex. A present field is set, an absent field is
/// left unchanged; there is no clear-to-null form (clients send empty
/// strings/lists to clear).
#[derive(Clone, Debug, Default, Deserialize)]
pub struct HexPatch {
    pub terrain: Option<Terrain>,
    pub poi_type: Option<String>,
    pub poi_name: Option<String>,
    pub features: Option<Vec<Feature>>,
    pub dangers: Option<Vec<Danger>>,
    pub factions: Option<Vec<Faction>>,
    pub resources: Option<Resources>,
    pub rumors: Option<Vec<Rumor>>,
    pub history_lore: Option<String>,
    pub status: Option<HexStatus>,
    pub notes: Option<String>,
    pub secrets: Option<String>,
}

impl HexPatch {
    pub fn validate(&self) -> Result<()> {
        if let Some(features) = &self.features {
            for feature in features {
                feature.validate()?;
            }
        }
        Ok(())
    }

    /// Drop DM-only fields from a player write
    pub fn without_secrets(mut self) -> Self {
        self.secrets = None;
        self
    }
}

/// The full map as one serializable document; also the export format
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExportData {
    pub hexes: Vec<HexRecord>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    #[serde(default)]
    pub meta: BTreeMap<String, String>,
}

impl ExportData {
    /// Player view: secrets stripped from records and from the audit trail
    pub fn redacted(mut self) -> Self {
        self.hexes = self.hexes.iter().map(HexRecord::redacted).collect();
        self.history.retain(|h| h.field_name != "secrets");
        self
    }
}

/// Outcome of an outer-ring removal request
#[derive(Clone, Debug, PartialEq)]
pub enum RemoveOutcome {
    /// Not confirmed yet: report what would be lost
    Preview {
        ring: u32,
        populated_count: usize,
        needs_confirm: bool,
    },
    Removed {
        ring: u32,
    },
}

pub struct MapStore {
    hexes: FxHashMap<String, HexRecord>,
    history: Vec<HistoryEntry>,
    meta: BTreeMap<String, String>,
}

fn default_meta() -> BTreeMap<String, String> {
    BTreeMap::from([
        (META_RING_COUNT.to_string(), "0".to_string()),
        (META_ONBOARDING.to_string(), "0".to_string()),
        (META_MAP_NAME.to_string(), "Untitled Campaign".to_string()),
    ])
}

fn now_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

fn json_text<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// JSON-encode a string for a CSV cell; doubles as CSV quoting
fn json_quote(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

const CSV_COLUMNS: [&str; 17] = [
    "label",
    "terrain",
    "poi_type",
    "poi_name",
    "features",
    "dangers",
    "factions",
    "resources",
    "rumors",
    "history_lore",
    "status",
    "notes",
    "secrets",
    "explored",
    "ring",
    "created_at",
    "updated_at",
];

impl MapStore {
    pub fn new() -> Self {
        Self {
            hexes: FxHashMap::default(),
            history: Vec::new(),
            meta: default_meta(),
        }
    }

    /// First-boot bootstrap: center plus rings 1..=4, ring count set to
    /// match. No-op when any hexes already exist.
    pub fn seed_if_empty(&mut self) -> bool {
        if !self.hexes.is_empty() {
            return false;
        }
        for ring in 0..=INITIAL_RING_COUNT {
            self.ensure_ring(ring);
        }
        self.meta
            .insert(META_RING_COUNT.to_string(), INITIAL_RING_COUNT.to_string());
        true
    }

    /// Insert one blank row per hex of `ring`, leaving existing rows alone
    pub fn ensure_ring(&mut self, ring: u32) {
        let now = now_timestamp();
        for hex in generate_ring(ring) {
            self.hexes
                .entry(hex.label.clone())
                .or_insert_with(|| HexRecord::blank(hex.label, ring, &now));
        }
    }

    pub fn ring_count(&self) -> Result<u32> {
        let value = self
            .meta
            .get(META_RING_COUNT)
            .map(String::as_str)
            .unwrap_or("0");
        Ok(parse_ring_count(value)?)
    }

    /// Grow the map by one ring; returns the new ring count
    pub fn add_ring(&mut self) -> Result<u32> {
        let next = self.ring_count()? + 1;
        self.ensure_ring(next);
        self.meta
            .insert(META_RING_COUNT.to_string(), next.to_string());
        Ok(next)
    }

    /// Remove the outermost ring. Without `confirm`, only reports how many
    /// of its hexes carry content; with it, deletes their rows and
    /// decrements the ring count.
    pub fn remove_outer_ring(&mut self, confirm: bool) -> Result<RemoveOutcome> {
        let current = self.ring_count()?;
        if current == 0 {
            return Err(ApiError::BadRequest("no rings to remove".to_string()));
        }

        let populated_count = self
            .hexes
            .values()
            .filter(|h| h.ring == current && h.is_populated())
            .count();

        if !confirm {
            return Ok(RemoveOutcome::Preview {
                ring: current,
                populated_count,
                needs_confirm: populated_count > 0,
            });
        }

        self.hexes.retain(|_, h| h.ring != current);
        self.meta
            .insert(META_RING_COUNT.to_string(), (current - 1).to_string());
        Ok(RemoveOutcome::Removed { ring: current })
    }

    pub fn get(&self, label: &str) -> Option<&HexRecord> {
        self.hexes.get(label)
    }

    /// All hexes, ordered by (ring, label)
    pub fn all_sorted(&self) -> Vec<&HexRecord> {
        let mut hexes: Vec<&HexRecord> = self.hexes.values().collect();
        hexes.sort_by(|a, b| (a.ring, &a.label).cmp(&(b.ring, &b.label)));
        hexes
    }

    /// Apply a field patch. Every changed field gets one audit entry; any
    /// update marks the hex explored. Unknown labels are an error — rows
    /// are pre-created by `ensure_ring`.
    pub fn update_hex(&mut self, label: &str, patch: HexPatch) -> Result<HexRecord> {
        patch.validate()?;

        let now = now_timestamp();
        let mut next_id = self.history.iter().map(|h| h.id).max().unwrap_or(0) + 1;
        let record = self
            .hexes
            .get_mut(label)
            .ok_or_else(|| ApiError::NotFound(format!("no hex {label}")))?;

        let mut changes: Vec<(&'static str, String, String)> = Vec::new();

        macro_rules! patch_field {
            (opt $field:ident) => {
                if let Some(value) = patch.$field {
                    let new_value = Some(value);
                    if record.$field != new_value {
                        changes.push((
                            stringify!($field),
                            json_text(&record.$field),
                            json_text(&new_value),
                        ));
                        record.$field = new_value;
                    }
                }
            };
            ($field:ident) => {
                if let Some(value) = patch.$field {
                    if record.$field != value {
                        changes.push((
                            stringify!($field),
                            json_text(&record.$field),
                            json_text(&value),
                        ));
                        record.$field = value;
                    }
                }
            };
        }

        patch_field!(opt terrain);
        patch_field!(opt poi_type);
        patch_field!(opt poi_name);
        patch_field!(features);
        patch_field!(dangers);
        patch_field!(factions);
        patch_field!(resources);
        patch_field!(rumors);
        patch_field!(history_lore);
        patch_field!(status);
        patch_field!(notes);
        patch_field!(opt secrets);

        record.explored = true;
        record.updated_at = now.clone();
        let updated = record.clone();

        for (field_name, old_value, new_value) in changes {
            self.history.push(HistoryEntry {
                id: next_id,
                hex_label: label.to_string(),
                field_name: field_name.to_string(),
                old_value,
                new_value,
                changed_at: now.clone(),
            });
            next_id += 1;
        }

        Ok(updated)
    }

    /// Audit trail for one hex, newest first
    pub fn history_for(&self, label: &str, include_secrets: bool) -> Vec<HistoryEntry> {
        self.history
            .iter()
            .rev()
            .filter(|h| h.hex_label == label)
            .filter(|h| include_secrets || h.field_name != "secrets")
            .cloned()
            .collect()
    }

    pub fn meta(&self) -> &BTreeMap<String, String> {
        &self.meta
    }

    pub fn meta_value(&self, key: &str) -> Option<&str> {
        self.meta.get(key).map(String::as_str)
    }

    /// Upsert metadata keys; the ring count value is validated
    pub fn set_meta(&mut self, updates: BTreeMap<String, String>) -> Result<()> {
        if let Some(value) = updates.get(META_RING_COUNT) {
            parse_ring_count(value)?;
        }
        self.meta.extend(updates);
        Ok(())
    }

    pub fn to_export(&self) -> ExportData {
        ExportData {
            hexes: self.all_sorted().into_iter().cloned().collect(),
            history: self.history.clone(),
            meta: self.meta.clone(),
        }
    }

    /// Rebuild a store from an export document, validating records and
    /// rejecting duplicate labels at the boundary.
    pub fn from_export(data: ExportData) -> Result<Self> {
        let mut hexes = FxHashMap::default();
        for record in data.hexes {
            record.validate()?;
            let label = record.label.clone();
            if hexes.insert(label.clone(), record).is_some() {
                return Err(ApiError::BadRequest(format!(
                    "duplicate hex label {label}"
                )));
            }
        }

        let mut meta = default_meta();
        meta.extend(data.meta);
        if let Some(value) = meta.get(META_RING_COUNT) {
            parse_ring_count(value)?;
        }

        Ok(Self {
            hexes,
            history: data.history,
            meta,
        })
    }

    /// CSV dump, one row per hex in (ring, label) order. Cells are
    /// JSON-encoded, which doubles as CSV quoting; nested records are
    /// serialized JSON inside the quoted cell.
    pub fn export_csv(&self, include_secrets: bool) -> String {
        let mut lines = vec![CSV_COLUMNS.join(",")];
        for record in self.all_sorted() {
            lines.push(Self::csv_row(record, include_secrets));
        }
        lines.join("\n")
    }

    fn csv_row(record: &HexRecord, include_secrets: bool) -> String {
        let secrets = if include_secrets {
            record.secrets.as_deref().unwrap_or("")
        } else {
            ""
        };
        let cells = [
            json_quote(&record.label),
            json_quote(record.terrain.map(Terrain::name).unwrap_or("")),
            json_quote(record.poi_type.as_deref().unwrap_or("")),
            json_quote(record.poi_name.as_deref().unwrap_or("")),
            json_quote(&json_text(&record.features)),
            json_quote(&json_text(&record.dangers)),
            json_quote(&json_text(&record.factions)),
            json_quote(&json_text(&record.resources)),
            json_quote(&json_text(&record.rumors)),
            json_quote(&record.history_lore),
            json_quote(record.status.name()),
            json_quote(&record.notes),
            json_quote(secrets),
            u8::from(record.explored).to_string(),
            record.ring.to_string(),
            json_quote(&record.created_at),
            json_quote(&record.updated_at),
        ];
        cells.join(",")
    }

    // --- Disk persistence ---

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let data: ExportData = serde_json::from_str(&content)?;
        Ok(Self::from_export(data)?)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.to_export())?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load an existing data file, or bootstrap a fresh seeded map
    pub fn load_or_seed(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            let mut store = Self::new();
            store.seed_if_empty();
            Ok(store)
        }
    }
}

impl Default for MapStore {
    fn default() -> Self {
        Self::new()
    }
}
