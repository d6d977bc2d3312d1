//! Shared content vocabulary for hex records
//!
//! The palette tables and record types the map UI and storage rows are built
//! from. The geometry modules never read or write any of this — they only
//! hand out labels and ring numbers that key these records.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Terrain kinds with their map fill colors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    Plains,
    Forest,
    #[serde(rename = "dense forest")]
    DenseForest,
    Hills,
    Mountains,
    Swamp,
    Desert,
    #[serde(rename = "coast / beach")]
    Coast,
    #[serde(rename = "water / sea")]
    Water,
    Tundra,
    Volcanic,
    Ruins,
}

impl Terrain {
    pub const ALL: [Terrain; 12] = [
        Terrain::Plains,
        Terrain::Forest,
        Terrain::DenseForest,
        Terrain::Hills,
        Terrain::Mountains,
        Terrain::Swamp,
        Terrain::Desert,
        Terrain::Coast,
        Terrain::Water,
        Terrain::Tundra,
        Terrain::Volcanic,
        Terrain::Ruins,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Terrain::Plains => "plains",
            Terrain::Forest => "forest",
            Terrain::DenseForest => "dense forest",
            Terrain::Hills => "hills",
            Terrain::Mountains => "mountains",
            Terrain::Swamp => "swamp",
            Terrain::Desert => "desert",
            Terrain::Coast => "coast / beach",
            Terrain::Water => "water / sea",
            Terrain::Tundra => "tundra",
            Terrain::Volcanic => "volcanic",
            Terrain::Ruins => "ruins",
        }
    }

    /// Map fill color
    pub const fn color(self) -> &'static str {
        match self {
            Terrain::Plains => "#D4E6A5",
            Terrain::Forest => "#7A9E5F",
            Terrain::DenseForest => "#4A6B3A",
            Terrain::Hills => "#C4A876",
            Terrain::Mountains => "#9A9088",
            Terrain::Swamp => "#7A8A5A",
            Terrain::Desert => "#D4B878",
            Terrain::Coast => "#E8D5A0",
            Terrain::Water => "#7AACCF",
            Terrain::Tundra => "#D0D8DC",
            Terrain::Volcanic => "#7A4A3A",
            Terrain::Ruins => "#B0A090",
        }
    }
}

/// Exploration status of a hex, shown as its border color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HexStatus {
    #[default]
    Unknown,
    Explored,
    Safe,
    Dangerous,
    Cleared,
}

impl HexStatus {
    pub const ALL: [HexStatus; 5] = [
        HexStatus::Unknown,
        HexStatus::Explored,
        HexStatus::Safe,
        HexStatus::Dangerous,
        HexStatus::Cleared,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            HexStatus::Unknown => "unknown",
            HexStatus::Explored => "explored",
            HexStatus::Safe => "safe",
            HexStatus::Dangerous => "dangerous",
            HexStatus::Cleared => "cleared",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            HexStatus::Unknown => "#888",
            HexStatus::Explored => "#4A90D9",
            HexStatus::Safe => "#2A6B2A",
            HexStatus::Dangerous => "#8B2020",
            HexStatus::Cleared => "#D4A017",
        }
    }
}

/// Linear feature kinds drawn along hex edges
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    Road,
    River,
    Trail,
    Wall,
}

impl FeatureKind {
    pub const ALL: [FeatureKind; 4] = [
        FeatureKind::Road,
        FeatureKind::River,
        FeatureKind::Trail,
        FeatureKind::Wall,
    ];
}

/// A linear feature crossing this hex, anchored at edge midpoints.
/// Edge indices 0-5, matching `geometry::edge_midpoints` order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: FeatureKind,
    pub edges: Vec<u8>,
}

impl Feature {
    pub fn validate(&self) -> Result<()> {
        if self.edges.is_empty() {
            return Err(CoreError::InvalidContent(
                "feature has no edges".to_string(),
            ));
        }
        if let Some(&edge) = self.edges.iter().find(|&&e| e > 5) {
            return Err(CoreError::InvalidContent(format!(
                "edge index {edge} out of range 0-5"
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DangerCategory {
    Environmental,
    Enemies,
    Trap,
    Curse,
    Other,
}

impl DangerCategory {
    pub const ALL: [DangerCategory; 5] = [
        DangerCategory::Environmental,
        DangerCategory::Enemies,
        DangerCategory::Trap,
        DangerCategory::Curse,
        DangerCategory::Other,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DangerSeverity {
    Minor,
    Moderate,
    Severe,
    Deadly,
}

impl DangerSeverity {
    pub const ALL: [DangerSeverity; 4] = [
        DangerSeverity::Minor,
        DangerSeverity::Moderate,
        DangerSeverity::Severe,
        DangerSeverity::Deadly,
    ];
}

/// A recorded danger in this hex
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Danger {
    pub id: i64,
    pub category: DangerCategory,
    pub severity: DangerSeverity,
    #[serde(default)]
    pub details: String,
}

/// A faction with presence in this hex
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faction {
    pub id: i64,
    pub name: String,
    pub color: String,
}

/// Harvestable resource kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    Herbs,
    #[serde(rename = "Ore/Metal")]
    OreMetal,
    Lumber,
    #[serde(rename = "Fresh Water")]
    FreshWater,
    #[serde(rename = "Game/Hunting")]
    GameHunting,
    Fish,
    Stone,
    #[serde(rename = "Rare Materials")]
    RareMaterials,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 8] = [
        ResourceKind::Herbs,
        ResourceKind::OreMetal,
        ResourceKind::Lumber,
        ResourceKind::FreshWater,
        ResourceKind::GameHunting,
        ResourceKind::Fish,
        ResourceKind::Stone,
        ResourceKind::RareMaterials,
    ];
}

/// Resources present in this hex
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    #[serde(default)]
    pub types: Vec<ResourceKind>,
    #[serde(default)]
    pub notes: String,
}

/// A rumor the players may have heard about this hex
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rumor {
    pub id: i64,
    pub text: String,
}

/// Point-of-interest taxonomy: (category, kinds)
pub const POI_CATEGORIES: [(&str, &[&str]); 6] = [
    (
        "Settlement",
        &["Town", "Village", "City", "Hamlet", "Outpost", "Fort", "Castle"],
    ),
    (
        "Religious",
        &["Shrine", "Temple", "Monastery", "Standing Stones", "Cemetery"],
    ),
    (
        "Structure",
        &["Tower", "Windmill", "Lighthouse", "Bridge", "Ruins", "Mine"],
    ),
    (
        "Natural",
        &["Cave", "Hot Spring", "Waterfall", "Ancient Tree", "Cliff"],
    ),
    ("Dungeon", &["Dungeon Entrance", "Lair", "Tomb", "Portal"]),
    ("Other", &["Campsite", "Battlefield", "Shipwreck", "Obelisk"]),
];

/// One stored hex, keyed by its label
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HexRecord {
    pub label: String,
    pub ring: u32,
    #[serde(default)]
    pub terrain: Option<Terrain>,
    #[serde(default)]
    pub poi_type: Option<String>,
    #[serde(default)]
    pub poi_name: Option<String>,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub dangers: Vec<Danger>,
    #[serde(default)]
    pub factions: Vec<Faction>,
    #[serde(default)]
    pub resources: Resources,
    #[serde(default)]
    pub rumors: Vec<Rumor>,
    #[serde(default)]
    pub history_lore: String,
    #[serde(default)]
    pub status: HexStatus,
    #[serde(default)]
    pub notes: String,
    /// DM-only; stripped from the player view
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secrets: Option<String>,
    #[serde(default)]
    pub explored: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl HexRecord {
    /// A fresh, unexplored row
    pub fn blank(label: impl Into<String>, ring: u32, now: &str) -> Self {
        Self {
            label: label.into(),
            ring,
            terrain: None,
            poi_type: None,
            poi_name: None,
            features: Vec::new(),
            dangers: Vec::new(),
            factions: Vec::new(),
            resources: Resources::default(),
            rumors: Vec::new(),
            history_lore: String::new(),
            status: HexStatus::Unknown,
            notes: String::new(),
            secrets: None,
            explored: false,
            created_at: now.to_string(),
            updated_at: now.to_string(),
        }
    }

    /// Copy with DM-only fields stripped, for the player view
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        copy.secrets = None;
        copy
    }

    /// Whether anything meaningful has been recorded here; guards
    /// outer-ring removal
    pub fn is_populated(&self) -> bool {
        self.terrain.is_some() || self.poi_type.is_some() || self.explored
    }

    /// Boundary validation for records arriving from the outside
    pub fn validate(&self) -> Result<()> {
        for feature in &self.features {
            feature.validate()?;
        }
        Ok(())
    }
}
