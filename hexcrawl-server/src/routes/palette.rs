//! Palette and taxonomy endpoint
//!
//! Serves the immutable vocabulary tables the map UI draws from, so the
//! client never hardcodes its own copy.

use axum::Json;
use serde_json::{json, Value};

use hexcrawl_core::content::{
    DangerCategory, DangerSeverity, FeatureKind, HexStatus, ResourceKind, Terrain, POI_CATEGORIES,
};

pub async fn get_palette() -> Json<Value> {
    let terrain: Vec<Value> = Terrain::ALL
        .iter()
        .map(|t| json!({ "name": t.name(), "color": t.color() }))
        .collect();

    let status: Vec<Value> = HexStatus::ALL
        .iter()
        .map(|s| json!({ "name": s.name(), "color": s.color() }))
        .collect();

    let poi_categories: Vec<Value> = POI_CATEGORIES
        .iter()
        .map(|(category, kinds)| json!({ "category": category, "kinds": kinds }))
        .collect();

    Json(json!({
        "terrain": terrain,
        "status": status,
        "poi_categories": poi_categories,
        "feature_kinds": FeatureKind::ALL,
        "danger_categories": DangerCategory::ALL,
        "danger_severities": DangerSeverity::ALL,
        "resource_kinds": ResourceKind::ALL,
    }))
}
