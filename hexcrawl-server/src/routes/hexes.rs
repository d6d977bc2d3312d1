//! Hex CRUD and audit history
//!
//! Reads work without credentials but only the DM sees secrets; writes
//! require a role, and player writes cannot touch DM-only fields.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use hexcrawl_core::HexRecord;

use crate::auth::{require_auth, role_from_headers, Role};
use crate::error::{ApiError, Result};
use crate::state::ServerState;
use crate::store::{HexPatch, HistoryEntry};

fn is_dm(state: &ServerState, headers: &HeaderMap) -> bool {
    role_from_headers(&state.auth, headers) == Some(Role::Dm)
}

/// All hexes, ordered by (ring, label)
pub async fn list_hexes(
    State(state): State<Arc<ServerState>>,
    headers: HeaderMap,
) -> Json<Vec<HexRecord>> {
    let dm = is_dm(&state, &headers);
    let store = state.store.read().unwrap();
    let hexes = store
        .all_sorted()
        .into_iter()
        .map(|h| if dm { h.clone() } else { h.redacted() })
        .collect();
    Json(hexes)
}

pub async fn get_hex(
    State(state): State<Arc<ServerState>>,
    Path(label): Path<String>,
    headers: HeaderMap,
) -> Result<Json<HexRecord>> {
    let dm = is_dm(&state, &headers);
    let store = state.store.read().unwrap();
    let hex = store
        .get(&label)
        .ok_or_else(|| ApiError::NotFound(format!("no hex {label}")))?;
    Ok(Json(if dm { hex.clone() } else { hex.redacted() }))
}

/// Patch a hex. Returns the updated record, redacted for players.
pub async fn update_hex(
    State(state): State<Arc<ServerState>>,
    Path(label): Path<String>,
    headers: HeaderMap,
    Json(patch): Json<HexPatch>,
) -> Result<Json<HexRecord>> {
    let role = require_auth(&state.auth, &headers)?;
    let patch = if role.is_dm() {
        patch
    } else {
        patch.without_secrets()
    };

    let updated = {
        let mut store = state.store.write().unwrap();
        store.update_hex(&label, patch)?
    };
    state.persist();

    Ok(Json(if role.is_dm() {
        updated
    } else {
        updated.redacted()
    }))
}

/// Audit entries for one hex, newest first
pub async fn hex_history(
    State(state): State<Arc<ServerState>>,
    Path(label): Path<String>,
    headers: HeaderMap,
) -> Json<Vec<HistoryEntry>> {
    let dm = is_dm(&state, &headers);
    let store = state.store.read().unwrap();
    Json(store.history_for(&label, dm))
}
