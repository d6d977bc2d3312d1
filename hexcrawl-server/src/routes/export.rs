//! Export and import endpoints
//!
//! Exports are readable by anyone at the table but secrets only leave the
//! server for the DM. Import replaces the whole map and is DM-only.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{json, Value};

use crate::auth::{require_dm, role_from_headers, Role};
use crate::error::Result;
use crate::state::ServerState;
use crate::store::{ExportData, MapStore};

fn is_dm(state: &ServerState, headers: &HeaderMap) -> bool {
    role_from_headers(&state.auth, headers) == Some(Role::Dm)
}

pub async fn export_json(
    State(state): State<Arc<ServerState>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let dm = is_dm(&state, &headers);
    let data = {
        let store = state.store.read().unwrap();
        let data = store.to_export();
        if dm {
            data
        } else {
            data.redacted()
        }
    };

    (
        [(
            header::CONTENT_DISPOSITION,
            "attachment; filename=hexcrawl.json",
        )],
        Json(data),
    )
}

pub async fn export_csv(
    State(state): State<Arc<ServerState>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let dm = is_dm(&state, &headers);
    let csv = state.store.read().unwrap().export_csv(dm);

    (
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=hexcrawl.csv",
            ),
        ],
        csv,
    )
}

/// Replace the whole map from an export document
pub async fn import_json(
    State(state): State<Arc<ServerState>>,
    headers: HeaderMap,
    Json(data): Json<ExportData>,
) -> Result<Json<Value>> {
    require_dm(&state.auth, &headers)?;
    let imported = MapStore::from_export(data)?;
    {
        let mut store = state.store.write().unwrap();
        *store = imported;
    }
    state.persist();
    Ok(Json(json!({ "ok": true })))
}
