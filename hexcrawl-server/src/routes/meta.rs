//! Map metadata endpoints

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde_json::{json, Value};

use crate::auth::require_auth;
use crate::error::Result;
use crate::state::ServerState;

pub async fn get_meta(State(state): State<Arc<ServerState>>) -> Json<BTreeMap<String, String>> {
    let store = state.store.read().unwrap();
    Json(store.meta().clone())
}

pub async fn update_meta(
    State(state): State<Arc<ServerState>>,
    headers: HeaderMap,
    Json(updates): Json<BTreeMap<String, String>>,
) -> Result<Json<Value>> {
    require_auth(&state.auth, &headers)?;
    {
        let mut store = state.store.write().unwrap();
        store.set_meta(updates)?;
    }
    state.persist();
    Ok(Json(json!({ "ok": true })))
}
