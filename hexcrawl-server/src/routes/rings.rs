//! Ring add/remove endpoints
//!
//! Adding a ring is insert-if-absent against the generated labels, so
//! repeated or racing requests cannot duplicate rows. Removing the outer
//! ring destroys data and is DM-only, gated by a confirmation round-trip.

use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::{require_auth, require_dm};
use crate::error::Result;
use crate::state::ServerState;
use crate::store::RemoveOutcome;

pub async fn add_ring(
    State(state): State<Arc<ServerState>>,
    headers: HeaderMap,
) -> Result<Json<Value>> {
    require_auth(&state.auth, &headers)?;
    let ring_count = {
        let mut store = state.store.write().unwrap();
        store.add_ring()?
    };
    state.persist();
    Ok(Json(json!({ "ring_count": ring_count })))
}

#[derive(Deserialize)]
pub struct RemoveRequest {
    #[serde(default)]
    pub confirm: bool,
}

pub async fn remove_ring(
    State(state): State<Arc<ServerState>>,
    headers: HeaderMap,
    Json(req): Json<RemoveRequest>,
) -> Result<Json<Value>> {
    require_dm(&state.auth, &headers)?;
    let outcome = {
        let mut store = state.store.write().unwrap();
        store.remove_outer_ring(req.confirm)?
    };

    match outcome {
        RemoveOutcome::Preview {
            ring,
            populated_count,
            needs_confirm,
        } => Ok(Json(json!({
            "ring": ring,
            "populated_count": populated_count,
            "needs_confirm": needs_confirm,
        }))),
        RemoveOutcome::Removed { ring } => {
            state.persist();
            Ok(Json(json!({ "ok": true, "removed_ring": ring })))
        }
    }
}
