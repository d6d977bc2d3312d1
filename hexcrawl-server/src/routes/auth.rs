//! Login endpoint: password in, role out

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{ApiError, Result};
use crate::state::ServerState;

#[derive(Deserialize)]
pub struct AuthRequest {
    pub password: String,
}

pub async fn authenticate(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<AuthRequest>,
) -> Result<Json<Value>> {
    let role = state
        .auth
        .role_for(&req.password)
        .ok_or(ApiError::Unauthorized)?;
    Ok(Json(json!({ "role": role })))
}
