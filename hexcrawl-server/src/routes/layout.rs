//! Layout endpoint: laid-out hexes for the renderer
//!
//! The same shared geometry the storage side uses, so tiles and rows can
//! never disagree about which hexes exist.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use hexcrawl_core::{build_layout, LaidOutHex, DEFAULT_HEX_SIZE};

use crate::error::Result;
use crate::state::ServerState;

#[derive(Deserialize)]
pub struct LayoutParams {
    /// Defaults to the stored ring count
    pub rings: Option<u32>,
    /// Hex radius in pixels
    pub size: Option<f64>,
}

pub async fn get_layout(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<LayoutParams>,
) -> Result<Json<Vec<LaidOutHex>>> {
    let rings = match params.rings {
        Some(rings) => rings,
        None => state.store.read().unwrap().ring_count()?,
    };
    let size = params.size.unwrap_or(DEFAULT_HEX_SIZE);
    Ok(Json(build_layout(rings, size)?))
}
