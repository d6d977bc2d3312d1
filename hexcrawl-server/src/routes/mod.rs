//! HTTP route handlers

pub mod auth;
pub mod export;
pub mod hexes;
pub mod layout;
pub mod meta;
pub mod palette;
pub mod rings;
pub mod status;
