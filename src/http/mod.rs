// src/http/mod.rs
//! HTTP surface of the registry.
//!
//! | Method | Path                 | Success                   |
//! |--------|----------------------|---------------------------|
//! | GET    | `/`                  | 200 plain text            |
//! | GET    | `/api/airdrops`      | 200 `[airdrop]`           |
//! | POST   | `/api/airdrops`      | 201 `{message, airdrop}`  |
//! | PUT    | `/api/airdrops/{id}` | 200 `{message, airdrop}`  |
//! | DELETE | `/api/airdrops/{id}` | 200 `{message}`           |
//!
//! Errors come back as `{error}` with the status from `RegistryError::status`;
//! unmatched routes as `{error, message}` with 404.

pub mod extract;
pub mod handlers;
pub mod server;

use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::store::AirdropStore;

pub type SharedStore = Arc<AirdropStore>;

pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route(
            "/api/airdrops",
            get(handlers::list_airdrops).post(handlers::create_airdrop),
        )
        .route(
            "/api/airdrops/{id}",
            put(handlers::update_airdrop).delete(handlers::delete_airdrop),
        )
        .fallback(handlers::not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}
