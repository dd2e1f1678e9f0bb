// src/http/handlers.rs

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use serde_json::json;

use super::{
    extract::{AirdropId, JsonBody},
    SharedStore,
};
use crate::airdrop::{AirdropPatch, AirdropView, NewAirdrop};
use crate::config::consts::HOME_TEXT;
use crate::error::RegistryResult;

#[derive(Debug, Serialize)]
pub struct AirdropEnvelope {
    pub message: &'static str,
    pub airdrop: AirdropView,
}

pub async fn home() -> &'static str {
    HOME_TEXT
}

pub async fn list_airdrops(State(store): State<SharedStore>) -> RegistryResult<Json<Vec<AirdropView>>> {
    let airdrops = store.list()?;
    logd!("Listing {} airdrop(s)", airdrops.len());
    Ok(Json(airdrops))
}

pub async fn create_airdrop(
    State(store): State<SharedStore>,
    JsonBody(body): JsonBody<NewAirdrop>,
) -> RegistryResult<(StatusCode, Json<AirdropEnvelope>)> {
    let airdrop = store.create(body.validate()?)?;
    Ok((
        StatusCode::CREATED,
        Json(AirdropEnvelope { message: "Airdrop added successfully", airdrop }),
    ))
}

pub async fn update_airdrop(
    State(store): State<SharedStore>,
    AirdropId(id): AirdropId,
    JsonBody(body): JsonBody<AirdropPatch>,
) -> RegistryResult<Json<AirdropEnvelope>> {
    let airdrop = store.update(id, body)?;
    Ok(Json(AirdropEnvelope { message: "Airdrop updated successfully", airdrop }))
}

pub async fn delete_airdrop(
    State(store): State<SharedStore>,
    AirdropId(id): AirdropId,
) -> RegistryResult<impl IntoResponse> {
    store.delete(id)?;
    Ok(Json(json!({ "message": "Airdrop deleted successfully" })))
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Not Found",
            "message": "The requested URL was not found on the server.",
        })),
    )
}
