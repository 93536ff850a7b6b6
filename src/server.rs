use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{any, post},
};
use chrono::Utc;
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::{
    error::ServiceError,
    model::{MetadataStore, ModelMetadata, RegisterModelRequest},
    semver,
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MetadataStore>,
}

#[derive(Serialize)]
struct StatusResponse {
    status: &'static str,
}

pub fn build_router(store: Arc<MetadataStore>) -> Router {
    let state = AppState { store };

    Router::new()
        .route("/health", any(health))
        .route("/register", post(register_model))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

// Liveness only; never touches the store.
async fn health() -> Json<StatusResponse> {
    Json(StatusResponse { status: "okay" })
}

async fn register_model(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ServiceError> {
    let request: RegisterModelRequest = serde_json::from_slice(&body).map_err(|err| {
        warn!(error = %err, "rejected undecodable registration payload");
        ServiceError::InvalidPayload
    })?;

    semver::validate(&request.version)?;

    if request.created_at.is_some() {
        debug!("discarding client-supplied created_at");
    }
    let record = ModelMetadata::from_request(request, Utc::now());

    state.store.insert(&record).await?;

    info!(name = %record.name, version = %record.version, "model registered");

    Ok((
        StatusCode::CREATED,
        Json(StatusResponse {
            status: "Model registered successfully",
        }),
    ))
}
