use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registration payload as supplied by the client. `created_at` is accepted
/// for wire compatibility but never trusted.
#[derive(Debug, Deserialize)]
pub struct RegisterModelRequest {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    pub model_path: String,
    pub container_location: String,
    pub metric_name: String,
    pub metric_value: f64,
    pub dataset_source: String,
}

/// Finalized record as persisted. `created_at` is always server-assigned.
#[derive(Debug, Clone, Serialize)]
pub struct ModelMetadata {
    pub name: String,
    pub version: String,
    pub created_at: DateTime<Utc>,
    pub model_path: String,
    pub container_location: String,
    pub metric_name: String,
    pub metric_value: f64,
    pub dataset_source: String,
}

impl ModelMetadata {
    pub fn from_request(request: RegisterModelRequest, created_at: DateTime<Utc>) -> Self {
        Self {
            name: request.name,
            version: request.version,
            created_at,
            model_path: request.model_path,
            container_location: request.container_location,
            metric_name: request.metric_name,
            metric_value: request.metric_value,
            dataset_source: request.dataset_source,
        }
    }
}
