use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::{config::AppConfig, error::ServiceError, model::ModelMetadata};

/// Handle to the `model_metadata` table. One pool for the process lifetime,
/// injected into the router state at startup.
pub struct MetadataStore {
    pool: PgPool,
}

impl MetadataStore {
    /// Builds the pool without touching the network; the configured store is
    /// first reached when a registration is persisted.
    pub fn connect(config: &AppConfig) -> Self {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_lazy_with(config.connect_options());
        Self { pool }
    }

    pub async fn insert(&self, record: &ModelMetadata) -> Result<(), ServiceError> {
        sqlx::query(
            "INSERT INTO model_metadata \
             (name, version, created_at, model_path, container_location, metric_name, metric_value, dataset_source) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(&record.name)
        .bind(&record.version)
        .bind(record.created_at)
        .bind(&record.model_path)
        .bind(&record.container_location)
        .bind(&record.metric_name)
        .bind(record.metric_value)
        .bind(&record.dataset_source)
        .execute(&self.pool)
        .await
        .map(|_| ())
        .map_err(|err| match err {
            // Errors reported by the server mean the connection was fine but
            // the row was not written.
            sqlx::Error::Database(_) => ServiceError::Insert(err),
            _ => ServiceError::Connection(err),
        })
    }
}
