pub mod config;
pub mod error;
pub mod model;
pub mod semver;
pub mod server;

pub use config::{AppConfig, LISTEN_ADDR};
pub use model::{MetadataStore, ModelMetadata, RegisterModelRequest};
pub use server::build_router;
