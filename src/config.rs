use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
};

use sqlx::postgres::PgConnectOptions;

/// The service listens on a fixed port; only the database is configurable.
pub const LISTEN_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8080);

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let db_host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
        let db_port = env::var("DB_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5432);
        let db_user = env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string());
        let db_password = env::var("DB_PASSWORD").unwrap_or_default();
        let db_name = env::var("DB_NAME").unwrap_or_else(|_| "model_registry".to_string());

        Ok(Self {
            db_host,
            db_port,
            db_user,
            db_password,
            db_name,
        })
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_password)
            .database(&self.db_name)
    }
}
