pub use crate::utils::database;
use crate::modules::{
    kitchen::repository::{KitchenRepository, PgKitchenRepository},
    payment_method::repository::{PaymentMethodRepository, PgPaymentMethodRepository},
    restaurant::repository::{PgRestaurantRepository, RestaurantRepository},
};
use async_trait::async_trait;
use std::env;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub port: u16,
    pub url: String,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub restaurants: Arc<dyn RestaurantRepository>,
    pub kitchens: Arc<dyn KitchenRepository>,
    pub payment_methods: Arc<dyn PaymentMethodRepository>,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub url: String,
}

#[derive(Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
    #[error("Invalid PORT number: {0}")]
    InvalidPort(String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let raw_port = env::var("PORT").unwrap_or_else(|_| "8000".to_string());
        let port = raw_port
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(raw_port.clone()))?;
        let url = env::var("URL").unwrap_or_else(|_| format!("http://{}:{}", host, port));

        Ok(Self {
            database: DatabaseConfig { url: database_url },
            app: AppConfig { host, port, url },
        })
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, database::Error>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, database::Error> {
        let db_conn = database::connect(self.database.url.as_str()).await?;
        database::migrate(&db_conn).await?;

        Ok(Context {
            app: AppContext {
                host: self.app.host,
                port: self.app.port,
                url: self.app.url,
            },
            restaurants: Arc::new(PgRestaurantRepository::new(db_conn.pool.clone())),
            kitchens: Arc::new(PgKitchenRepository::new(db_conn.pool.clone())),
            payment_methods: Arc::new(PgPaymentMethodRepository::new(db_conn.pool)),
        })
    }
}
