use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// A cuisine a restaurant is registered under. Clients reference it by id,
/// so the name is optional on input.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct Kitchen {
    pub id: i64,
    #[serde(rename = "nome", default)]
    pub name: String,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

#[async_trait]
pub trait KitchenRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Kitchen>, Error>;
}

pub struct PgKitchenRepository {
    pool: PgPool,
}

impl PgKitchenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KitchenRepository for PgKitchenRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Kitchen>, Error> {
        sqlx::query_as::<_, Kitchen>("SELECT id, name FROM kitchens WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!(
                    "Error occurred while fetching kitchen with id {}: {}",
                    id,
                    err
                );
                Error::UnexpectedError
            })
    }
}
