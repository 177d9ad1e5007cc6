use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct PaymentMethod {
    pub id: i64,
    #[serde(rename = "descricao", default)]
    pub description: String,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

#[async_trait]
pub trait PaymentMethodRepository: Send + Sync {
    /// Returns the payment methods among `ids` that exist, ordered by id.
    async fn find_many_by_ids(&self, ids: &[i64]) -> Result<Vec<PaymentMethod>, Error>;
}

pub struct PgPaymentMethodRepository {
    pool: PgPool,
}

impl PgPaymentMethodRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentMethodRepository for PgPaymentMethodRepository {
    async fn find_many_by_ids(&self, ids: &[i64]) -> Result<Vec<PaymentMethod>, Error> {
        sqlx::query_as::<_, PaymentMethod>(
            "SELECT id, description FROM payment_methods WHERE id = ANY($1) ORDER BY id",
        )
        .bind(ids.to_vec())
        .fetch_all(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while fetching payment methods {:?}: {}",
                ids,
                err
            );
            Error::UnexpectedError
        })
    }
}
