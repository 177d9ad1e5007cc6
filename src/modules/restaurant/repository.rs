use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{PgExecutor, PgPool, Postgres, Transaction};

use crate::modules::{kitchen::repository::Kitchen, payment_method::repository::PaymentMethod};
use crate::utils::database;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Address {
    #[serde(rename = "cep")]
    pub postal_code: String,
    #[serde(rename = "logradouro")]
    pub street: String,
    #[serde(rename = "numero")]
    pub number: String,
    #[serde(rename = "complemento", default)]
    pub complement: Option<String>,
    #[serde(rename = "bairro")]
    pub district: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Restaurant {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "taxaFrete")]
    pub delivery_fee: BigDecimal,
    #[serde(rename = "cozinha")]
    pub kitchen: Kitchen,
    #[serde(rename = "formasPagamento", default)]
    pub payment_methods: Vec<PaymentMethod>,
    #[serde(rename = "endereco", default)]
    pub address: Option<Address>,
    #[serde(rename = "dataCadastro")]
    pub created_at: NaiveDateTime,
    #[serde(rename = "dataAtualizacao", default)]
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(sqlx::FromRow)]
struct RestaurantRow {
    id: i64,
    name: String,
    delivery_fee: BigDecimal,
    kitchen: Json<Kitchen>,
    payment_methods: Json<Vec<PaymentMethod>>,
    address: Option<Json<Address>>,
    created_at: NaiveDateTime,
    updated_at: Option<NaiveDateTime>,
}

impl From<RestaurantRow> for Restaurant {
    fn from(row: RestaurantRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            delivery_fee: row.delivery_fee,
            kitchen: row.kitchen.0,
            payment_methods: row.payment_methods.0,
            address: row.address.map(|address| address.0),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Deserialize, Default, Clone, Debug)]
pub struct Filters {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "taxaFreteInicial")]
    pub min_delivery_fee: Option<BigDecimal>,
    #[serde(rename = "taxaFreteFinal")]
    pub max_delivery_fee: Option<BigDecimal>,
}

impl Filters {
    /// Name matches are case-insensitive substrings; fee bounds are inclusive.
    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        let name_matches = self.name.as_ref().map_or(true, |name| {
            restaurant
                .name
                .to_lowercase()
                .contains(&name.to_lowercase())
        });
        let above_min = self
            .min_delivery_fee
            .as_ref()
            .map_or(true, |min| restaurant.delivery_fee >= *min);
        let below_max = self
            .max_delivery_fee
            .as_ref()
            .map_or(true, |max| restaurant.delivery_fee <= *max);

        name_matches && above_min && below_max
    }
}

pub struct CreateRestaurantPayload {
    pub name: String,
    pub delivery_fee: BigDecimal,
    pub address: Option<Address>,
    pub kitchen_id: i64,
    pub payment_method_ids: Vec<i64>,
}

pub struct UpdateRestaurantPayload {
    pub name: String,
    pub delivery_fee: BigDecimal,
    pub address: Option<Address>,
    pub kitchen_id: i64,
    /// `None` leaves the current payment methods linked.
    pub payment_method_ids: Option<Vec<i64>>,
}

#[derive(Debug, PartialEq)]
pub enum Error {
    NotFound,
    InUse,
    UnexpectedError,
}

#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    async fn find_many(&self, filters: Filters) -> Result<Vec<Restaurant>, Error>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Restaurant>, Error>;
    async fn create(&self, payload: CreateRestaurantPayload) -> Result<Restaurant, Error>;
    async fn update_by_id(
        &self,
        id: i64,
        payload: UpdateRestaurantPayload,
    ) -> Result<Restaurant, Error>;
    async fn delete_by_id(&self, id: i64) -> Result<(), Error>;
}

const SELECT_RESTAURANTS: &str = "
    SELECT
        restaurants.id,
        restaurants.name,
        restaurants.delivery_fee,
        JSONB_BUILD_OBJECT('id', kitchens.id, 'nome', kitchens.name) AS kitchen,
        COALESCE(
            (
                SELECT
                    JSONB_AGG(
                        JSONB_BUILD_OBJECT(
                            'id', payment_methods.id,
                            'descricao', payment_methods.description
                        )
                        ORDER BY payment_methods.id
                    )
                FROM restaurant_payment_methods
                INNER JOIN payment_methods
                ON
                    payment_methods.id = restaurant_payment_methods.payment_method_id
                WHERE
                    restaurant_payment_methods.restaurant_id = restaurants.id
            ),
            '[]'::jsonb
        ) AS payment_methods,
        restaurants.address,
        restaurants.created_at,
        restaurants.updated_at
    FROM restaurants
    INNER JOIN kitchens
    ON
        kitchens.id = restaurants.kitchen_id
";

pub struct PgRestaurantRepository {
    pool: PgPool,
}

impl PgRestaurantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn begin(&self) -> Result<Transaction<'static, Postgres>, Error> {
        self.pool.begin().await.map_err(|err| {
            tracing::error!("Failed to start database transaction: {}", err);
            Error::UnexpectedError
        })
    }
}

async fn fetch_by_id<'e, E: PgExecutor<'e>>(e: E, id: i64) -> Result<Option<Restaurant>, Error> {
    sqlx::query_as::<_, RestaurantRow>(&format!(
        "{SELECT_RESTAURANTS} WHERE restaurants.id = $1"
    ))
    .bind(id)
    .fetch_optional(e)
    .await
    .map(|row| row.map(Restaurant::from))
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching restaurant with id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

async fn link_payment_methods(
    tx: &mut Transaction<'_, Postgres>,
    restaurant_id: i64,
    payment_method_ids: &[i64],
) -> Result<(), Error> {
    sqlx::query("DELETE FROM restaurant_payment_methods WHERE restaurant_id = $1")
        .bind(restaurant_id)
        .execute(&mut **tx)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while unlinking payment methods of restaurant {}: {}",
                restaurant_id,
                err
            );
            Error::UnexpectedError
        })?;

    sqlx::query(
        "
            INSERT INTO restaurant_payment_methods (restaurant_id, payment_method_id)
            SELECT $1, payment_method_id
            FROM UNNEST($2::BIGINT[]) AS payment_method_id
            ON CONFLICT DO NOTHING
        ",
    )
    .bind(restaurant_id)
    .bind(payment_method_ids.to_vec())
    .execute(&mut **tx)
    .await
    .map(|_| ())
    .map_err(|err| {
        tracing::error!(
            "Error occurred while linking payment methods to restaurant {}: {}",
            restaurant_id,
            err
        );
        Error::UnexpectedError
    })
}

async fn commit(tx: Transaction<'_, Postgres>) -> Result<(), Error> {
    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        Error::UnexpectedError
    })
}

#[async_trait]
impl RestaurantRepository for PgRestaurantRepository {
    async fn find_many(&self, filters: Filters) -> Result<Vec<Restaurant>, Error> {
        sqlx::query_as::<_, RestaurantRow>(&format!(
            "
                {SELECT_RESTAURANTS}
                WHERE
                    ($1::TEXT IS NULL OR restaurants.name ILIKE CONCAT('%', $1::TEXT, '%'))
                    AND ($2::NUMERIC IS NULL OR restaurants.delivery_fee >= $2::NUMERIC)
                    AND ($3::NUMERIC IS NULL OR restaurants.delivery_fee <= $3::NUMERIC)
                ORDER BY restaurants.id
            "
        ))
        .bind(filters.name)
        .bind(filters.min_delivery_fee)
        .bind(filters.max_delivery_fee)
        .fetch_all(&self.pool)
        .await
        .map(|rows| rows.into_iter().map(Restaurant::from).collect())
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch many restaurants: {}", err);
            Error::UnexpectedError
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Restaurant>, Error> {
        fetch_by_id(&self.pool, id).await
    }

    async fn create(&self, payload: CreateRestaurantPayload) -> Result<Restaurant, Error> {
        let mut tx = self.begin().await?;

        let id = sqlx::query_scalar::<_, i64>(
            "
                INSERT INTO restaurants (name, delivery_fee, kitchen_id, address)
                VALUES ($1, $2, $3, $4)
                RETURNING id
            ",
        )
        .bind(payload.name)
        .bind(payload.delivery_fee)
        .bind(payload.kitchen_id)
        .bind(payload.address.map(Json))
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to create a restaurant: {}", err);
            Error::UnexpectedError
        })?;

        link_payment_methods(&mut tx, id, &payload.payment_method_ids).await?;

        let restaurant = fetch_by_id(&mut *tx, id)
            .await?
            .ok_or(Error::UnexpectedError)?;

        commit(tx).await?;

        Ok(restaurant)
    }

    async fn update_by_id(
        &self,
        id: i64,
        payload: UpdateRestaurantPayload,
    ) -> Result<Restaurant, Error> {
        let mut tx = self.begin().await?;

        let result = sqlx::query(
            "
                UPDATE restaurants SET
                    name = $1,
                    delivery_fee = $2,
                    kitchen_id = $3,
                    address = $4,
                    updated_at = NOW()
                WHERE
                    id = $5
            ",
        )
        .bind(payload.name)
        .bind(payload.delivery_fee)
        .bind(payload.kitchen_id)
        .bind(payload.address.map(Json))
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to update restaurant by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound);
        }

        if let Some(payment_method_ids) = payload.payment_method_ids {
            link_payment_methods(&mut tx, id, &payment_method_ids).await?;
        }

        let restaurant = fetch_by_id(&mut *tx, id)
            .await?
            .ok_or(Error::UnexpectedError)?;

        commit(tx).await?;

        Ok(restaurant)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), Error> {
        match sqlx::query("DELETE FROM restaurants WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
        {
            Ok(result) if result.rows_affected() == 0 => Err(Error::NotFound),
            Ok(_) => Ok(()),
            Err(err) if database::is_foreign_key_violation(&err) => {
                tracing::warn!("Restaurant {} is still referenced: {}", id, err);
                Err(Error::InUse)
            }
            Err(err) => {
                tracing::error!(
                    "Error occurred while trying to delete restaurant by id {}: {}",
                    id,
                    err
                );
                Err(Error::UnexpectedError)
            }
        }
    }
}
