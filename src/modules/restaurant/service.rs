use super::repository::{
    self, Address, CreateRestaurantPayload, Filters, Restaurant, UpdateRestaurantPayload,
};
use crate::types::Context;
use bigdecimal::BigDecimal;

#[derive(Debug, PartialEq)]
pub enum Error {
    KitchenNotFound(i64),
    PaymentMethodNotFound(i64),
    RestaurantNotFound,
    RestaurantInUse,
    UnexpectedError,
}

impl From<repository::Error> for Error {
    fn from(err: repository::Error) -> Self {
        match err {
            repository::Error::NotFound => Self::RestaurantNotFound,
            repository::Error::InUse => Self::RestaurantInUse,
            repository::Error::UnexpectedError => Self::UnexpectedError,
        }
    }
}

pub struct NewRestaurant {
    pub name: String,
    pub delivery_fee: BigDecimal,
    pub address: Option<Address>,
}

async fn ensure_kitchen_exists(ctx: &Context, kitchen_id: i64) -> Result<(), Error> {
    ctx.kitchens
        .find_by_id(kitchen_id)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .map(|_| ())
        .ok_or(Error::KitchenNotFound(kitchen_id))
}

async fn ensure_payment_methods_exist(
    ctx: &Context,
    mut payment_method_ids: Vec<i64>,
) -> Result<Vec<i64>, Error> {
    payment_method_ids.sort_unstable();
    payment_method_ids.dedup();

    if payment_method_ids.is_empty() {
        return Ok(payment_method_ids);
    }

    let found = ctx
        .payment_methods
        .find_many_by_ids(&payment_method_ids)
        .await
        .map_err(|_| Error::UnexpectedError)?;

    match payment_method_ids
        .iter()
        .find(|id| !found.iter().any(|method| method.id == **id))
    {
        Some(missing) => Err(Error::PaymentMethodNotFound(*missing)),
        None => Ok(payment_method_ids),
    }
}

pub async fn list(ctx: &Context, filters: Filters) -> Result<Vec<Restaurant>, Error> {
    Ok(ctx.restaurants.find_many(filters).await?)
}

pub async fn find(ctx: &Context, id: i64) -> Result<Option<Restaurant>, Error> {
    Ok(ctx.restaurants.find_by_id(id).await?)
}

/// Registers a new restaurant. Nothing is persisted unless the kitchen and
/// every payment method exist.
pub async fn create(
    ctx: &Context,
    restaurant: NewRestaurant,
    kitchen_id: i64,
    payment_method_ids: Vec<i64>,
) -> Result<Restaurant, Error> {
    ensure_kitchen_exists(ctx, kitchen_id).await?;
    let payment_method_ids = ensure_payment_methods_exist(ctx, payment_method_ids).await?;

    let restaurant = ctx
        .restaurants
        .create(CreateRestaurantPayload {
            name: restaurant.name,
            delivery_fee: restaurant.delivery_fee,
            address: restaurant.address,
            kitchen_id,
            payment_method_ids,
        })
        .await?;

    tracing::info!("Restaurant {} registered", restaurant.id);

    Ok(restaurant)
}

/// Persists an existing restaurant under `kitchen_id`. Payment methods are
/// relinked only when `payment_method_ids` is given.
pub async fn save(
    ctx: &Context,
    restaurant: Restaurant,
    kitchen_id: i64,
    payment_method_ids: Option<Vec<i64>>,
) -> Result<Restaurant, Error> {
    ensure_kitchen_exists(ctx, kitchen_id).await?;
    let payment_method_ids = match payment_method_ids {
        Some(ids) => Some(ensure_payment_methods_exist(ctx, ids).await?),
        None => None,
    };

    Ok(ctx
        .restaurants
        .update_by_id(
            restaurant.id,
            UpdateRestaurantPayload {
                name: restaurant.name,
                delivery_fee: restaurant.delivery_fee,
                address: restaurant.address,
                kitchen_id,
                payment_method_ids,
            },
        )
        .await?)
}

pub async fn delete(ctx: &Context, id: i64) -> Result<(), Error> {
    ctx.restaurants.delete_by_id(id).await?;

    tracing::info!("Restaurant {} removed", id);

    Ok(())
}
