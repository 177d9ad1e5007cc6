use super::types::{request, response};
use crate::{modules::restaurant::service as restaurant_service, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let mut restaurant = restaurant_service::find(&ctx, payload.id)
        .await
        .map_err(|_| response::Error::FailedToUpdateRestaurant)?
        .ok_or(response::Error::RestaurantNotFound)?;

    let body = payload.body;
    restaurant.name = body.name;
    restaurant.delivery_fee = body.delivery_fee;
    if let Some(address) = body.address {
        restaurant.address = Some(address);
    }

    restaurant_service::save(&ctx, restaurant, body.kitchen_id, None)
        .await
        .map(response::Success::RestaurantUpdated)
        .map_err(|err| match err {
            restaurant_service::Error::KitchenNotFound(id) => response::Error::KitchenNotFound(id),
            restaurant_service::Error::RestaurantNotFound => response::Error::RestaurantNotFound,
            _ => response::Error::FailedToUpdateRestaurant,
        })
}
