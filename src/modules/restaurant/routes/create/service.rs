use super::types::{request, response};
use crate::{
    modules::restaurant::service::{self as restaurant_service, NewRestaurant},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let body = payload.body;

    restaurant_service::create(
        &ctx,
        NewRestaurant {
            name: body.name,
            delivery_fee: body.delivery_fee,
            address: body.address,
        },
        body.kitchen_id,
        body.payment_method_ids,
    )
    .await
    .map(response::Success::RestaurantCreated)
    .map_err(|err| match err {
        restaurant_service::Error::KitchenNotFound(id) => response::Error::KitchenNotFound(id),
        restaurant_service::Error::PaymentMethodNotFound(id) => {
            response::Error::PaymentMethodNotFound(id)
        }
        _ => response::Error::FailedToCreateRestaurant,
    })
}
