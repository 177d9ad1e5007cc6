use super::types::{request, response};
use crate::{
    modules::restaurant::{merge, service as restaurant_service},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut restaurant = restaurant_service::find(&ctx, payload.id)
        .await
        .map_err(|_| response::Error::FailedToUpdateRestaurant)?
        .ok_or(response::Error::RestaurantNotFound)?;

    merge::merge(&payload.fields, &mut restaurant).map_err(|err| {
        tracing::warn!("Rejected partial update of restaurant {}: {err}", payload.id);
        response::Error::InvalidFields(err)
    })?;

    let kitchen_id = restaurant.kitchen.id;
    let payment_method_ids = payload
        .fields
        .get(merge::PAYMENT_METHODS_FIELD)
        .map(|_| restaurant.payment_methods.iter().map(|method| method.id).collect());

    restaurant_service::save(&ctx, restaurant, kitchen_id, payment_method_ids)
        .await
        .map(response::Success::RestaurantUpdated)
        .map_err(|err| match err {
            restaurant_service::Error::KitchenNotFound(id) => response::Error::KitchenNotFound(id),
            restaurant_service::Error::PaymentMethodNotFound(id) => {
                response::Error::PaymentMethodNotFound(id)
            }
            restaurant_service::Error::RestaurantNotFound => response::Error::RestaurantNotFound,
            _ => response::Error::FailedToUpdateRestaurant,
        })
}
