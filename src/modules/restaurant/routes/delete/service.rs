use super::types::{request, response};
use crate::{modules::restaurant::service as restaurant_service, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    restaurant_service::delete(&ctx, payload.id)
        .await
        .map(|_| response::Success::RestaurantDeleted)
        .map_err(|err| match err {
            restaurant_service::Error::RestaurantNotFound => response::Error::RestaurantNotFound,
            restaurant_service::Error::RestaurantInUse => response::Error::RestaurantInUse,
            _ => response::Error::FailedToDeleteRestaurant,
        })
}
