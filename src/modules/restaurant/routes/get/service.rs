use super::types::{request, response};
use crate::{modules::restaurant::service as restaurant_service, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    restaurant_service::find(&ctx, payload.id)
        .await
        .map_err(|_| response::Error::FailedToFetchRestaurant)?
        .ok_or(response::Error::RestaurantNotFound)
        .map(response::Success::Restaurant)
}
