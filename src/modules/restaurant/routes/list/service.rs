use super::types::{request, response};
use crate::{modules::restaurant::service as restaurant_service, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    restaurant_service::list(&ctx, payload.filters)
        .await
        .map(response::Success::Restaurants)
        .map_err(|_| response::Error::FailedToFetchRestaurants)
}
