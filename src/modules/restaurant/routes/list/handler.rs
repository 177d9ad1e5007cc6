use super::service::service;
use super::types::{request, response};
use crate::types::Context;
use axum::extract::{rejection::QueryRejection, Query, State};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    filters: Result<Query<request::Filters>, QueryRejection>,
) -> response::Response {
    let Query(filters) = filters.map_err(|rejection| {
        tracing::warn!("Failed to parse restaurant filters: {rejection}");
        response::Error::FailedToParse(rejection.body_text())
    })?;

    service(ctx, request::Payload { filters }).await
}
