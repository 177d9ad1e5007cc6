use super::service::service;
use super::types::{request, response};
use crate::types::Context;
use axum::extract::{rejection::JsonRejection, Json, State};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    body: Result<Json<request::Body>, JsonRejection>,
) -> response::Response {
    let Json(body) = body.map_err(|rejection| {
        tracing::warn!("Failed to parse restaurant body: {rejection}");
        response::Error::FailedToParse(rejection.body_text())
    })?;

    service(ctx, request::Payload { body }).await
}
