use super::{
    service::service,
    types::{request, response},
};
use crate::types::Context;
use axum::extract::{rejection::JsonRejection, Json, Path, State};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    Path(id): Path<i64>,
    fields: Result<Json<request::Fields>, JsonRejection>,
) -> response::Response {
    let Json(fields) = fields.map_err(|rejection| {
        tracing::warn!("Failed to parse restaurant fields: {rejection}");
        response::Error::FailedToParse(rejection.body_text())
    })?;

    service(ctx, request::Payload { id, fields }).await
}
