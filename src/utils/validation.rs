use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bigdecimal::BigDecimal;
use serde_json::json;
use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

pub fn into_response(errors: ValidationErrors) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
}

pub fn non_blank(value: &str) -> Result<(), ValidationError> {
    match value.trim().is_empty() {
        false => Ok(()),
        true => Err(ValidationError::new("BLANK").with_message(Cow::from("Must not be blank"))),
    }
}

/// Delivery fees are stored as `NUMERIC(10, 2)`.
pub fn delivery_fee_amount(value: &BigDecimal) -> Result<(), ValidationError> {
    if *value < BigDecimal::from(0) {
        return Err(ValidationError::new("NEGATIVE")
            .with_message(Cow::from("Must be greater than or equal to zero")));
    }
    if value.with_scale(2) != *value {
        return Err(ValidationError::new("TOO_PRECISE")
            .with_message(Cow::from("Must have at most two decimal places")));
    }
    if *value >= BigDecimal::from(100_000_000) {
        return Err(ValidationError::new("TOO_LARGE")
            .with_message(Cow::from("Must be less than 100000000")));
    }

    Ok(())
}
