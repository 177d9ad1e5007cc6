pub mod request {
    /// Sparse field map, e.g. `{"taxaFrete": 12.5}`.
    pub type Fields = serde_json::Value;

    pub struct Payload {
        pub id: i64,
        pub fields: Fields,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::{
        modules::restaurant::{merge::MergeError, repository::Restaurant},
        utils::validation,
    };

    pub enum Success {
        RestaurantUpdated(Restaurant),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RestaurantUpdated(restaurant) => {
                    (StatusCode::OK, Json(json!(restaurant))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToParse(String),
        RestaurantNotFound,
        InvalidFields(MergeError),
        KitchenNotFound(i64),
        PaymentMethodNotFound(i64),
        FailedToUpdateRestaurant,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToParse(message) => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": message })),
                )
                    .into_response(),
                Self::RestaurantNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Restaurant not found" })),
                )
                    .into_response(),
                Self::InvalidFields(MergeError::Invalid(errors)) => {
                    validation::into_response(errors)
                }
                Self::InvalidFields(err) => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": err.to_string() })),
                )
                    .into_response(),
                Self::KitchenNotFound(id) => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": format!("Kitchen with id {} does not exist", id) })),
                )
                    .into_response(),
                Self::PaymentMethodNotFound(id) => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": format!("Payment method with id {} does not exist", id)
                    })),
                )
                    .into_response(),
                Self::FailedToUpdateRestaurant => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update restaurant" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
