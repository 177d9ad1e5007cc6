pub mod request {
    use bigdecimal::BigDecimal;
    use serde::Deserialize;
    use validator::Validate;

    use crate::modules::restaurant::repository::Address;
    use crate::utils::validation::{delivery_fee_amount, non_blank};

    /// Payment methods are never touched; an omitted `endereco` keeps the
    /// stored address.
    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[serde(rename = "nome")]
        #[validate(
            length(max = 80),
            custom(code = "INVALID_RESTAURANT_NAME", function = "non_blank")
        )]
        pub name: String,
        #[serde(rename = "taxaFrete")]
        #[validate(custom(function = "delivery_fee_amount"))]
        pub delivery_fee: BigDecimal,
        #[serde(rename = "cozinhaId")]
        pub kitchen_id: i64,
        #[serde(rename = "endereco", default)]
        pub address: Option<Address>,
    }

    pub struct Payload {
        pub id: i64,
        pub body: Body,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::{modules::restaurant::repository::Restaurant, utils::validation};

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
        FailedToValidate(ValidationErrors),
        RestaurantNotFound,
        KitchenNotFound(i64),
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
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::RestaurantNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Restaurant not found" })),
                )
                    .into_response(),
                Self::KitchenNotFound(id) => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": format!("Kitchen with id {} does not exist", id) })),
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
