pub mod request {
    use bigdecimal::BigDecimal;
    use serde::Deserialize;
    use validator::Validate;

    use crate::modules::restaurant::repository::Address;
    use crate::utils::validation::{delivery_fee_amount, non_blank};

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
        #[serde(rename = "formasPagamento", default)]
        pub payment_method_ids: Vec<i64>,
        #[serde(rename = "endereco", default)]
        pub address: Option<Address>,
    }

    pub struct Payload {
        pub body: Body,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::{modules::restaurant::repository::Restaurant, utils::validation};

    pub enum Success {
        RestaurantCreated(Restaurant),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RestaurantCreated(restaurant) => {
                    (StatusCode::CREATED, Json(json!(restaurant))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToParse(String),
        FailedToValidate(ValidationErrors),
        KitchenNotFound(i64),
        PaymentMethodNotFound(i64),
        FailedToCreateRestaurant,
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
                Self::FailedToCreateRestaurant => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create restaurant" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
