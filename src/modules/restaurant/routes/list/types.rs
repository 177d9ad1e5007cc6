pub mod request {
    pub use crate::modules::restaurant::repository::Filters;

    pub struct Payload {
        pub filters: Filters,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::restaurant::repository::Restaurant;

    pub enum Success {
        Restaurants(Vec<Restaurant>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Restaurants(restaurants) => {
                    (StatusCode::OK, Json(json!(restaurants))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToParse(String),
        FailedToFetchRestaurants,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToParse(message) => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": message })),
                )
                    .into_response(),
                Self::FailedToFetchRestaurants => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch restaurants" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
