pub mod request {
    pub struct Payload {
        pub id: i64,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        RestaurantDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RestaurantDeleted => StatusCode::NO_CONTENT.into_response(),
            }
        }
    }

    pub enum Error {
        RestaurantNotFound,
        RestaurantInUse,
        FailedToDeleteRestaurant,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RestaurantNotFound => StatusCode::NOT_FOUND.into_response(),
                Self::RestaurantInUse => StatusCode::CONFLICT.into_response(),
                Self::FailedToDeleteRestaurant => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to delete restaurant" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
