use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::users::handlers;
use crate::features::users::services::UserService;

/// `/users/{key}` takes any lookup key on GET and a numeric id on PUT/DELETE
pub fn routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route("/users", post(handlers::create_user))
        .route(
            "/users/{key}",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{envelope_code, lazy_pool, test_server};
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    fn server() -> axum_test::TestServer {
        test_server(routes(Arc::new(UserService::new(lazy_pool()))))
    }

    #[tokio::test]
    async fn test_customer_without_address_is_validation_error() {
        let response = server()
            .post("/users")
            .json(&json!({
                "user_name": "galle_tours",
                "password": "harbour-view",
                "customer_name": "Galle Tours",
                "telephone": "0912234567"
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope_code(&response.json::<Value>()), 2001);
    }

    #[tokio::test]
    async fn test_lookup_by_id_requires_number() {
        let response = server().get("/users/galle_tours").await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope_code(&response.json::<Value>()), 2002);
    }

    #[tokio::test]
    async fn test_lookup_by_uuid_requires_uuid() {
        let response = server().get("/users/42?type=0").await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope_code(&response.json::<Value>()), 2002);
    }

    #[tokio::test]
    async fn test_unknown_lookup_type_is_parameter_error() {
        let response = server().get("/users/42?type=5").await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope_code(&response.json::<Value>()), 2002);
    }

    #[tokio::test]
    async fn test_update_requires_numeric_id() {
        let response = server()
            .put("/users/galle_tours")
            .json(&json!({ "telephone": "0912234568" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope_code(&response.json::<Value>()), 2002);
    }
}
