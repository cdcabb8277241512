use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::attractions::handlers;
use crate::features::attractions::services::AttractionService;

/// Create routes for the attractions feature
pub fn routes(service: Arc<AttractionService>) -> Router {
    Router::new()
        .route(
            "/attractions",
            get(handlers::search_attractions).post(handlers::create_attraction),
        )
        .route(
            "/attractions/{id}",
            get(handlers::get_attraction)
                .put(handlers::update_attraction)
                .delete(handlers::delete_attraction),
        )
        .route(
            "/attractions/{id}/fee",
            get(handlers::get_attraction_fee).post(handlers::create_attraction_fee),
        )
        .route(
            "/attraction-fees/{id}",
            put(handlers::update_attraction_fee).delete(handlers::delete_attraction_fee),
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
        test_server(routes(Arc::new(AttractionService::new(lazy_pool()))))
    }

    #[tokio::test]
    async fn test_create_attraction_requires_address() {
        let response = server()
            .post("/attractions")
            .json(&json!({
                "country_id": 1,
                "city_id": 2,
                "address": "",
                "name": "佛牙寺",
                "name_en": "Temple of the Tooth",
                "nickname_en": "Dalada Maligawa"
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope_code(&response.json::<Value>()), 2001);
    }

    #[tokio::test]
    async fn test_negative_price_is_validation_error() {
        let response = server()
            .put("/attraction-fees/2")
            .json(&json!({
                "public_price": "-1",
                "company_price": "25",
                "tour_guide_price": "0",
                "translator_price": "0",
                "free_policy": 0,
                "child_discount": "0.5"
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope_code(&response.json::<Value>()), 2001);
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_parameter_error() {
        let response = server().get("/attractions/sigiriya/fee").await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope_code(&response.json::<Value>()), 2002);
    }
}
