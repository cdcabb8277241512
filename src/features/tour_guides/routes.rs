use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::tour_guides::handlers;
use crate::features::tour_guides::services::TourGuideService;

/// Create routes for the tour guides feature
pub fn routes(service: Arc<TourGuideService>) -> Router {
    Router::new()
        .route(
            "/tour-guides",
            get(handlers::search_tour_guides).post(handlers::create_tour_guide),
        )
        .route(
            "/tour-guides/{id}",
            get(handlers::get_tour_guide)
                .put(handlers::update_tour_guide)
                .delete(handlers::delete_tour_guide),
        )
        .route(
            "/tour-guides/{id}/fee",
            get(handlers::get_tour_guide_fee).post(handlers::create_tour_guide_fee),
        )
        .route(
            "/tour-guide-fees/{id}",
            put(handlers::update_tour_guide_fee).delete(handlers::delete_tour_guide_fee),
        )
        .route(
            "/tour-guides/{id}/accounts",
            get(handlers::list_tour_guide_accounts).post(handlers::create_tour_guide_account),
        )
        .route(
            "/tour-guides/{id}/accounts/batch",
            post(handlers::edit_tour_guide_accounts),
        )
        .route(
            "/tour-guide-accounts/{id}",
            put(handlers::update_tour_guide_account).delete(handlers::delete_tour_guide_account),
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
        test_server(routes(Arc::new(TourGuideService::new(lazy_pool()))))
    }

    #[tokio::test]
    async fn test_unknown_guide_type_filter_is_parameter_error() {
        let response = server().get("/tour-guides?country_id=1&guide_type=4").await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope_code(&response.json::<Value>()), 2002);
    }

    #[tokio::test]
    async fn test_future_start_work_is_validation_error() {
        let response = server()
            .post("/tour-guides")
            .json(&json!({
                "guide_type": 1,
                "country_id": 1,
                "gender": 2,
                "birthday": "1990-01-01",
                "start_work": 3000,
                "language": "en",
                "certificate_type": 1,
                "certificate_number": "905551234V",
                "tour_guide_number": "G-77",
                "telephone": "0771234567",
                "intro": "Driver guide",
                "image_hash": "a1b2c3"
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope_code(&response.json::<Value>()), 2001);
    }

    #[tokio::test]
    async fn test_malformed_birthday_is_parameter_error() {
        let response = server()
            .put("/tour-guides/3")
            .json(&json!({
                "guide_type": 1,
                "country_id": 1,
                "gender": 2,
                "birthday": "01/01/1990",
                "start_work": 2015,
                "language": "en",
                "certificate_type": 1,
                "certificate_number": "905551234V",
                "tour_guide_number": "G-77",
                "telephone": "0771234567",
                "intro": "Driver guide",
                "image_hash": "a1b2c3"
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope_code(&response.json::<Value>()), 2002);
    }

    #[tokio::test]
    async fn test_unknown_service_type_is_parameter_error() {
        let response = server()
            .post("/tour-guides/1/fee")
            .json(&json!({
                "currency": 1,
                "base_fee": "50",
                "service_type": 3,
                "service_fee": "5"
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope_code(&response.json::<Value>()), 2002);
    }
}
