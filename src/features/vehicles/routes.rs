use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::vehicles::handlers;
use crate::features::vehicles::services::{VehicleCompanyService, VehicleService};

/// Create routes for the vehicles feature
pub fn routes(companies: Arc<VehicleCompanyService>, vehicles: Arc<VehicleService>) -> Router {
    let company_routes = Router::new()
        .route(
            "/vehicle-companies",
            get(handlers::search_vehicle_companies).post(handlers::create_vehicle_company),
        )
        .route(
            "/vehicle-companies/{id}",
            get(handlers::get_vehicle_company)
                .put(handlers::update_vehicle_company)
                .delete(handlers::delete_vehicle_company),
        )
        .route(
            "/vehicle-companies/{id}/contacts",
            post(handlers::create_vehicle_company_contact),
        )
        .route(
            "/vehicle-company-contacts/{id}",
            put(handlers::update_vehicle_company_contact)
                .delete(handlers::delete_vehicle_company_contact),
        )
        .route(
            "/vehicle-companies/{id}/accounts",
            get(handlers::list_vehicle_accounts).post(handlers::create_vehicle_account),
        )
        .route(
            "/vehicle-companies/{id}/accounts/batch",
            post(handlers::edit_vehicle_accounts),
        )
        .route(
            "/vehicle-accounts/{id}",
            put(handlers::update_vehicle_account).delete(handlers::delete_vehicle_account),
        )
        .with_state(companies);

    let vehicle_routes = Router::new()
        .route(
            "/vehicle-types",
            get(handlers::search_vehicle_types).post(handlers::create_vehicle_type),
        )
        .route(
            "/vehicle-types/{id}",
            get(handlers::get_vehicle_type)
                .put(handlers::update_vehicle_type)
                .delete(handlers::delete_vehicle_type),
        )
        .route(
            "/vehicles",
            get(handlers::search_vehicles).post(handlers::create_vehicle),
        )
        .route(
            "/vehicles/{id}",
            get(handlers::get_vehicle)
                .put(handlers::update_vehicle)
                .delete(handlers::delete_vehicle),
        )
        .route(
            "/vehicle-fees",
            get(handlers::search_vehicle_fees).post(handlers::create_vehicle_fee),
        )
        .route(
            "/vehicle-fees/{id}",
            get(handlers::get_vehicle_fee)
                .put(handlers::update_vehicle_fee)
                .delete(handlers::delete_vehicle_fee),
        )
        .with_state(vehicles);

    Router::new().merge(company_routes).merge(vehicle_routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{envelope_code, lazy_pool, test_server};
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    fn server() -> axum_test::TestServer {
        let pool = lazy_pool();
        test_server(routes(
            Arc::new(VehicleCompanyService::new(pool.clone())),
            Arc::new(VehicleService::new(pool)),
        ))
    }

    #[tokio::test]
    async fn test_unknown_company_type_is_parameter_error() {
        let response = server()
            .post("/vehicle-companies")
            .json(&json!({
                "country_id": 1,
                "city_id": 1,
                "name": "蓝海车队",
                "name_en": "Blue Sea Fleet",
                "nickname_en": "BSF",
                "register_number": "PV 8812",
                "company_type": 3,
                "vehicle_number": 12
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope_code(&response.json::<Value>()), 2002);
    }

    #[tokio::test]
    async fn test_unknown_vehicle_type_filter_is_parameter_error() {
        let response = server().get("/vehicle-types?vehicle_type=8").await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope_code(&response.json::<Value>()), 2002);
    }

    #[tokio::test]
    async fn test_lowercase_license_is_validation_error() {
        let response = server()
            .post("/vehicles")
            .json(&json!({
                "country_id": 1,
                "city_id": 1,
                "company_id": 1,
                "vehicle_type_id": 1,
                "license": "cab-1234",
                "insurance_number": "SLIC-1",
                "start_use": "2020",
                "register_number": "R-1"
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope_code(&response.json::<Value>()), 2001);
    }

    #[tokio::test]
    async fn test_reversed_fee_period_is_validation_error() {
        let response = server()
            .put("/vehicle-fees/4")
            .json(&json!({
                "company_id": 1,
                "vehicle_type_id": 1,
                "unit_price": "1.200",
                "start_time": "2025-12-31T00:00:00Z",
                "end_time": "2025-01-01T00:00:00Z",
                "attachment_hash": "e3b0c44298fc1c149afbf4c8996fb924"
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope_code(&response.json::<Value>()), 2001);
    }

    #[tokio::test]
    async fn test_malformed_fee_time_filter_is_parameter_error() {
        let response = server().get("/vehicle-fees?start_time=yesterday").await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope_code(&response.json::<Value>()), 2002);
    }
}
