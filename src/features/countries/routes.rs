use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::countries::handlers;
use crate::features::countries::services::CountryService;

/// Create routes for the countries feature
pub fn routes(service: Arc<CountryService>) -> Router {
    Router::new()
        .route(
            "/countries",
            get(handlers::list_countries).post(handlers::create_country),
        )
        .route(
            "/countries/{id}",
            get(handlers::get_country)
                .put(handlers::update_country)
                .delete(handlers::delete_country),
        )
        .route("/countries/{id}/cities", get(handlers::list_cities))
        .route("/cities", post(handlers::create_city))
        .route(
            "/cities/{id}",
            get(handlers::get_city)
                .put(handlers::update_city)
                .delete(handlers::delete_city),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{envelope_code, lazy_pool, test_server};
    use axum::http::StatusCode;
    use serde_json::{json, Value};
    use sqlx::PgPool;

    fn server() -> axum_test::TestServer {
        test_server(routes(Arc::new(CountryService::new(lazy_pool()))))
    }

    fn db_server(pool: PgPool) -> axum_test::TestServer {
        test_server(routes(Arc::new(CountryService::new(pool))))
    }

    fn country(name: &str, name_en: &str) -> Value {
        json!({
            "name": name,
            "name_en": name_en,
            "nationality": "Sri Lankan",
            "language": "Sinhala",
            "area_code": "+94",
            "country_code": "LK"
        })
    }

    #[tokio::test]
    async fn test_create_country_rejects_malformed_json() {
        let response = server()
            .post("/countries")
            .bytes("{\"name\": ".into())
            .content_type("application/json")
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope_code(&response.json::<Value>()), 2002);
    }

    #[tokio::test]
    async fn test_create_country_rejects_invalid_payload() {
        let response = server()
            .post("/countries")
            .json(&json!({
                "name": "",
                "name_en": "Sri Lanka",
                "nationality": "Sri Lankan",
                "language": "Sinhala",
                "area_code": "+94",
                "country_code": "LK"
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body = response.json::<Value>();
        assert_eq!(envelope_code(&body), 2001);
        assert!(body["message"]
            .as_str()
            .unwrap()
            .starts_with("invalidate argument: "));
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_parameter_error() {
        let response = server().get("/cities/abc").await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body = response.json::<Value>();
        assert_eq!(envelope_code(&body), 2002);
        assert!(body["message"]
            .as_str()
            .unwrap()
            .starts_with("parameter error: "));
    }

    #[tokio::test]
    async fn test_create_city_rejects_long_abbreviation() {
        let response = server()
            .post("/cities")
            .json(&json!({
                "country_id": 1,
                "name": "康提",
                "name_en": "Kandy",
                "abbreviation": "KAND"
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope_code(&response.json::<Value>()), 2001);
    }

    #[tokio::test]
    async fn test_list_countries_rejects_page_out_of_range() {
        let response = server()
            .get("/countries?page=100000000000000000&number=100")
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope_code(&response.json::<Value>()), 2002);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_create_then_get_country(pool: PgPool) {
        let server = db_server(pool);

        let response = server
            .post("/countries")
            .json(&country("斯里兰卡", "Sri Lanka"))
            .await;
        response.assert_status_ok();
        let created = response.json::<Value>();
        assert_eq!(envelope_code(&created), 200);
        let id = created["data"]["id"].as_i64().unwrap();

        let response = server.get(&format!("/countries/{}", id)).await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["data"]["name_en"], "Sri Lanka");
        assert_eq!(body["data"]["area_code"], "+94");
        assert!(body["data"]["note"].is_null());
        assert_eq!(body["data"]["city_list"], json!([]));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_duplicate_country_name_is_conflict(pool: PgPool) {
        let server = db_server(pool);

        server
            .post("/countries")
            .json(&country("斯里兰卡", "Sri Lanka"))
            .await
            .assert_status_ok();

        let response = server
            .post("/countries")
            .json(&country("斯里兰卡", "Ceylon"))
            .await;
        assert_eq!(response.status_code(), StatusCode::CONFLICT);
        let body = response.json::<Value>();
        assert_eq!(envelope_code(&body), 3010);
        assert!(body["data"].is_null());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_total_only_on_first_page(pool: PgPool) {
        let server = db_server(pool);
        for (name, name_en) in [("斯里兰卡", "Sri Lanka"), ("马尔代夫", "Maldives"), ("尼泊尔", "Nepal")] {
            server
                .post("/countries")
                .json(&country(name, name_en))
                .await
                .assert_status_ok();
        }

        let response = server.get("/countries?page=1&number=2").await;
        response.assert_status_ok();
        let first = response.json::<Value>();
        assert_eq!(first["data"]["total"], 3);
        assert_eq!(first["data"]["items"].as_array().unwrap().len(), 2);
        assert_eq!(first["data"]["items"][0]["name_en"], "Sri Lanka");

        let response = server.get("/countries?page=2&number=2").await;
        response.assert_status_ok();
        let second = response.json::<Value>();
        assert!(second["data"].get("total").is_none());
        assert_eq!(second["data"]["items"].as_array().unwrap().len(), 1);
        assert_eq!(second["data"]["items"][0]["name_en"], "Nepal");
    }
}
