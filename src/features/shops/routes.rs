use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::shops::handlers;
use crate::features::shops::services::{ShopCompanyService, ShopService};

/// Create routes for the shops feature
pub fn routes(companies: Arc<ShopCompanyService>, shops: Arc<ShopService>) -> Router {
    let company_routes = Router::new()
        .route(
            "/shop-companies",
            get(handlers::search_shop_companies).post(handlers::create_shop_company),
        )
        .route(
            "/shop-companies/{id}",
            get(handlers::get_shop_company)
                .put(handlers::update_shop_company)
                .delete(handlers::delete_shop_company),
        )
        .route(
            "/shop-companies/{id}/contacts",
            post(handlers::create_shop_company_contact),
        )
        .route(
            "/shop-company-contacts/{id}",
            put(handlers::update_shop_company_contact).delete(handlers::delete_shop_company_contact),
        )
        .with_state(companies);

    let shop_routes = Router::new()
        .route("/shops", get(handlers::search_shops).post(handlers::create_shop))
        .route(
            "/shops/{id}",
            get(handlers::get_shop)
                .put(handlers::update_shop)
                .delete(handlers::delete_shop),
        )
        .route(
            "/shops/{id}/fee",
            get(handlers::get_shop_fee).post(handlers::create_shop_fee),
        )
        .route(
            "/shop-fees/{id}",
            put(handlers::update_shop_fee).delete(handlers::delete_shop_fee),
        )
        .with_state(shops);

    Router::new().merge(company_routes).merge(shop_routes)
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
            Arc::new(ShopCompanyService::new(pool.clone())),
            Arc::new(ShopService::new(pool)),
        ))
    }

    #[tokio::test]
    async fn test_invalid_shop_type_is_parameter_error() {
        let response = server().get("/shops?city_id=2&shop_type=7").await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body = response.json::<Value>();
        assert_eq!(envelope_code(&body), 2002);
        assert!(body["message"]
            .as_str()
            .unwrap()
            .starts_with("parameter error: "));
    }

    #[tokio::test]
    async fn test_non_numeric_shop_type_is_parameter_error() {
        let response = server().get("/shops?shop_type=tea").await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope_code(&response.json::<Value>()), 2002);
    }

    #[tokio::test]
    async fn test_create_fee_rejects_ratio_out_of_range() {
        let response = server()
            .post("/shops/1/fee")
            .json(&json!({
                "fee_person": "3",
                "company_ratio": "0.2",
                "tour_guide_ratio": "1.5",
                "account_period": 1,
                "account_way": 1
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope_code(&response.json::<Value>()), 2001);
    }

    #[tokio::test]
    async fn test_create_shop_company_requires_intro() {
        let response = server()
            .post("/shop-companies")
            .json(&json!({
                "country_id": 1,
                "city_id": 1,
                "name": "锡兰宝石集团",
                "name_en": "Ceylon Gems Group",
                "nickname_en": "CGG",
                "register_number": "PV 1021",
                "intro": ""
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope_code(&response.json::<Value>()), 2001);
    }
}
