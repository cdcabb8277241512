use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::restaurants::handlers;
use crate::features::restaurants::services::{RestaurantCompanyService, RestaurantService};

/// Create routes for the restaurants feature
pub fn routes(
    companies: Arc<RestaurantCompanyService>,
    restaurants: Arc<RestaurantService>,
) -> Router {
    let company_routes = Router::new()
        .route(
            "/restaurant-companies",
            get(handlers::search_restaurant_companies).post(handlers::create_restaurant_company),
        )
        .route(
            "/restaurant-companies/{id}",
            get(handlers::get_restaurant_company)
                .put(handlers::update_restaurant_company)
                .delete(handlers::delete_restaurant_company),
        )
        .with_state(companies);

    let restaurant_routes = Router::new()
        .route(
            "/restaurants",
            get(handlers::search_restaurants).post(handlers::create_restaurant),
        )
        .route(
            "/restaurants/{id}",
            get(handlers::get_restaurant)
                .put(handlers::update_restaurant)
                .delete(handlers::delete_restaurant),
        )
        .route(
            "/restaurants/{id}/meals",
            get(handlers::list_restaurant_meals).post(handlers::create_restaurant_meal),
        )
        .route(
            "/restaurant-meals/{id}",
            get(handlers::get_restaurant_meal)
                .put(handlers::update_restaurant_meal)
                .delete(handlers::delete_restaurant_meal),
        )
        .route(
            "/restaurants/{id}/accounts",
            get(handlers::list_restaurant_accounts).post(handlers::create_restaurant_account),
        )
        .route(
            "/restaurants/{id}/accounts/batch",
            post(handlers::edit_restaurant_accounts),
        )
        .route(
            "/restaurant-accounts/{id}",
            put(handlers::update_restaurant_account).delete(handlers::delete_restaurant_account),
        )
        .with_state(restaurants);

    Router::new().merge(company_routes).merge(restaurant_routes)
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
            Arc::new(RestaurantCompanyService::new(pool.clone())),
            Arc::new(RestaurantService::new(pool)),
        ))
    }

    #[tokio::test]
    async fn test_restaurant_type_filter_must_be_known() {
        let response = server().get("/restaurants?restaurant_type=6").await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope_code(&response.json::<Value>()), 2002);
    }

    #[tokio::test]
    async fn test_create_meal_rejects_negative_fee() {
        let response = server()
            .post("/restaurants/3/meals")
            .json(&json!({
                "meal_type": 1,
                "adult_fee": "-5",
                "adult_cost": "10",
                "child_fee": "6",
                "child_cost": "4"
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope_code(&response.json::<Value>()), 2001);
    }

    #[tokio::test]
    async fn test_create_meal_rejects_unknown_meal_type() {
        let response = server()
            .post("/restaurants/3/meals")
            .json(&json!({
                "meal_type": 4,
                "adult_fee": "15",
                "adult_cost": "10",
                "child_fee": "6",
                "child_cost": "4"
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope_code(&response.json::<Value>()), 2002);
    }

    #[tokio::test]
    async fn test_restaurant_account_path_must_be_numeric() {
        let response = server().delete("/restaurant-accounts/x1").await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope_code(&response.json::<Value>()), 2002);
    }
}
