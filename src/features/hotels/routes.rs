use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::hotels::handlers;
use crate::features::hotels::services::{HotelCompanyService, HotelFeeService, HotelService};

/// Create routes for the hotels feature
pub fn routes(
    companies: Arc<HotelCompanyService>,
    hotels: Arc<HotelService>,
    fees: Arc<HotelFeeService>,
) -> Router {
    let company_routes = Router::new()
        .route(
            "/hotel-companies",
            get(handlers::search_hotel_companies).post(handlers::create_hotel_company),
        )
        .route(
            "/hotel-companies/{id}",
            get(handlers::get_hotel_company)
                .put(handlers::update_hotel_company)
                .delete(handlers::delete_hotel_company),
        )
        .route(
            "/hotel-companies/{id}/contacts",
            post(handlers::create_hotel_company_contact),
        )
        .route(
            "/hotel-company-contacts/{id}",
            put(handlers::update_hotel_company_contact).delete(handlers::delete_hotel_company_contact),
        )
        .with_state(companies);

    let hotel_routes = Router::new()
        .route(
            "/hotels",
            get(handlers::search_hotels).post(handlers::create_hotel),
        )
        .route(
            "/hotels/{id}",
            get(handlers::get_hotel)
                .put(handlers::update_hotel)
                .delete(handlers::delete_hotel),
        )
        .route("/hotels/{id}/contacts", post(handlers::create_hotel_contact))
        .route(
            "/hotel-contacts/{id}",
            put(handlers::update_hotel_contact).delete(handlers::delete_hotel_contact),
        )
        .route(
            "/hotels/{id}/accounts",
            get(handlers::list_hotel_accounts).post(handlers::create_hotel_account),
        )
        .route(
            "/hotels/{id}/accounts/batch",
            post(handlers::edit_hotel_accounts),
        )
        .route(
            "/hotel-accounts/{id}",
            put(handlers::update_hotel_account).delete(handlers::delete_hotel_account),
        )
        .with_state(hotels);

    let fee_routes = Router::new()
        .route(
            "/hotels/{id}/fees",
            get(handlers::list_hotel_fees).post(handlers::create_hotel_fee),
        )
        .route(
            "/hotel-fees/{id}",
            get(handlers::get_hotel_fee)
                .put(handlers::update_hotel_fee)
                .delete(handlers::delete_hotel_fee),
        )
        .route(
            "/hotel-fees/{id}/room-prices/batch",
            post(handlers::edit_room_prices),
        )
        .route(
            "/hotel-fees/{id}/meal-prices/batch",
            post(handlers::edit_meal_prices),
        )
        .route(
            "/hotel-fees/{id}/room-additional-charges/batch",
            post(handlers::edit_room_additional_charges),
        )
        .route(
            "/hotel-fees/{id}/festival-additional-charges/batch",
            post(handlers::edit_festival_additional_charges),
        )
        .with_state(fees);

    Router::new()
        .merge(company_routes)
        .merge(hotel_routes)
        .merge(fee_routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{
        count_rows, envelope_code, lazy_pool, seed_location, test_server,
    };
    use axum::http::StatusCode;
    use serde_json::{json, Value};
    use sqlx::PgPool;

    fn server_with(pool: PgPool) -> axum_test::TestServer {
        test_server(routes(
            Arc::new(HotelCompanyService::new(pool.clone())),
            Arc::new(HotelService::new(pool.clone())),
            Arc::new(HotelFeeService::new(pool)),
        ))
    }

    fn server() -> axum_test::TestServer {
        server_with(lazy_pool())
    }

    fn account(number: &str) -> Value {
        json!({
            "currency": 3,
            "bank_name": "Bank of Ceylon",
            "deposit_bank": "Kandy",
            "payee": "Earl's Regency",
            "account": number
        })
    }

    /// Create a company with one hotel under it and return `(company_id, hotel_id)`
    async fn seed_hotel(server: &axum_test::TestServer, country_id: i32, city_id: i32) -> (i64, i64) {
        let response = server
            .post("/hotel-companies")
            .json(&json!({
                "country_id": country_id,
                "city_id": city_id,
                "name": "约翰基尔斯酒店",
                "name_en": "John Keells Hotels",
                "nickname_en": "JKH",
                "register_number": "PQ 14"
            }))
            .await;
        response.assert_status_ok();
        let company_id = response.json::<Value>()["data"]["id"].as_i64().unwrap();

        let response = server
            .post("/hotels")
            .json(&json!({
                "country_id": country_id,
                "city_id": city_id,
                "company_id": company_id,
                "address": "Tennekumbura, Kandy",
                "name": "伯爵丽晶酒店",
                "name_en": "Earl's Regency",
                "nickname_en": "Regency",
                "star_level": 5,
                "comment_level": 4,
                "standard_room_number": 80,
                "standard_double_room_number": 40,
                "triple_room_number": 10,
                "suite_room_number": 5,
                "tour_guide_room_number": 2,
                "start_year": 2004,
                "telephone": "+94 81 242 2122",
                "email": "front@earlsregency.lk"
            }))
            .await;
        response.assert_status_ok();
        let hotel_id = response.json::<Value>()["data"]["id"].as_i64().unwrap();

        (company_id, hotel_id)
    }

    #[tokio::test]
    async fn test_create_hotel_rejects_malformed_json() {
        let response = server()
            .post("/hotels")
            .bytes("{\"name\": \"Galle".into())
            .content_type("application/json")
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope_code(&response.json::<Value>()), 2002);
    }

    #[tokio::test]
    async fn test_create_hotel_company_rejects_blank_name() {
        let response = server()
            .post("/hotel-companies")
            .json(&json!({
                "country_id": 1,
                "city_id": 1,
                "name": "",
                "name_en": "John Keells Hotels",
                "nickname_en": "JKH",
                "register_number": "PQ 14"
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope_code(&response.json::<Value>()), 2001);
    }

    #[tokio::test]
    async fn test_star_level_filter_out_of_range() {
        let response = server().get("/hotels?star_level=9").await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope_code(&response.json::<Value>()), 2002);
    }

    #[tokio::test]
    async fn test_room_price_batch_rejects_reversed_period() {
        let response = server()
            .post("/hotel-fees/1/room-prices/batch")
            .json(&json!({
                "create_list": [{
                    "room_type": 1,
                    "start_time": "2024-12-31T00:00:00Z",
                    "end_time": "2024-01-01T00:00:00Z",
                    "price": "120.000"
                }]
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope_code(&response.json::<Value>()), 2001);
    }

    #[tokio::test]
    async fn test_account_batch_rejects_bad_account_row() {
        let response = server()
            .post("/hotels/1/accounts/batch")
            .json(&json!({
                "update_list": [{
                    "id": 4,
                    "currency": 1,
                    "bank_name": "",
                    "deposit_bank": "Kandy",
                    "payee": "Earl's Regency",
                    "account": "8800112233"
                }]
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope_code(&response.json::<Value>()), 2001);
    }

    #[tokio::test]
    async fn test_hotel_fee_path_must_be_numeric() {
        let response = server().get("/hotel-fees/first").await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(envelope_code(&response.json::<Value>()), 2002);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_delete_company_removes_hotels_fees_and_prices(pool: PgPool) {
        let (country_id, city_id) = seed_location(&pool).await;
        let server = server_with(pool.clone());
        let (company_id, hotel_id) = seed_hotel(&server, country_id, city_id).await;

        server
            .post(&format!("/hotels/{}/accounts", hotel_id))
            .json(&account("8800112233"))
            .await
            .assert_status_ok();

        let response = server
            .post(&format!("/hotels/{}/fees", hotel_id))
            .json(&json!({ "confirm_person": "Nimal Perera" }))
            .await;
        response.assert_status_ok();
        let fee_id = response.json::<Value>()["data"]["id"].as_i64().unwrap();

        let response = server
            .post(&format!("/hotel-fees/{}/room-prices/batch", fee_id))
            .json(&json!({
                "create_list": [
                    {
                        "room_type": 1,
                        "start_time": "2024-01-01T00:00:00Z",
                        "end_time": "2024-06-30T00:00:00Z",
                        "price": "120.000"
                    },
                    {
                        "room_type": 2,
                        "start_time": "2024-01-01T00:00:00Z",
                        "end_time": "2024-06-30T00:00:00Z",
                        "price": "150.000"
                    }
                ]
            }))
            .await;
        response.assert_status_ok();
        assert_eq!(count_rows(&pool, "hotel_room_prices").await, 2);

        server
            .delete(&format!("/hotel-companies/{}", company_id))
            .await
            .assert_status_ok();

        for table in [
            "hotel_companies",
            "hotels",
            "hotel_accounts",
            "hotel_fees",
            "hotel_room_prices",
        ] {
            assert_eq!(count_rows(&pool, table).await, 0, "{} not emptied", table);
        }

        let response = server.get(&format!("/hotels/{}", hotel_id)).await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(envelope_code(&response.json::<Value>()), 3043);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_account_batch_with_duplicate_row_changes_nothing(pool: PgPool) {
        let (country_id, city_id) = seed_location(&pool).await;
        let server = server_with(pool.clone());
        let (_, hotel_id) = seed_hotel(&server, country_id, city_id).await;

        let response = server
            .post(&format!("/hotels/{}/accounts", hotel_id))
            .json(&account("8800112233"))
            .await;
        response.assert_status_ok();
        let account_id = response.json::<Value>()["data"]["id"].as_i64().unwrap();

        let response = server
            .post(&format!("/hotels/{}/accounts/batch", hotel_id))
            .json(&json!({
                "delete_id_list": [account_id],
                "create_list": [account("7700445566"), account("7700445566")]
            }))
            .await;
        assert_eq!(response.status_code(), StatusCode::CONFLICT);
        assert_eq!(envelope_code(&response.json::<Value>()), 3044);

        let response = server.get(&format!("/hotels/{}/accounts", hotel_id)).await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        let accounts = body["data"].as_array().unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0]["id"], account_id);
        assert_eq!(accounts[0]["account"], "8800112233");
    }
}
