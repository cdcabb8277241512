use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::shops::dtos::{ShopDto, ShopFeeDto, ShopSearchQuery};
use crate::features::shops::models::{Shop, ShopFee};
use crate::features::shops::services::ShopService;
use crate::shared::types::{ApiResponse, SearchResult};

// ==================== Shop Handlers ====================

/// Search shops by location, company and type
#[utoipa::path(
    get,
    path = "/ota/api/v1/shops",
    params(ShopSearchQuery),
    responses(
        (status = 200, description = "Page of shops", body = ApiResponse<SearchResult<Shop>>),
        (status = 400, description = "Unknown shop_type")
    ),
    tag = "shops"
)]
pub async fn search_shops(
    State(service): State<Arc<ShopService>>,
    AppQuery(query): AppQuery<ShopSearchQuery>,
) -> Result<Json<ApiResponse<SearchResult<Shop>>>> {
    let page = service.search(&query).await?;
    Ok(Json(ApiResponse::success(page)))
}

#[utoipa::path(
    post,
    path = "/ota/api/v1/shops",
    request_body = ShopDto,
    responses(
        (status = 200, description = "Shop created", body = ApiResponse<Shop>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Country, city or company not found"),
        (status = 409, description = "Shop name or name_en duplicated")
    ),
    tag = "shops"
)]
pub async fn create_shop(
    State(service): State<Arc<ShopService>>,
    AppJson(dto): AppJson<ShopDto>,
) -> Result<Json<ApiResponse<Shop>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let shop = service.create(&dto).await?;
    Ok(Json(ApiResponse::success(shop)))
}

#[utoipa::path(
    get,
    path = "/ota/api/v1/shops/{id}",
    params(("id" = i32, Path, description = "Shop ID")),
    responses(
        (status = 200, description = "Shop", body = ApiResponse<Shop>),
        (status = 404, description = "Shop not found")
    ),
    tag = "shops"
)]
pub async fn get_shop(
    State(service): State<Arc<ShopService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<Shop>>> {
    let shop = service.get(id).await?;
    Ok(Json(ApiResponse::success(shop)))
}

#[utoipa::path(
    put,
    path = "/ota/api/v1/shops/{id}",
    params(("id" = i32, Path, description = "Shop ID")),
    request_body = ShopDto,
    responses(
        (status = 200, description = "Shop updated", body = ApiResponse<Shop>),
        (status = 404, description = "Shop, country, city or company not found"),
        (status = 409, description = "Shop name or name_en duplicated")
    ),
    tag = "shops"
)]
pub async fn update_shop(
    State(service): State<Arc<ShopService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<ShopDto>,
) -> Result<Json<ApiResponse<Shop>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let shop = service.update(id, &dto).await?;
    Ok(Json(ApiResponse::success(shop)))
}

/// Delete a shop with its fee agreement
#[utoipa::path(
    delete,
    path = "/ota/api/v1/shops/{id}",
    params(("id" = i32, Path, description = "Shop ID")),
    responses(
        (status = 200, description = "Shop deleted"),
        (status = 404, description = "Shop not found")
    ),
    tag = "shops"
)]
pub async fn delete_shop(
    State(service): State<Arc<ShopService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::ok()))
}

// ==================== Fee Handlers ====================

#[utoipa::path(
    get,
    path = "/ota/api/v1/shops/{id}/fee",
    params(("id" = i32, Path, description = "Shop ID")),
    responses(
        (status = 200, description = "Fee agreement of the shop", body = ApiResponse<ShopFee>),
        (status = 404, description = "Shop fee not found")
    ),
    tag = "shops"
)]
pub async fn get_shop_fee(
    State(service): State<Arc<ShopService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<ShopFee>>> {
    let fee = service.get_fee(id).await?;
    Ok(Json(ApiResponse::success(fee)))
}

#[utoipa::path(
    post,
    path = "/ota/api/v1/shops/{id}/fee",
    params(("id" = i32, Path, description = "Shop ID")),
    request_body = ShopFeeDto,
    responses(
        (status = 200, description = "Fee agreement created", body = ApiResponse<ShopFee>),
        (status = 404, description = "Shop not found"),
        (status = 409, description = "Shop already has a fee agreement")
    ),
    tag = "shops"
)]
pub async fn create_shop_fee(
    State(service): State<Arc<ShopService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<ShopFeeDto>,
) -> Result<Json<ApiResponse<ShopFee>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let fee = service.create_fee(id, &dto).await?;
    Ok(Json(ApiResponse::success(fee)))
}

#[utoipa::path(
    put,
    path = "/ota/api/v1/shop-fees/{id}",
    params(("id" = i32, Path, description = "Shop fee ID")),
    request_body = ShopFeeDto,
    responses(
        (status = 200, description = "Fee agreement updated", body = ApiResponse<ShopFee>),
        (status = 404, description = "Shop fee not found")
    ),
    tag = "shops"
)]
pub async fn update_shop_fee(
    State(service): State<Arc<ShopService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<ShopFeeDto>,
) -> Result<Json<ApiResponse<ShopFee>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let fee = service.update_fee(id, &dto).await?;
    Ok(Json(ApiResponse::success(fee)))
}

#[utoipa::path(
    delete,
    path = "/ota/api/v1/shop-fees/{id}",
    params(("id" = i32, Path, description = "Shop fee ID")),
    responses(
        (status = 200, description = "Fee agreement deleted"),
        (status = 404, description = "Shop fee not found")
    ),
    tag = "shops"
)]
pub async fn delete_shop_fee(
    State(service): State<Arc<ShopService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_fee(id).await?;
    Ok(Json(ApiResponse::ok()))
}
