use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::restaurants::dtos::{RestaurantCompanyDto, RestaurantCompanySearchQuery};
use crate::features::restaurants::models::RestaurantCompany;
use crate::features::restaurants::services::RestaurantCompanyService;
use crate::shared::types::{ApiResponse, SearchResult};

#[utoipa::path(
    get,
    path = "/ota/api/v1/restaurant-companies",
    params(RestaurantCompanySearchQuery),
    responses(
        (status = 200, description = "Page of restaurant companies", body = ApiResponse<SearchResult<RestaurantCompany>>),
    ),
    tag = "restaurants"
)]
pub async fn search_restaurant_companies(
    State(service): State<Arc<RestaurantCompanyService>>,
    AppQuery(query): AppQuery<RestaurantCompanySearchQuery>,
) -> Result<Json<ApiResponse<SearchResult<RestaurantCompany>>>> {
    let page = service.search(&query).await?;
    Ok(Json(ApiResponse::success(page)))
}

#[utoipa::path(
    post,
    path = "/ota/api/v1/restaurant-companies",
    request_body = RestaurantCompanyDto,
    responses(
        (status = 200, description = "Restaurant company created", body = ApiResponse<RestaurantCompany>),
        (status = 400, description = "Invalid payload"),
        (status = 409, description = "Company name or name_en duplicated")
    ),
    tag = "restaurants"
)]
pub async fn create_restaurant_company(
    State(service): State<Arc<RestaurantCompanyService>>,
    AppJson(dto): AppJson<RestaurantCompanyDto>,
) -> Result<Json<ApiResponse<RestaurantCompany>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let company = service.create(&dto).await?;
    Ok(Json(ApiResponse::success(company)))
}

#[utoipa::path(
    get,
    path = "/ota/api/v1/restaurant-companies/{id}",
    params(("id" = i32, Path, description = "Restaurant company ID")),
    responses(
        (status = 200, description = "Restaurant company", body = ApiResponse<RestaurantCompany>),
        (status = 404, description = "Restaurant company not found")
    ),
    tag = "restaurants"
)]
pub async fn get_restaurant_company(
    State(service): State<Arc<RestaurantCompanyService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<RestaurantCompany>>> {
    let company = service.get(id).await?;
    Ok(Json(ApiResponse::success(company)))
}

#[utoipa::path(
    put,
    path = "/ota/api/v1/restaurant-companies/{id}",
    params(("id" = i32, Path, description = "Restaurant company ID")),
    request_body = RestaurantCompanyDto,
    responses(
        (status = 200, description = "Restaurant company updated", body = ApiResponse<RestaurantCompany>),
        (status = 404, description = "Restaurant company not found"),
        (status = 409, description = "Company name or name_en duplicated")
    ),
    tag = "restaurants"
)]
pub async fn update_restaurant_company(
    State(service): State<Arc<RestaurantCompanyService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<RestaurantCompanyDto>,
) -> Result<Json<ApiResponse<RestaurantCompany>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let company = service.update(id, &dto).await?;
    Ok(Json(ApiResponse::success(company)))
}

/// Delete a restaurant company; its restaurants are kept without a company
#[utoipa::path(
    delete,
    path = "/ota/api/v1/restaurant-companies/{id}",
    params(("id" = i32, Path, description = "Restaurant company ID")),
    responses(
        (status = 200, description = "Restaurant company deleted"),
        (status = 404, description = "Restaurant company not found")
    ),
    tag = "restaurants"
)]
pub async fn delete_restaurant_company(
    State(service): State<Arc<RestaurantCompanyService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::ok()))
}
