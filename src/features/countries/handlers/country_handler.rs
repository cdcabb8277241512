use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::countries::dtos::{CityDetailDto, CityDto, CountryDetailDto, CountryDto};
use crate::features::countries::models::{City, Country};
use crate::features::countries::services::CountryService;
use crate::shared::types::{ApiResponse, PaginationQuery, SearchResult};

// ==================== Country Handlers ====================

/// List countries, one page at a time
#[utoipa::path(
    get,
    path = "/ota/api/v1/countries",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Page of countries", body = ApiResponse<SearchResult<Country>>),
    ),
    tag = "countries"
)]
pub async fn list_countries(
    State(service): State<Arc<CountryService>>,
    AppQuery(query): AppQuery<PaginationQuery>,
) -> Result<Json<ApiResponse<SearchResult<Country>>>> {
    let page = service.list(&query).await?;
    Ok(Json(ApiResponse::success(page)))
}

/// Create a country
#[utoipa::path(
    post,
    path = "/ota/api/v1/countries",
    request_body = CountryDto,
    responses(
        (status = 200, description = "Country created", body = ApiResponse<Country>),
        (status = 400, description = "Invalid payload"),
        (status = 409, description = "Country name or name_en duplicated")
    ),
    tag = "countries"
)]
pub async fn create_country(
    State(service): State<Arc<CountryService>>,
    AppJson(dto): AppJson<CountryDto>,
) -> Result<Json<ApiResponse<Country>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let country = service.create(&dto).await?;
    Ok(Json(ApiResponse::success(country)))
}

/// Get a country with its cities
#[utoipa::path(
    get,
    path = "/ota/api/v1/countries/{id}",
    params(("id" = i32, Path, description = "Country ID")),
    responses(
        (status = 200, description = "Country with its cities", body = ApiResponse<CountryDetailDto>),
        (status = 404, description = "Country not found")
    ),
    tag = "countries"
)]
pub async fn get_country(
    State(service): State<Arc<CountryService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<CountryDetailDto>>> {
    let country = service.get(id).await?;
    Ok(Json(ApiResponse::success(country)))
}

/// Replace every field of a country
#[utoipa::path(
    put,
    path = "/ota/api/v1/countries/{id}",
    params(("id" = i32, Path, description = "Country ID")),
    request_body = CountryDto,
    responses(
        (status = 200, description = "Country updated", body = ApiResponse<Country>),
        (status = 404, description = "Country not found"),
        (status = 409, description = "Country name or name_en duplicated")
    ),
    tag = "countries"
)]
pub async fn update_country(
    State(service): State<Arc<CountryService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<CountryDto>,
) -> Result<Json<ApiResponse<Country>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let country = service.update(id, &dto).await?;
    Ok(Json(ApiResponse::success(country)))
}

/// Delete a country and its cities
#[utoipa::path(
    delete,
    path = "/ota/api/v1/countries/{id}",
    params(("id" = i32, Path, description = "Country ID")),
    responses(
        (status = 200, description = "Country deleted"),
        (status = 400, description = "Country still referenced"),
        (status = 404, description = "Country not found")
    ),
    tag = "countries"
)]
pub async fn delete_country(
    State(service): State<Arc<CountryService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::ok()))
}

/// List the cities of a country
#[utoipa::path(
    get,
    path = "/ota/api/v1/countries/{id}/cities",
    params(("id" = i32, Path, description = "Country ID")),
    responses(
        (status = 200, description = "Cities of the country", body = ApiResponse<Vec<City>>),
        (status = 404, description = "Country not found")
    ),
    tag = "countries"
)]
pub async fn list_cities(
    State(service): State<Arc<CountryService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<Vec<City>>>> {
    let cities = service.list_cities(id).await?;
    Ok(Json(ApiResponse::success(cities)))
}

// ==================== City Handlers ====================

/// Create a city
#[utoipa::path(
    post,
    path = "/ota/api/v1/cities",
    request_body = CityDto,
    responses(
        (status = 200, description = "City created", body = ApiResponse<City>),
        (status = 404, description = "Country not found"),
        (status = 409, description = "City name or name_en duplicated")
    ),
    tag = "countries"
)]
pub async fn create_city(
    State(service): State<Arc<CountryService>>,
    AppJson(dto): AppJson<CityDto>,
) -> Result<Json<ApiResponse<City>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let city = service.create_city(&dto).await?;
    Ok(Json(ApiResponse::success(city)))
}

/// Get a city with its country
#[utoipa::path(
    get,
    path = "/ota/api/v1/cities/{id}",
    params(("id" = i32, Path, description = "City ID")),
    responses(
        (status = 200, description = "City details", body = ApiResponse<CityDetailDto>),
        (status = 404, description = "City not found")
    ),
    tag = "countries"
)]
pub async fn get_city(
    State(service): State<Arc<CountryService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<CityDetailDto>>> {
    let city = service.get_city(id).await?;
    Ok(Json(ApiResponse::success(city)))
}

/// Replace every field of a city
#[utoipa::path(
    put,
    path = "/ota/api/v1/cities/{id}",
    params(("id" = i32, Path, description = "City ID")),
    request_body = CityDto,
    responses(
        (status = 200, description = "City updated", body = ApiResponse<City>),
        (status = 404, description = "City or country not found"),
        (status = 409, description = "City name or name_en duplicated")
    ),
    tag = "countries"
)]
pub async fn update_city(
    State(service): State<Arc<CountryService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<CityDto>,
) -> Result<Json<ApiResponse<City>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let city = service.update_city(id, &dto).await?;
    Ok(Json(ApiResponse::success(city)))
}

/// Delete a city
#[utoipa::path(
    delete,
    path = "/ota/api/v1/cities/{id}",
    params(("id" = i32, Path, description = "City ID")),
    responses(
        (status = 200, description = "City deleted"),
        (status = 400, description = "City still referenced"),
        (status = 404, description = "City not found")
    ),
    tag = "countries"
)]
pub async fn delete_city(
    State(service): State<Arc<CountryService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_city(id).await?;
    Ok(Json(ApiResponse::ok()))
}
