use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::hotels::dtos::{
    HotelCompanyDetailDto, HotelCompanyDto, HotelCompanySearchQuery,
};
use crate::features::hotels::models::{HotelCompany, HotelCompanyContact};
use crate::features::hotels::services::HotelCompanyService;
use crate::shared::contact::ContactDto;
use crate::shared::types::{ApiResponse, SearchResult};

/// Search hotel companies by location
#[utoipa::path(
    get,
    path = "/ota/api/v1/hotel-companies",
    params(HotelCompanySearchQuery),
    responses(
        (status = 200, description = "Page of hotel companies", body = ApiResponse<SearchResult<HotelCompany>>),
    ),
    tag = "hotels"
)]
pub async fn search_hotel_companies(
    State(service): State<Arc<HotelCompanyService>>,
    AppQuery(query): AppQuery<HotelCompanySearchQuery>,
) -> Result<Json<ApiResponse<SearchResult<HotelCompany>>>> {
    let page = service.search(&query).await?;
    Ok(Json(ApiResponse::success(page)))
}

/// Create a hotel company
#[utoipa::path(
    post,
    path = "/ota/api/v1/hotel-companies",
    request_body = HotelCompanyDto,
    responses(
        (status = 200, description = "Hotel company created", body = ApiResponse<HotelCompany>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Country or city not found"),
        (status = 409, description = "Company name or name_en duplicated")
    ),
    tag = "hotels"
)]
pub async fn create_hotel_company(
    State(service): State<Arc<HotelCompanyService>>,
    AppJson(dto): AppJson<HotelCompanyDto>,
) -> Result<Json<ApiResponse<HotelCompany>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let company = service.create(&dto).await?;
    Ok(Json(ApiResponse::success(company)))
}

/// Get a hotel company with its contacts
#[utoipa::path(
    get,
    path = "/ota/api/v1/hotel-companies/{id}",
    params(("id" = i32, Path, description = "Hotel company ID")),
    responses(
        (status = 200, description = "Hotel company with contacts", body = ApiResponse<HotelCompanyDetailDto>),
        (status = 404, description = "Hotel company not found")
    ),
    tag = "hotels"
)]
pub async fn get_hotel_company(
    State(service): State<Arc<HotelCompanyService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<HotelCompanyDetailDto>>> {
    let company = service.get(id).await?;
    Ok(Json(ApiResponse::success(company)))
}

/// Replace every field of a hotel company
#[utoipa::path(
    put,
    path = "/ota/api/v1/hotel-companies/{id}",
    params(("id" = i32, Path, description = "Hotel company ID")),
    request_body = HotelCompanyDto,
    responses(
        (status = 200, description = "Hotel company updated", body = ApiResponse<HotelCompany>),
        (status = 404, description = "Hotel company, country or city not found"),
        (status = 409, description = "Company name or name_en duplicated")
    ),
    tag = "hotels"
)]
pub async fn update_hotel_company(
    State(service): State<Arc<HotelCompanyService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<HotelCompanyDto>,
) -> Result<Json<ApiResponse<HotelCompany>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let company = service.update(id, &dto).await?;
    Ok(Json(ApiResponse::success(company)))
}

/// Delete a hotel company with its contacts and hotels
#[utoipa::path(
    delete,
    path = "/ota/api/v1/hotel-companies/{id}",
    params(("id" = i32, Path, description = "Hotel company ID")),
    responses(
        (status = 200, description = "Hotel company deleted"),
        (status = 404, description = "Hotel company not found")
    ),
    tag = "hotels"
)]
pub async fn delete_hotel_company(
    State(service): State<Arc<HotelCompanyService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::ok()))
}

/// Add a contact person to a hotel company
#[utoipa::path(
    post,
    path = "/ota/api/v1/hotel-companies/{id}/contacts",
    params(("id" = i32, Path, description = "Hotel company ID")),
    request_body = ContactDto,
    responses(
        (status = 200, description = "Contact created", body = ApiResponse<HotelCompanyContact>),
        (status = 404, description = "Hotel company not found")
    ),
    tag = "hotels"
)]
pub async fn create_hotel_company_contact(
    State(service): State<Arc<HotelCompanyService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<ContactDto>,
) -> Result<Json<ApiResponse<HotelCompanyContact>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let contact = service.create_contact(id, &dto).await?;
    Ok(Json(ApiResponse::success(contact)))
}

#[utoipa::path(
    put,
    path = "/ota/api/v1/hotel-company-contacts/{id}",
    params(("id" = i32, Path, description = "Contact ID")),
    request_body = ContactDto,
    responses(
        (status = 200, description = "Contact updated", body = ApiResponse<HotelCompanyContact>),
        (status = 404, description = "Contact not found")
    ),
    tag = "hotels"
)]
pub async fn update_hotel_company_contact(
    State(service): State<Arc<HotelCompanyService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<ContactDto>,
) -> Result<Json<ApiResponse<HotelCompanyContact>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let contact = service.update_contact(id, &dto).await?;
    Ok(Json(ApiResponse::success(contact)))
}

#[utoipa::path(
    delete,
    path = "/ota/api/v1/hotel-company-contacts/{id}",
    params(("id" = i32, Path, description = "Contact ID")),
    responses(
        (status = 200, description = "Contact deleted"),
        (status = 404, description = "Contact not found")
    ),
    tag = "hotels"
)]
pub async fn delete_hotel_company_contact(
    State(service): State<Arc<HotelCompanyService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_contact(id).await?;
    Ok(Json(ApiResponse::ok()))
}
