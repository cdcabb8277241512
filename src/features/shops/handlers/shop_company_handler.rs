use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::shops::dtos::{ShopCompanyDetailDto, ShopCompanyDto, ShopCompanySearchQuery};
use crate::features::shops::models::{ShopCompany, ShopCompanyContact};
use crate::features::shops::services::ShopCompanyService;
use crate::shared::contact::ContactDto;
use crate::shared::types::{ApiResponse, SearchResult};

/// Search shop companies by name
#[utoipa::path(
    get,
    path = "/ota/api/v1/shop-companies",
    params(ShopCompanySearchQuery),
    responses(
        (status = 200, description = "Page of shop companies", body = ApiResponse<SearchResult<ShopCompany>>),
    ),
    tag = "shops"
)]
pub async fn search_shop_companies(
    State(service): State<Arc<ShopCompanyService>>,
    AppQuery(query): AppQuery<ShopCompanySearchQuery>,
) -> Result<Json<ApiResponse<SearchResult<ShopCompany>>>> {
    let page = service.search(&query).await?;
    Ok(Json(ApiResponse::success(page)))
}

#[utoipa::path(
    post,
    path = "/ota/api/v1/shop-companies",
    request_body = ShopCompanyDto,
    responses(
        (status = 200, description = "Shop company created", body = ApiResponse<ShopCompany>),
        (status = 400, description = "Invalid payload"),
        (status = 409, description = "Company name or name_en duplicated")
    ),
    tag = "shops"
)]
pub async fn create_shop_company(
    State(service): State<Arc<ShopCompanyService>>,
    AppJson(dto): AppJson<ShopCompanyDto>,
) -> Result<Json<ApiResponse<ShopCompany>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let company = service.create(&dto).await?;
    Ok(Json(ApiResponse::success(company)))
}

#[utoipa::path(
    get,
    path = "/ota/api/v1/shop-companies/{id}",
    params(("id" = i32, Path, description = "Shop company ID")),
    responses(
        (status = 200, description = "Shop company with contacts", body = ApiResponse<ShopCompanyDetailDto>),
        (status = 404, description = "Shop company not found")
    ),
    tag = "shops"
)]
pub async fn get_shop_company(
    State(service): State<Arc<ShopCompanyService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<ShopCompanyDetailDto>>> {
    let company = service.get(id).await?;
    Ok(Json(ApiResponse::success(company)))
}

#[utoipa::path(
    put,
    path = "/ota/api/v1/shop-companies/{id}",
    params(("id" = i32, Path, description = "Shop company ID")),
    request_body = ShopCompanyDto,
    responses(
        (status = 200, description = "Shop company updated", body = ApiResponse<ShopCompany>),
        (status = 404, description = "Shop company not found"),
        (status = 409, description = "Company name or name_en duplicated")
    ),
    tag = "shops"
)]
pub async fn update_shop_company(
    State(service): State<Arc<ShopCompanyService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<ShopCompanyDto>,
) -> Result<Json<ApiResponse<ShopCompany>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let company = service.update(id, &dto).await?;
    Ok(Json(ApiResponse::success(company)))
}

#[utoipa::path(
    delete,
    path = "/ota/api/v1/shop-companies/{id}",
    params(("id" = i32, Path, description = "Shop company ID")),
    responses(
        (status = 200, description = "Shop company deleted"),
        (status = 404, description = "Shop company not found")
    ),
    tag = "shops"
)]
pub async fn delete_shop_company(
    State(service): State<Arc<ShopCompanyService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::ok()))
}

#[utoipa::path(
    post,
    path = "/ota/api/v1/shop-companies/{id}/contacts",
    params(("id" = i32, Path, description = "Shop company ID")),
    request_body = ContactDto,
    responses(
        (status = 200, description = "Contact created", body = ApiResponse<ShopCompanyContact>),
        (status = 404, description = "Shop company not found")
    ),
    tag = "shops"
)]
pub async fn create_shop_company_contact(
    State(service): State<Arc<ShopCompanyService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<ContactDto>,
) -> Result<Json<ApiResponse<ShopCompanyContact>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let contact = service.create_contact(id, &dto).await?;
    Ok(Json(ApiResponse::success(contact)))
}

#[utoipa::path(
    put,
    path = "/ota/api/v1/shop-company-contacts/{id}",
    params(("id" = i32, Path, description = "Contact ID")),
    request_body = ContactDto,
    responses(
        (status = 200, description = "Contact updated", body = ApiResponse<ShopCompanyContact>),
        (status = 404, description = "Contact not found")
    ),
    tag = "shops"
)]
pub async fn update_shop_company_contact(
    State(service): State<Arc<ShopCompanyService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<ContactDto>,
) -> Result<Json<ApiResponse<ShopCompanyContact>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let contact = service.update_contact(id, &dto).await?;
    Ok(Json(ApiResponse::success(contact)))
}

#[utoipa::path(
    delete,
    path = "/ota/api/v1/shop-company-contacts/{id}",
    params(("id" = i32, Path, description = "Contact ID")),
    responses(
        (status = 200, description = "Contact deleted"),
        (status = 404, description = "Contact not found")
    ),
    tag = "shops"
)]
pub async fn delete_shop_company_contact(
    State(service): State<Arc<ShopCompanyService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_contact(id).await?;
    Ok(Json(ApiResponse::ok()))
}
