use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::hotels::dtos::{HotelDetailDto, HotelDto, HotelSearchQuery};
use crate::features::hotels::models::{Hotel, HotelAccount, HotelContact};
use crate::features::hotels::services::HotelService;
use crate::shared::account::BankAccountDto;
use crate::shared::batch::BatchEditDto;
use crate::shared::contact::ContactDto;
use crate::shared::types::{ApiResponse, SearchResult};

// ==================== Hotel Handlers ====================

/// Search hotels by location, company, name and star level
#[utoipa::path(
    get,
    path = "/ota/api/v1/hotels",
    params(HotelSearchQuery),
    responses(
        (status = 200, description = "Page of hotels", body = ApiResponse<SearchResult<Hotel>>),
        (status = 400, description = "Invalid filter")
    ),
    tag = "hotels"
)]
pub async fn search_hotels(
    State(service): State<Arc<HotelService>>,
    AppQuery(query): AppQuery<HotelSearchQuery>,
) -> Result<Json<ApiResponse<SearchResult<Hotel>>>> {
    let page = service.search(&query).await?;
    Ok(Json(ApiResponse::success(page)))
}

/// Create a hotel
#[utoipa::path(
    post,
    path = "/ota/api/v1/hotels",
    request_body = HotelDto,
    responses(
        (status = 200, description = "Hotel created", body = ApiResponse<Hotel>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Country, city or company not found"),
        (status = 409, description = "Hotel name, name_en or nickname_en duplicated")
    ),
    tag = "hotels"
)]
pub async fn create_hotel(
    State(service): State<Arc<HotelService>>,
    AppJson(dto): AppJson<HotelDto>,
) -> Result<Json<ApiResponse<Hotel>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let hotel = service.create(&dto).await?;
    Ok(Json(ApiResponse::success(hotel)))
}

/// Get a hotel with its contacts
#[utoipa::path(
    get,
    path = "/ota/api/v1/hotels/{id}",
    params(("id" = i32, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "Hotel with contacts", body = ApiResponse<HotelDetailDto>),
        (status = 404, description = "Hotel not found")
    ),
    tag = "hotels"
)]
pub async fn get_hotel(
    State(service): State<Arc<HotelService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<HotelDetailDto>>> {
    let hotel = service.get(id).await?;
    Ok(Json(ApiResponse::success(hotel)))
}

/// Replace every field of a hotel
#[utoipa::path(
    put,
    path = "/ota/api/v1/hotels/{id}",
    params(("id" = i32, Path, description = "Hotel ID")),
    request_body = HotelDto,
    responses(
        (status = 200, description = "Hotel updated", body = ApiResponse<Hotel>),
        (status = 404, description = "Hotel, country, city or company not found"),
        (status = 409, description = "Hotel name, name_en or nickname_en duplicated")
    ),
    tag = "hotels"
)]
pub async fn update_hotel(
    State(service): State<Arc<HotelService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<HotelDto>,
) -> Result<Json<ApiResponse<Hotel>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let hotel = service.update(id, &dto).await?;
    Ok(Json(ApiResponse::success(hotel)))
}

/// Delete a hotel with its contacts, accounts and fees
#[utoipa::path(
    delete,
    path = "/ota/api/v1/hotels/{id}",
    params(("id" = i32, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "Hotel deleted"),
        (status = 404, description = "Hotel not found")
    ),
    tag = "hotels"
)]
pub async fn delete_hotel(
    State(service): State<Arc<HotelService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::ok()))
}

// ==================== Contact Handlers ====================

#[utoipa::path(
    post,
    path = "/ota/api/v1/hotels/{id}/contacts",
    params(("id" = i32, Path, description = "Hotel ID")),
    request_body = ContactDto,
    responses(
        (status = 200, description = "Contact created", body = ApiResponse<HotelContact>),
        (status = 404, description = "Hotel not found")
    ),
    tag = "hotels"
)]
pub async fn create_hotel_contact(
    State(service): State<Arc<HotelService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<ContactDto>,
) -> Result<Json<ApiResponse<HotelContact>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let contact = service.create_contact(id, &dto).await?;
    Ok(Json(ApiResponse::success(contact)))
}

#[utoipa::path(
    put,
    path = "/ota/api/v1/hotel-contacts/{id}",
    params(("id" = i32, Path, description = "Contact ID")),
    request_body = ContactDto,
    responses(
        (status = 200, description = "Contact updated", body = ApiResponse<HotelContact>),
        (status = 404, description = "Contact not found")
    ),
    tag = "hotels"
)]
pub async fn update_hotel_contact(
    State(service): State<Arc<HotelService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<ContactDto>,
) -> Result<Json<ApiResponse<HotelContact>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let contact = service.update_contact(id, &dto).await?;
    Ok(Json(ApiResponse::success(contact)))
}

#[utoipa::path(
    delete,
    path = "/ota/api/v1/hotel-contacts/{id}",
    params(("id" = i32, Path, description = "Contact ID")),
    responses(
        (status = 200, description = "Contact deleted"),
        (status = 404, description = "Contact not found")
    ),
    tag = "hotels"
)]
pub async fn delete_hotel_contact(
    State(service): State<Arc<HotelService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_contact(id).await?;
    Ok(Json(ApiResponse::ok()))
}

// ==================== Account Handlers ====================

#[utoipa::path(
    get,
    path = "/ota/api/v1/hotels/{id}/accounts",
    params(("id" = i32, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "Bank accounts of the hotel", body = ApiResponse<Vec<HotelAccount>>),
        (status = 404, description = "Hotel not found")
    ),
    tag = "hotels"
)]
pub async fn list_hotel_accounts(
    State(service): State<Arc<HotelService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<Vec<HotelAccount>>>> {
    let accounts = service.list_accounts(id).await?;
    Ok(Json(ApiResponse::success(accounts)))
}

#[utoipa::path(
    post,
    path = "/ota/api/v1/hotels/{id}/accounts",
    params(("id" = i32, Path, description = "Hotel ID")),
    request_body = BankAccountDto,
    responses(
        (status = 200, description = "Bank account created", body = ApiResponse<HotelAccount>),
        (status = 404, description = "Hotel not found"),
        (status = 409, description = "Account duplicated")
    ),
    tag = "hotels"
)]
pub async fn create_hotel_account(
    State(service): State<Arc<HotelService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<BankAccountDto>,
) -> Result<Json<ApiResponse<HotelAccount>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let account = service.create_account(id, &dto).await?;
    Ok(Json(ApiResponse::success(account)))
}

/// Create, update and delete bank accounts of a hotel in one transaction
#[utoipa::path(
    post,
    path = "/ota/api/v1/hotels/{id}/accounts/batch",
    params(("id" = i32, Path, description = "Hotel ID")),
    request_body = BatchEditDto<BankAccountDto>,
    responses(
        (status = 200, description = "Accounts after the batch", body = ApiResponse<Vec<HotelAccount>>),
        (status = 404, description = "Hotel or account not found"),
        (status = 409, description = "Account duplicated")
    ),
    tag = "hotels"
)]
pub async fn edit_hotel_accounts(
    State(service): State<Arc<HotelService>>,
    AppPath(id): AppPath<i32>,
    AppJson(batch): AppJson<BatchEditDto<BankAccountDto>>,
) -> Result<Json<ApiResponse<Vec<HotelAccount>>>> {
    batch
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let accounts = service.edit_accounts(id, &batch).await?;
    Ok(Json(ApiResponse::success(accounts)))
}

#[utoipa::path(
    put,
    path = "/ota/api/v1/hotel-accounts/{id}",
    params(("id" = i32, Path, description = "Account ID")),
    request_body = BankAccountDto,
    responses(
        (status = 200, description = "Bank account updated", body = ApiResponse<HotelAccount>),
        (status = 404, description = "Account not found"),
        (status = 409, description = "Account duplicated")
    ),
    tag = "hotels"
)]
pub async fn update_hotel_account(
    State(service): State<Arc<HotelService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<BankAccountDto>,
) -> Result<Json<ApiResponse<HotelAccount>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let account = service.update_account(id, &dto).await?;
    Ok(Json(ApiResponse::success(account)))
}

#[utoipa::path(
    delete,
    path = "/ota/api/v1/hotel-accounts/{id}",
    params(("id" = i32, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Bank account deleted"),
        (status = 404, description = "Account not found")
    ),
    tag = "hotels"
)]
pub async fn delete_hotel_account(
    State(service): State<Arc<HotelService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_account(id).await?;
    Ok(Json(ApiResponse::ok()))
}
