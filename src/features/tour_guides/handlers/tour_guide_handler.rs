use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::tour_guides::dtos::{TourGuideDto, TourGuideFeeDto, TourGuideSearchQuery};
use crate::features::tour_guides::models::{TourGuide, TourGuideAccount, TourGuideFee};
use crate::features::tour_guides::services::TourGuideService;
use crate::shared::account::BankAccountDto;
use crate::shared::batch::BatchEditDto;
use crate::shared::types::{ApiResponse, SearchResult};

/// Search tour guides by country, gender and guide type
#[utoipa::path(
    get,
    path = "/ota/api/v1/tour-guides",
    params(TourGuideSearchQuery),
    responses(
        (status = 200, description = "Page of tour guides", body = ApiResponse<SearchResult<TourGuide>>),
        (status = 400, description = "Invalid filter")
    ),
    tag = "tour_guides"
)]
pub async fn search_tour_guides(
    State(service): State<Arc<TourGuideService>>,
    AppQuery(query): AppQuery<TourGuideSearchQuery>,
) -> Result<Json<ApiResponse<SearchResult<TourGuide>>>> {
    let page = service.search(&query).await?;
    Ok(Json(ApiResponse::success(page)))
}

#[utoipa::path(
    post,
    path = "/ota/api/v1/tour-guides",
    request_body = TourGuideDto,
    responses(
        (status = 200, description = "Tour guide created", body = ApiResponse<TourGuide>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Country not found")
    ),
    tag = "tour_guides"
)]
pub async fn create_tour_guide(
    State(service): State<Arc<TourGuideService>>,
    AppJson(dto): AppJson<TourGuideDto>,
) -> Result<Json<ApiResponse<TourGuide>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let guide = service.create(&dto).await?;
    Ok(Json(ApiResponse::success(guide)))
}

#[utoipa::path(
    get,
    path = "/ota/api/v1/tour-guides/{id}",
    params(("id" = i32, Path, description = "Tour guide ID")),
    responses(
        (status = 200, description = "Tour guide", body = ApiResponse<TourGuide>),
        (status = 404, description = "Tour guide not found")
    ),
    tag = "tour_guides"
)]
pub async fn get_tour_guide(
    State(service): State<Arc<TourGuideService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<TourGuide>>> {
    let guide = service.get(id).await?;
    Ok(Json(ApiResponse::success(guide)))
}

#[utoipa::path(
    put,
    path = "/ota/api/v1/tour-guides/{id}",
    params(("id" = i32, Path, description = "Tour guide ID")),
    request_body = TourGuideDto,
    responses(
        (status = 200, description = "Tour guide updated", body = ApiResponse<TourGuide>),
        (status = 404, description = "Tour guide or country not found")
    ),
    tag = "tour_guides"
)]
pub async fn update_tour_guide(
    State(service): State<Arc<TourGuideService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<TourGuideDto>,
) -> Result<Json<ApiResponse<TourGuide>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let guide = service.update(id, &dto).await?;
    Ok(Json(ApiResponse::success(guide)))
}

/// Delete a tour guide with its fee and bank accounts
#[utoipa::path(
    delete,
    path = "/ota/api/v1/tour-guides/{id}",
    params(("id" = i32, Path, description = "Tour guide ID")),
    responses(
        (status = 200, description = "Tour guide deleted"),
        (status = 404, description = "Tour guide not found")
    ),
    tag = "tour_guides"
)]
pub async fn delete_tour_guide(
    State(service): State<Arc<TourGuideService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::ok()))
}

// ==================== Fee Handlers ====================

#[utoipa::path(
    get,
    path = "/ota/api/v1/tour-guides/{id}/fee",
    params(("id" = i32, Path, description = "Tour guide ID")),
    responses(
        (status = 200, description = "Fee of the tour guide", body = ApiResponse<TourGuideFee>),
        (status = 404, description = "Tour guide fee not found")
    ),
    tag = "tour_guides"
)]
pub async fn get_tour_guide_fee(
    State(service): State<Arc<TourGuideService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<TourGuideFee>>> {
    let fee = service.get_fee(id).await?;
    Ok(Json(ApiResponse::success(fee)))
}

#[utoipa::path(
    post,
    path = "/ota/api/v1/tour-guides/{id}/fee",
    params(("id" = i32, Path, description = "Tour guide ID")),
    request_body = TourGuideFeeDto,
    responses(
        (status = 200, description = "Fee created", body = ApiResponse<TourGuideFee>),
        (status = 404, description = "Tour guide not found"),
        (status = 409, description = "Tour guide already has a fee")
    ),
    tag = "tour_guides"
)]
pub async fn create_tour_guide_fee(
    State(service): State<Arc<TourGuideService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<TourGuideFeeDto>,
) -> Result<Json<ApiResponse<TourGuideFee>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let fee = service.create_fee(id, &dto).await?;
    Ok(Json(ApiResponse::success(fee)))
}

#[utoipa::path(
    put,
    path = "/ota/api/v1/tour-guide-fees/{id}",
    params(("id" = i32, Path, description = "Tour guide fee ID")),
    request_body = TourGuideFeeDto,
    responses(
        (status = 200, description = "Fee updated", body = ApiResponse<TourGuideFee>),
        (status = 404, description = "Tour guide fee not found")
    ),
    tag = "tour_guides"
)]
pub async fn update_tour_guide_fee(
    State(service): State<Arc<TourGuideService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<TourGuideFeeDto>,
) -> Result<Json<ApiResponse<TourGuideFee>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let fee = service.update_fee(id, &dto).await?;
    Ok(Json(ApiResponse::success(fee)))
}

#[utoipa::path(
    delete,
    path = "/ota/api/v1/tour-guide-fees/{id}",
    params(("id" = i32, Path, description = "Tour guide fee ID")),
    responses(
        (status = 200, description = "Fee deleted"),
        (status = 404, description = "Tour guide fee not found")
    ),
    tag = "tour_guides"
)]
pub async fn delete_tour_guide_fee(
    State(service): State<Arc<TourGuideService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_fee(id).await?;
    Ok(Json(ApiResponse::ok()))
}

// ==================== Account Handlers ====================

#[utoipa::path(
    get,
    path = "/ota/api/v1/tour-guides/{id}/accounts",
    params(("id" = i32, Path, description = "Tour guide ID")),
    responses(
        (status = 200, description = "Bank accounts of the tour guide", body = ApiResponse<Vec<TourGuideAccount>>),
        (status = 404, description = "Tour guide not found")
    ),
    tag = "tour_guides"
)]
pub async fn list_tour_guide_accounts(
    State(service): State<Arc<TourGuideService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<Vec<TourGuideAccount>>>> {
    let accounts = service.list_accounts(id).await?;
    Ok(Json(ApiResponse::success(accounts)))
}

#[utoipa::path(
    post,
    path = "/ota/api/v1/tour-guides/{id}/accounts",
    params(("id" = i32, Path, description = "Tour guide ID")),
    request_body = BankAccountDto,
    responses(
        (status = 200, description = "Bank account created", body = ApiResponse<TourGuideAccount>),
        (status = 404, description = "Tour guide not found"),
        (status = 409, description = "Account duplicated")
    ),
    tag = "tour_guides"
)]
pub async fn create_tour_guide_account(
    State(service): State<Arc<TourGuideService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<BankAccountDto>,
) -> Result<Json<ApiResponse<TourGuideAccount>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let account = service.create_account(id, &dto).await?;
    Ok(Json(ApiResponse::success(account)))
}

/// Create, update and delete bank accounts of a tour guide in one transaction
#[utoipa::path(
    post,
    path = "/ota/api/v1/tour-guides/{id}/accounts/batch",
    params(("id" = i32, Path, description = "Tour guide ID")),
    request_body = BatchEditDto<BankAccountDto>,
    responses(
        (status = 200, description = "Accounts after the batch", body = ApiResponse<Vec<TourGuideAccount>>),
        (status = 404, description = "Tour guide or account not found"),
        (status = 409, description = "Account duplicated")
    ),
    tag = "tour_guides"
)]
pub async fn edit_tour_guide_accounts(
    State(service): State<Arc<TourGuideService>>,
    AppPath(id): AppPath<i32>,
    AppJson(batch): AppJson<BatchEditDto<BankAccountDto>>,
) -> Result<Json<ApiResponse<Vec<TourGuideAccount>>>> {
    batch
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let accounts = service.edit_accounts(id, &batch).await?;
    Ok(Json(ApiResponse::success(accounts)))
}

#[utoipa::path(
    put,
    path = "/ota/api/v1/tour-guide-accounts/{id}",
    params(("id" = i32, Path, description = "Account ID")),
    request_body = BankAccountDto,
    responses(
        (status = 200, description = "Bank account updated", body = ApiResponse<TourGuideAccount>),
        (status = 404, description = "Account not found"),
        (status = 409, description = "Account duplicated")
    ),
    tag = "tour_guides"
)]
pub async fn update_tour_guide_account(
    State(service): State<Arc<TourGuideService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<BankAccountDto>,
) -> Result<Json<ApiResponse<TourGuideAccount>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let account = service.update_account(id, &dto).await?;
    Ok(Json(ApiResponse::success(account)))
}

#[utoipa::path(
    delete,
    path = "/ota/api/v1/tour-guide-accounts/{id}",
    params(("id" = i32, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Bank account deleted"),
        (status = 404, description = "Account not found")
    ),
    tag = "tour_guides"
)]
pub async fn delete_tour_guide_account(
    State(service): State<Arc<TourGuideService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_account(id).await?;
    Ok(Json(ApiResponse::ok()))
}
