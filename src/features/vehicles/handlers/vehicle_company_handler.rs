use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::vehicles::dtos::{
    VehicleCompanyDetailDto, VehicleCompanyDto, VehicleCompanySearchQuery,
};
use crate::features::vehicles::models::{VehicleAccount, VehicleCompany, VehicleCompanyContact};
use crate::features::vehicles::services::VehicleCompanyService;
use crate::shared::account::BankAccountDto;
use crate::shared::batch::BatchEditDto;
use crate::shared::contact::ContactDto;
use crate::shared::types::{ApiResponse, SearchResult};

/// Search vehicle companies by name, or by location and company type
#[utoipa::path(
    get,
    path = "/ota/api/v1/vehicle-companies",
    params(VehicleCompanySearchQuery),
    responses(
        (status = 200, description = "Page of vehicle companies", body = ApiResponse<SearchResult<VehicleCompany>>),
        (status = 400, description = "Invalid filter")
    ),
    tag = "vehicles"
)]
pub async fn search_vehicle_companies(
    State(service): State<Arc<VehicleCompanyService>>,
    AppQuery(query): AppQuery<VehicleCompanySearchQuery>,
) -> Result<Json<ApiResponse<SearchResult<VehicleCompany>>>> {
    let page = service.search(&query).await?;
    Ok(Json(ApiResponse::success(page)))
}

#[utoipa::path(
    post,
    path = "/ota/api/v1/vehicle-companies",
    request_body = VehicleCompanyDto,
    responses(
        (status = 200, description = "Vehicle company created", body = ApiResponse<VehicleCompany>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Country or city not found"),
        (status = 409, description = "Company name or name_en duplicated")
    ),
    tag = "vehicles"
)]
pub async fn create_vehicle_company(
    State(service): State<Arc<VehicleCompanyService>>,
    AppJson(dto): AppJson<VehicleCompanyDto>,
) -> Result<Json<ApiResponse<VehicleCompany>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let company = service.create(&dto).await?;
    Ok(Json(ApiResponse::success(company)))
}

/// Get a vehicle company with its contacts
#[utoipa::path(
    get,
    path = "/ota/api/v1/vehicle-companies/{id}",
    params(("id" = i32, Path, description = "Vehicle company ID")),
    responses(
        (status = 200, description = "Vehicle company with contacts", body = ApiResponse<VehicleCompanyDetailDto>),
        (status = 404, description = "Vehicle company not found")
    ),
    tag = "vehicles"
)]
pub async fn get_vehicle_company(
    State(service): State<Arc<VehicleCompanyService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<VehicleCompanyDetailDto>>> {
    let company = service.get(id).await?;
    Ok(Json(ApiResponse::success(company)))
}

#[utoipa::path(
    put,
    path = "/ota/api/v1/vehicle-companies/{id}",
    params(("id" = i32, Path, description = "Vehicle company ID")),
    request_body = VehicleCompanyDto,
    responses(
        (status = 200, description = "Vehicle company updated", body = ApiResponse<VehicleCompany>),
        (status = 404, description = "Vehicle company, country or city not found"),
        (status = 409, description = "Company name or name_en duplicated")
    ),
    tag = "vehicles"
)]
pub async fn update_vehicle_company(
    State(service): State<Arc<VehicleCompanyService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<VehicleCompanyDto>,
) -> Result<Json<ApiResponse<VehicleCompany>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let company = service.update(id, &dto).await?;
    Ok(Json(ApiResponse::success(company)))
}

/// Delete a vehicle company with its contacts, accounts, vehicles and fees
#[utoipa::path(
    delete,
    path = "/ota/api/v1/vehicle-companies/{id}",
    params(("id" = i32, Path, description = "Vehicle company ID")),
    responses(
        (status = 200, description = "Vehicle company deleted"),
        (status = 404, description = "Vehicle company not found")
    ),
    tag = "vehicles"
)]
pub async fn delete_vehicle_company(
    State(service): State<Arc<VehicleCompanyService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::ok()))
}

// ==================== Contact Handlers ====================

#[utoipa::path(
    post,
    path = "/ota/api/v1/vehicle-companies/{id}/contacts",
    params(("id" = i32, Path, description = "Vehicle company ID")),
    request_body = ContactDto,
    responses(
        (status = 200, description = "Contact created", body = ApiResponse<VehicleCompanyContact>),
        (status = 404, description = "Vehicle company not found")
    ),
    tag = "vehicles"
)]
pub async fn create_vehicle_company_contact(
    State(service): State<Arc<VehicleCompanyService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<ContactDto>,
) -> Result<Json<ApiResponse<VehicleCompanyContact>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let contact = service.create_contact(id, &dto).await?;
    Ok(Json(ApiResponse::success(contact)))
}

#[utoipa::path(
    put,
    path = "/ota/api/v1/vehicle-company-contacts/{id}",
    params(("id" = i32, Path, description = "Contact ID")),
    request_body = ContactDto,
    responses(
        (status = 200, description = "Contact updated", body = ApiResponse<VehicleCompanyContact>),
        (status = 404, description = "Contact not found")
    ),
    tag = "vehicles"
)]
pub async fn update_vehicle_company_contact(
    State(service): State<Arc<VehicleCompanyService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<ContactDto>,
) -> Result<Json<ApiResponse<VehicleCompanyContact>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let contact = service.update_contact(id, &dto).await?;
    Ok(Json(ApiResponse::success(contact)))
}

#[utoipa::path(
    delete,
    path = "/ota/api/v1/vehicle-company-contacts/{id}",
    params(("id" = i32, Path, description = "Contact ID")),
    responses(
        (status = 200, description = "Contact deleted"),
        (status = 404, description = "Contact not found")
    ),
    tag = "vehicles"
)]
pub async fn delete_vehicle_company_contact(
    State(service): State<Arc<VehicleCompanyService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_contact(id).await?;
    Ok(Json(ApiResponse::ok()))
}

// ==================== Account Handlers ====================

#[utoipa::path(
    get,
    path = "/ota/api/v1/vehicle-companies/{id}/accounts",
    params(("id" = i32, Path, description = "Vehicle company ID")),
    responses(
        (status = 200, description = "Bank accounts of the company", body = ApiResponse<Vec<VehicleAccount>>),
        (status = 404, description = "Vehicle company not found")
    ),
    tag = "vehicles"
)]
pub async fn list_vehicle_accounts(
    State(service): State<Arc<VehicleCompanyService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<Vec<VehicleAccount>>>> {
    let accounts = service.list_accounts(id).await?;
    Ok(Json(ApiResponse::success(accounts)))
}

#[utoipa::path(
    post,
    path = "/ota/api/v1/vehicle-companies/{id}/accounts",
    params(("id" = i32, Path, description = "Vehicle company ID")),
    request_body = BankAccountDto,
    responses(
        (status = 200, description = "Bank account created", body = ApiResponse<VehicleAccount>),
        (status = 404, description = "Vehicle company not found"),
        (status = 409, description = "Account duplicated")
    ),
    tag = "vehicles"
)]
pub async fn create_vehicle_account(
    State(service): State<Arc<VehicleCompanyService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<BankAccountDto>,
) -> Result<Json<ApiResponse<VehicleAccount>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let account = service.create_account(id, &dto).await?;
    Ok(Json(ApiResponse::success(account)))
}

/// Create, update and delete bank accounts of a company in one transaction
#[utoipa::path(
    post,
    path = "/ota/api/v1/vehicle-companies/{id}/accounts/batch",
    params(("id" = i32, Path, description = "Vehicle company ID")),
    request_body = BatchEditDto<BankAccountDto>,
    responses(
        (status = 200, description = "Accounts after the batch", body = ApiResponse<Vec<VehicleAccount>>),
        (status = 404, description = "Vehicle company or account not found"),
        (status = 409, description = "Account duplicated")
    ),
    tag = "vehicles"
)]
pub async fn edit_vehicle_accounts(
    State(service): State<Arc<VehicleCompanyService>>,
    AppPath(id): AppPath<i32>,
    AppJson(batch): AppJson<BatchEditDto<BankAccountDto>>,
) -> Result<Json<ApiResponse<Vec<VehicleAccount>>>> {
    batch
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let accounts = service.edit_accounts(id, &batch).await?;
    Ok(Json(ApiResponse::success(accounts)))
}

#[utoipa::path(
    put,
    path = "/ota/api/v1/vehicle-accounts/{id}",
    params(("id" = i32, Path, description = "Account ID")),
    request_body = BankAccountDto,
    responses(
        (status = 200, description = "Bank account updated", body = ApiResponse<VehicleAccount>),
        (status = 404, description = "Account not found"),
        (status = 409, description = "Account duplicated")
    ),
    tag = "vehicles"
)]
pub async fn update_vehicle_account(
    State(service): State<Arc<VehicleCompanyService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<BankAccountDto>,
) -> Result<Json<ApiResponse<VehicleAccount>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let account = service.update_account(id, &dto).await?;
    Ok(Json(ApiResponse::success(account)))
}

#[utoipa::path(
    delete,
    path = "/ota/api/v1/vehicle-accounts/{id}",
    params(("id" = i32, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Bank account deleted"),
        (status = 404, description = "Account not found")
    ),
    tag = "vehicles"
)]
pub async fn delete_vehicle_account(
    State(service): State<Arc<VehicleCompanyService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_account(id).await?;
    Ok(Json(ApiResponse::ok()))
}
