use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::vehicles::dtos::{
    VehicleDto, VehicleFeeDto, VehicleFeeSearchQuery, VehicleSearchQuery, VehicleTypeDto,
    VehicleTypeSearchQuery,
};
use crate::features::vehicles::models::{Vehicle, VehicleFee, VehicleType};
use crate::features::vehicles::services::VehicleService;
use crate::shared::types::{ApiResponse, SearchResult};

// ==================== Vehicle Type Handlers ====================

#[utoipa::path(
    get,
    path = "/ota/api/v1/vehicle-types",
    params(VehicleTypeSearchQuery),
    responses(
        (status = 200, description = "Page of vehicle types", body = ApiResponse<SearchResult<VehicleType>>),
        (status = 400, description = "Invalid filter")
    ),
    tag = "vehicles"
)]
pub async fn search_vehicle_types(
    State(service): State<Arc<VehicleService>>,
    AppQuery(query): AppQuery<VehicleTypeSearchQuery>,
) -> Result<Json<ApiResponse<SearchResult<VehicleType>>>> {
    let page = service.search_types(&query).await?;
    Ok(Json(ApiResponse::success(page)))
}

#[utoipa::path(
    post,
    path = "/ota/api/v1/vehicle-types",
    request_body = VehicleTypeDto,
    responses(
        (status = 200, description = "Vehicle type created", body = ApiResponse<VehicleType>),
        (status = 400, description = "Invalid payload")
    ),
    tag = "vehicles"
)]
pub async fn create_vehicle_type(
    State(service): State<Arc<VehicleService>>,
    AppJson(dto): AppJson<VehicleTypeDto>,
) -> Result<Json<ApiResponse<VehicleType>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let vehicle_type = service.create_type(&dto).await?;
    Ok(Json(ApiResponse::success(vehicle_type)))
}

#[utoipa::path(
    get,
    path = "/ota/api/v1/vehicle-types/{id}",
    params(("id" = i32, Path, description = "Vehicle type ID")),
    responses(
        (status = 200, description = "Vehicle type", body = ApiResponse<VehicleType>),
        (status = 404, description = "Vehicle type not found")
    ),
    tag = "vehicles"
)]
pub async fn get_vehicle_type(
    State(service): State<Arc<VehicleService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<VehicleType>>> {
    let vehicle_type = service.get_type(id).await?;
    Ok(Json(ApiResponse::success(vehicle_type)))
}

#[utoipa::path(
    put,
    path = "/ota/api/v1/vehicle-types/{id}",
    params(("id" = i32, Path, description = "Vehicle type ID")),
    request_body = VehicleTypeDto,
    responses(
        (status = 200, description = "Vehicle type updated", body = ApiResponse<VehicleType>),
        (status = 404, description = "Vehicle type not found")
    ),
    tag = "vehicles"
)]
pub async fn update_vehicle_type(
    State(service): State<Arc<VehicleService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<VehicleTypeDto>,
) -> Result<Json<ApiResponse<VehicleType>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let vehicle_type = service.update_type(id, &dto).await?;
    Ok(Json(ApiResponse::success(vehicle_type)))
}

#[utoipa::path(
    delete,
    path = "/ota/api/v1/vehicle-types/{id}",
    params(("id" = i32, Path, description = "Vehicle type ID")),
    responses(
        (status = 200, description = "Vehicle type deleted"),
        (status = 400, description = "Vehicle type still in use"),
        (status = 404, description = "Vehicle type not found")
    ),
    tag = "vehicles"
)]
pub async fn delete_vehicle_type(
    State(service): State<Arc<VehicleService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_type(id).await?;
    Ok(Json(ApiResponse::ok()))
}

// ==================== Vehicle Handlers ====================

/// Search vehicles by license, or by location, company and type
#[utoipa::path(
    get,
    path = "/ota/api/v1/vehicles",
    params(VehicleSearchQuery),
    responses(
        (status = 200, description = "Page of vehicles", body = ApiResponse<SearchResult<Vehicle>>),
        (status = 400, description = "Invalid filter")
    ),
    tag = "vehicles"
)]
pub async fn search_vehicles(
    State(service): State<Arc<VehicleService>>,
    AppQuery(query): AppQuery<VehicleSearchQuery>,
) -> Result<Json<ApiResponse<SearchResult<Vehicle>>>> {
    let page = service.search_vehicles(&query).await?;
    Ok(Json(ApiResponse::success(page)))
}

#[utoipa::path(
    post,
    path = "/ota/api/v1/vehicles",
    request_body = VehicleDto,
    responses(
        (status = 200, description = "Vehicle created", body = ApiResponse<Vehicle>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Country, city, company or vehicle type not found"),
        (status = 409, description = "License duplicated")
    ),
    tag = "vehicles"
)]
pub async fn create_vehicle(
    State(service): State<Arc<VehicleService>>,
    AppJson(dto): AppJson<VehicleDto>,
) -> Result<Json<ApiResponse<Vehicle>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let vehicle = service.create_vehicle(&dto).await?;
    Ok(Json(ApiResponse::success(vehicle)))
}

#[utoipa::path(
    get,
    path = "/ota/api/v1/vehicles/{id}",
    params(("id" = i32, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Vehicle", body = ApiResponse<Vehicle>),
        (status = 404, description = "Vehicle not found")
    ),
    tag = "vehicles"
)]
pub async fn get_vehicle(
    State(service): State<Arc<VehicleService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<Vehicle>>> {
    let vehicle = service.get_vehicle(id).await?;
    Ok(Json(ApiResponse::success(vehicle)))
}

#[utoipa::path(
    put,
    path = "/ota/api/v1/vehicles/{id}",
    params(("id" = i32, Path, description = "Vehicle ID")),
    request_body = VehicleDto,
    responses(
        (status = 200, description = "Vehicle updated", body = ApiResponse<Vehicle>),
        (status = 404, description = "Vehicle, country, city, company or vehicle type not found"),
        (status = 409, description = "License duplicated")
    ),
    tag = "vehicles"
)]
pub async fn update_vehicle(
    State(service): State<Arc<VehicleService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<VehicleDto>,
) -> Result<Json<ApiResponse<Vehicle>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let vehicle = service.update_vehicle(id, &dto).await?;
    Ok(Json(ApiResponse::success(vehicle)))
}

#[utoipa::path(
    delete,
    path = "/ota/api/v1/vehicles/{id}",
    params(("id" = i32, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Vehicle deleted"),
        (status = 404, description = "Vehicle not found")
    ),
    tag = "vehicles"
)]
pub async fn delete_vehicle(
    State(service): State<Arc<VehicleService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_vehicle(id).await?;
    Ok(Json(ApiResponse::ok()))
}

// ==================== Fee Handlers ====================

/// Search vehicle fees; time bounds select fees inside the window
#[utoipa::path(
    get,
    path = "/ota/api/v1/vehicle-fees",
    params(VehicleFeeSearchQuery),
    responses(
        (status = 200, description = "Page of vehicle fees", body = ApiResponse<SearchResult<VehicleFee>>),
        (status = 400, description = "Invalid filter")
    ),
    tag = "vehicles"
)]
pub async fn search_vehicle_fees(
    State(service): State<Arc<VehicleService>>,
    AppQuery(query): AppQuery<VehicleFeeSearchQuery>,
) -> Result<Json<ApiResponse<SearchResult<VehicleFee>>>> {
    let page = service.search_fees(&query).await?;
    Ok(Json(ApiResponse::success(page)))
}

#[utoipa::path(
    post,
    path = "/ota/api/v1/vehicle-fees",
    request_body = VehicleFeeDto,
    responses(
        (status = 200, description = "Vehicle fee created", body = ApiResponse<VehicleFee>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Vehicle company or vehicle type not found")
    ),
    tag = "vehicles"
)]
pub async fn create_vehicle_fee(
    State(service): State<Arc<VehicleService>>,
    AppJson(dto): AppJson<VehicleFeeDto>,
) -> Result<Json<ApiResponse<VehicleFee>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let fee = service.create_fee(&dto).await?;
    Ok(Json(ApiResponse::success(fee)))
}

#[utoipa::path(
    get,
    path = "/ota/api/v1/vehicle-fees/{id}",
    params(("id" = i32, Path, description = "Vehicle fee ID")),
    responses(
        (status = 200, description = "Vehicle fee", body = ApiResponse<VehicleFee>),
        (status = 404, description = "Vehicle fee not found")
    ),
    tag = "vehicles"
)]
pub async fn get_vehicle_fee(
    State(service): State<Arc<VehicleService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<VehicleFee>>> {
    let fee = service.get_fee(id).await?;
    Ok(Json(ApiResponse::success(fee)))
}

#[utoipa::path(
    put,
    path = "/ota/api/v1/vehicle-fees/{id}",
    params(("id" = i32, Path, description = "Vehicle fee ID")),
    request_body = VehicleFeeDto,
    responses(
        (status = 200, description = "Vehicle fee updated", body = ApiResponse<VehicleFee>),
        (status = 404, description = "Vehicle fee, company or vehicle type not found")
    ),
    tag = "vehicles"
)]
pub async fn update_vehicle_fee(
    State(service): State<Arc<VehicleService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<VehicleFeeDto>,
) -> Result<Json<ApiResponse<VehicleFee>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let fee = service.update_fee(id, &dto).await?;
    Ok(Json(ApiResponse::success(fee)))
}

#[utoipa::path(
    delete,
    path = "/ota/api/v1/vehicle-fees/{id}",
    params(("id" = i32, Path, description = "Vehicle fee ID")),
    responses(
        (status = 200, description = "Vehicle fee deleted"),
        (status = 404, description = "Vehicle fee not found")
    ),
    tag = "vehicles"
)]
pub async fn delete_vehicle_fee(
    State(service): State<Arc<VehicleService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_fee(id).await?;
    Ok(Json(ApiResponse::ok()))
}
