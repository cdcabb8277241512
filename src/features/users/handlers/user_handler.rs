use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::users::dtos::{CreateUserDto, UpdateUserDto, UserLookupQuery};
use crate::features::users::models::User;
use crate::features::users::services::UserService;
use crate::shared::types::ApiResponse;

/// Create an admin or customer user
#[utoipa::path(
    post,
    path = "/ota/api/v1/users",
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "User created", body = ApiResponse<User>),
        (status = 400, description = "Invalid payload"),
        (status = 409, description = "User name duplicated")
    ),
    tag = "users"
)]
pub async fn create_user(
    State(service): State<Arc<UserService>>,
    AppJson(dto): AppJson<CreateUserDto>,
) -> Result<Json<ApiResponse<User>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let user = service.create(&dto).await?;
    Ok(Json(ApiResponse::success(user)))
}

/// Get a user by uuid, id, user name or customer name
#[utoipa::path(
    get,
    path = "/ota/api/v1/users/{key}",
    params(
        ("key" = String, Path, description = "Value matched against the column chosen by `type`"),
        UserLookupQuery
    ),
    responses(
        (status = 200, description = "User", body = ApiResponse<User>),
        (status = 400, description = "Key does not fit the lookup type"),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
pub async fn get_user(
    State(service): State<Arc<UserService>>,
    AppPath(key): AppPath<String>,
    AppQuery(query): AppQuery<UserLookupQuery>,
) -> Result<Json<ApiResponse<User>>> {
    let user = service.get_by_key(&key, query.key_type).await?;
    Ok(Json(ApiResponse::success(user)))
}

/// Update the given fields of a user
#[utoipa::path(
    put,
    path = "/ota/api/v1/users/{id}",
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<User>),
        (status = 404, description = "User not found"),
        (status = 409, description = "User name duplicated")
    ),
    tag = "users"
)]
pub async fn update_user(
    State(service): State<Arc<UserService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<UpdateUserDto>,
) -> Result<Json<ApiResponse<User>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let user = service.update(id, &dto).await?;
    Ok(Json(ApiResponse::success(user)))
}

#[utoipa::path(
    delete,
    path = "/ota/api/v1/users/{id}",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
pub async fn delete_user(
    State(service): State<Arc<UserService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::ok()))
}
