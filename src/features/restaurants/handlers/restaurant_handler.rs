use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::restaurants::dtos::{RestaurantDto, RestaurantMealDto, RestaurantSearchQuery};
use crate::features::restaurants::models::{Restaurant, RestaurantAccount, RestaurantMeal};
use crate::features::restaurants::services::RestaurantService;
use crate::shared::account::BankAccountDto;
use crate::shared::batch::BatchEditDto;
use crate::shared::types::{ApiResponse, SearchResult};

// ==================== Restaurant Handlers ====================

/// Search restaurants by location, company and type
#[utoipa::path(
    get,
    path = "/ota/api/v1/restaurants",
    params(RestaurantSearchQuery),
    responses(
        (status = 200, description = "Page of restaurants", body = ApiResponse<SearchResult<Restaurant>>),
        (status = 400, description = "Invalid filter")
    ),
    tag = "restaurants"
)]
pub async fn search_restaurants(
    State(service): State<Arc<RestaurantService>>,
    AppQuery(query): AppQuery<RestaurantSearchQuery>,
) -> Result<Json<ApiResponse<SearchResult<Restaurant>>>> {
    let page = service.search(&query).await?;
    Ok(Json(ApiResponse::success(page)))
}

#[utoipa::path(
    post,
    path = "/ota/api/v1/restaurants",
    request_body = RestaurantDto,
    responses(
        (status = 200, description = "Restaurant created", body = ApiResponse<Restaurant>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Country, city or company not found"),
        (status = 409, description = "Restaurant name, name_en or nickname_en duplicated")
    ),
    tag = "restaurants"
)]
pub async fn create_restaurant(
    State(service): State<Arc<RestaurantService>>,
    AppJson(dto): AppJson<RestaurantDto>,
) -> Result<Json<ApiResponse<Restaurant>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let restaurant = service.create(&dto).await?;
    Ok(Json(ApiResponse::success(restaurant)))
}

#[utoipa::path(
    get,
    path = "/ota/api/v1/restaurants/{id}",
    params(("id" = i32, Path, description = "Restaurant ID")),
    responses(
        (status = 200, description = "Restaurant", body = ApiResponse<Restaurant>),
        (status = 404, description = "Restaurant not found")
    ),
    tag = "restaurants"
)]
pub async fn get_restaurant(
    State(service): State<Arc<RestaurantService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<Restaurant>>> {
    let restaurant = service.get(id).await?;
    Ok(Json(ApiResponse::success(restaurant)))
}

#[utoipa::path(
    put,
    path = "/ota/api/v1/restaurants/{id}",
    params(("id" = i32, Path, description = "Restaurant ID")),
    request_body = RestaurantDto,
    responses(
        (status = 200, description = "Restaurant updated", body = ApiResponse<Restaurant>),
        (status = 404, description = "Restaurant, country, city or company not found"),
        (status = 409, description = "Restaurant name, name_en or nickname_en duplicated")
    ),
    tag = "restaurants"
)]
pub async fn update_restaurant(
    State(service): State<Arc<RestaurantService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<RestaurantDto>,
) -> Result<Json<ApiResponse<Restaurant>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let restaurant = service.update(id, &dto).await?;
    Ok(Json(ApiResponse::success(restaurant)))
}

/// Delete a restaurant with its meals and accounts
#[utoipa::path(
    delete,
    path = "/ota/api/v1/restaurants/{id}",
    params(("id" = i32, Path, description = "Restaurant ID")),
    responses(
        (status = 200, description = "Restaurant deleted"),
        (status = 404, description = "Restaurant not found")
    ),
    tag = "restaurants"
)]
pub async fn delete_restaurant(
    State(service): State<Arc<RestaurantService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::ok()))
}

// ==================== Meal Handlers ====================

#[utoipa::path(
    get,
    path = "/ota/api/v1/restaurants/{id}/meals",
    params(("id" = i32, Path, description = "Restaurant ID")),
    responses(
        (status = 200, description = "Meals of the restaurant", body = ApiResponse<Vec<RestaurantMeal>>),
        (status = 404, description = "Restaurant not found")
    ),
    tag = "restaurants"
)]
pub async fn list_restaurant_meals(
    State(service): State<Arc<RestaurantService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<Vec<RestaurantMeal>>>> {
    let meals = service.list_meals(id).await?;
    Ok(Json(ApiResponse::success(meals)))
}

#[utoipa::path(
    post,
    path = "/ota/api/v1/restaurants/{id}/meals",
    params(("id" = i32, Path, description = "Restaurant ID")),
    request_body = RestaurantMealDto,
    responses(
        (status = 200, description = "Meal created", body = ApiResponse<RestaurantMeal>),
        (status = 404, description = "Restaurant not found"),
        (status = 409, description = "Meal type already priced")
    ),
    tag = "restaurants"
)]
pub async fn create_restaurant_meal(
    State(service): State<Arc<RestaurantService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<RestaurantMealDto>,
) -> Result<Json<ApiResponse<RestaurantMeal>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let meal = service.create_meal(id, &dto).await?;
    Ok(Json(ApiResponse::success(meal)))
}

#[utoipa::path(
    get,
    path = "/ota/api/v1/restaurant-meals/{id}",
    params(("id" = i32, Path, description = "Meal ID")),
    responses(
        (status = 200, description = "Meal", body = ApiResponse<RestaurantMeal>),
        (status = 404, description = "Meal not found")
    ),
    tag = "restaurants"
)]
pub async fn get_restaurant_meal(
    State(service): State<Arc<RestaurantService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<RestaurantMeal>>> {
    let meal = service.get_meal(id).await?;
    Ok(Json(ApiResponse::success(meal)))
}

#[utoipa::path(
    put,
    path = "/ota/api/v1/restaurant-meals/{id}",
    params(("id" = i32, Path, description = "Meal ID")),
    request_body = RestaurantMealDto,
    responses(
        (status = 200, description = "Meal updated", body = ApiResponse<RestaurantMeal>),
        (status = 404, description = "Meal not found"),
        (status = 409, description = "Meal type already priced")
    ),
    tag = "restaurants"
)]
pub async fn update_restaurant_meal(
    State(service): State<Arc<RestaurantService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<RestaurantMealDto>,
) -> Result<Json<ApiResponse<RestaurantMeal>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let meal = service.update_meal(id, &dto).await?;
    Ok(Json(ApiResponse::success(meal)))
}

#[utoipa::path(
    delete,
    path = "/ota/api/v1/restaurant-meals/{id}",
    params(("id" = i32, Path, description = "Meal ID")),
    responses(
        (status = 200, description = "Meal deleted"),
        (status = 404, description = "Meal not found")
    ),
    tag = "restaurants"
)]
pub async fn delete_restaurant_meal(
    State(service): State<Arc<RestaurantService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_meal(id).await?;
    Ok(Json(ApiResponse::ok()))
}

// ==================== Account Handlers ====================

#[utoipa::path(
    get,
    path = "/ota/api/v1/restaurants/{id}/accounts",
    params(("id" = i32, Path, description = "Restaurant ID")),
    responses(
        (status = 200, description = "Bank accounts of the restaurant", body = ApiResponse<Vec<RestaurantAccount>>),
        (status = 404, description = "Restaurant not found")
    ),
    tag = "restaurants"
)]
pub async fn list_restaurant_accounts(
    State(service): State<Arc<RestaurantService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<Vec<RestaurantAccount>>>> {
    let accounts = service.list_accounts(id).await?;
    Ok(Json(ApiResponse::success(accounts)))
}

#[utoipa::path(
    post,
    path = "/ota/api/v1/restaurants/{id}/accounts",
    params(("id" = i32, Path, description = "Restaurant ID")),
    request_body = BankAccountDto,
    responses(
        (status = 200, description = "Bank account created", body = ApiResponse<RestaurantAccount>),
        (status = 404, description = "Restaurant not found"),
        (status = 409, description = "Account duplicated")
    ),
    tag = "restaurants"
)]
pub async fn create_restaurant_account(
    State(service): State<Arc<RestaurantService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<BankAccountDto>,
) -> Result<Json<ApiResponse<RestaurantAccount>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let account = service.create_account(id, &dto).await?;
    Ok(Json(ApiResponse::success(account)))
}

#[utoipa::path(
    post,
    path = "/ota/api/v1/restaurants/{id}/accounts/batch",
    params(("id" = i32, Path, description = "Restaurant ID")),
    request_body = BatchEditDto<BankAccountDto>,
    responses(
        (status = 200, description = "Accounts after the batch", body = ApiResponse<Vec<RestaurantAccount>>),
        (status = 404, description = "Restaurant or account not found"),
        (status = 409, description = "Account duplicated")
    ),
    tag = "restaurants"
)]
pub async fn edit_restaurant_accounts(
    State(service): State<Arc<RestaurantService>>,
    AppPath(id): AppPath<i32>,
    AppJson(batch): AppJson<BatchEditDto<BankAccountDto>>,
) -> Result<Json<ApiResponse<Vec<RestaurantAccount>>>> {
    batch
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let accounts = service.edit_accounts(id, &batch).await?;
    Ok(Json(ApiResponse::success(accounts)))
}

#[utoipa::path(
    put,
    path = "/ota/api/v1/restaurant-accounts/{id}",
    params(("id" = i32, Path, description = "Account ID")),
    request_body = BankAccountDto,
    responses(
        (status = 200, description = "Bank account updated", body = ApiResponse<RestaurantAccount>),
        (status = 404, description = "Account not found"),
        (status = 409, description = "Account duplicated")
    ),
    tag = "restaurants"
)]
pub async fn update_restaurant_account(
    State(service): State<Arc<RestaurantService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<BankAccountDto>,
) -> Result<Json<ApiResponse<RestaurantAccount>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let account = service.update_account(id, &dto).await?;
    Ok(Json(ApiResponse::success(account)))
}

#[utoipa::path(
    delete,
    path = "/ota/api/v1/restaurant-accounts/{id}",
    params(("id" = i32, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Bank account deleted"),
        (status = 404, description = "Account not found")
    ),
    tag = "restaurants"
)]
pub async fn delete_restaurant_account(
    State(service): State<Arc<RestaurantService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_account(id).await?;
    Ok(Json(ApiResponse::ok()))
}
