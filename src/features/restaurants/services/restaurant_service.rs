use sqlx::{postgres::PgArguments, query::QueryAs, PgPool, Postgres};

use crate::core::error::{handle_db_error, AppError, ErrorCode, Result};
use crate::features::countries::ensure_location;
use crate::features::restaurants::dtos::{RestaurantDto, RestaurantMealDto, RestaurantSearchQuery};
use crate::features::restaurants::models::{Restaurant, RestaurantAccount, RestaurantMeal};
use crate::shared::account::{AccountTable, BankAccountDto};
use crate::shared::batch::BatchEditDto;
use crate::shared::search::{push_eq, push_location, row_exists, search_page};
use crate::shared::types::SearchResult;

const RESTAURANT_ACCOUNTS: AccountTable = AccountTable {
    table: "restaurant_accounts",
    owner_column: "restaurant_id",
    duplicated: ErrorCode::RestaurantAccountDuplicated,
    not_found: ErrorCode::RestaurantAccountNotExist,
};

/// Writable restaurant columns, in bind order
const RESTAURANT_COLUMNS: [&str; 34] = [
    "company_id",
    "country_id",
    "city_id",
    "address",
    "name",
    "name_en",
    "nickname_en",
    "restaurant_type",
    "intro_cn",
    "intro_en",
    "environ_level",
    "taste_level",
    "service_level",
    "recommend_level",
    "cost_level",
    "cooperation_level",
    "contact_one",
    "position_one",
    "telephone_one",
    "email_one",
    "contact_two",
    "position_two",
    "telephone_two",
    "email_two",
    "contact_three",
    "position_three",
    "telephone_three",
    "email_three",
    "standard_meal_intro_cn",
    "standard_meal_intro_en",
    "upgrade_meal_intro_cn",
    "upgrade_meal_intro_en",
    "luxury_meal_intro_cn",
    "luxury_meal_intro_en",
];

fn insert_sql() -> String {
    let placeholders = (1..=RESTAURANT_COLUMNS.len())
        .map(|i| format!("${}", i))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO restaurants ({}) VALUES ({}) RETURNING *",
        RESTAURANT_COLUMNS.join(", "),
        placeholders
    )
}

/// `$1` is the id; the columns follow from `$2`
fn update_sql() -> String {
    let assignments = RESTAURANT_COLUMNS
        .iter()
        .enumerate()
        .map(|(i, column)| format!("{} = ${}", column, i + 2))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "UPDATE restaurants SET {}, updated_at = NOW() WHERE id = $1 RETURNING *",
        assignments
    )
}

type RestaurantQuery<'q> = QueryAs<'q, Postgres, Restaurant, PgArguments>;

fn bind_restaurant<'q>(query: RestaurantQuery<'q>, dto: &'q RestaurantDto) -> RestaurantQuery<'q> {
    query
        .bind(dto.company_id)
        .bind(dto.country_id)
        .bind(dto.city_id)
        .bind(&dto.address)
        .bind(&dto.name)
        .bind(&dto.name_en)
        .bind(&dto.nickname_en)
        .bind(dto.restaurant_type)
        .bind(&dto.intro_cn)
        .bind(&dto.intro_en)
        .bind(dto.environ_level)
        .bind(dto.taste_level)
        .bind(dto.service_level)
        .bind(dto.recommend_level)
        .bind(dto.cost_level)
        .bind(dto.cooperation_level)
        .bind(&dto.contact_one)
        .bind(&dto.position_one)
        .bind(&dto.telephone_one)
        .bind(&dto.email_one)
        .bind(&dto.contact_two)
        .bind(&dto.position_two)
        .bind(&dto.telephone_two)
        .bind(&dto.email_two)
        .bind(&dto.contact_three)
        .bind(&dto.position_three)
        .bind(&dto.telephone_three)
        .bind(&dto.email_three)
        .bind(&dto.standard_meal_intro_cn)
        .bind(&dto.standard_meal_intro_en)
        .bind(&dto.upgrade_meal_intro_cn)
        .bind(&dto.upgrade_meal_intro_en)
        .bind(&dto.luxury_meal_intro_cn)
        .bind(&dto.luxury_meal_intro_en)
}

pub struct RestaurantService {
    pool: PgPool,
}

impl RestaurantService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn search(&self, query: &RestaurantSearchQuery) -> Result<SearchResult<Restaurant>> {
        search_page(&self.pool, "restaurants", query, |qb| {
            push_location(qb, query.country_id, query.city_id);
            push_eq(qb, "company_id", query.company_id);
            push_eq(qb, "restaurant_type", query.restaurant_type);
        })
        .await
    }

    async fn ensure_company(&self, company_id: Option<i32>) -> Result<()> {
        if let Some(company_id) = company_id {
            if !row_exists(&self.pool, "restaurant_companies", company_id).await? {
                return Err(AppError::NotFound(ErrorCode::RestaurantCompanyNotExist));
            }
        }
        Ok(())
    }

    async fn ensure_restaurant(&self, restaurant_id: i32) -> Result<()> {
        if !row_exists(&self.pool, "restaurants", restaurant_id).await? {
            return Err(AppError::NotFound(ErrorCode::RestaurantNotExist));
        }
        Ok(())
    }

    pub async fn create(&self, dto: &RestaurantDto) -> Result<Restaurant> {
        ensure_location(&self.pool, dto.country_id, dto.city_id).await?;
        self.ensure_company(dto.company_id).await?;

        let sql = insert_sql();
        let restaurant = bind_restaurant(sqlx::query_as::<_, Restaurant>(&sql), dto)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| handle_db_error(e, ErrorCode::RestaurantDuplicated))?;

        tracing::info!("Created restaurant {} ({})", restaurant.id, restaurant.name_en);
        Ok(restaurant)
    }

    pub async fn get(&self, id: i32) -> Result<Restaurant> {
        sqlx::query_as::<_, Restaurant>("SELECT * FROM restaurants WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get restaurant: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or(AppError::NotFound(ErrorCode::RestaurantNotExist))
    }

    pub async fn update(&self, id: i32, dto: &RestaurantDto) -> Result<Restaurant> {
        let current = self.get(id).await?;
        if current.country_id != dto.country_id || current.city_id != dto.city_id {
            ensure_location(&self.pool, dto.country_id, dto.city_id).await?;
        }
        if current.company_id != dto.company_id {
            self.ensure_company(dto.company_id).await?;
        }

        let sql = update_sql();
        let restaurant = bind_restaurant(sqlx::query_as::<_, Restaurant>(&sql).bind(id), dto)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| handle_db_error(e, ErrorCode::RestaurantDuplicated))?
            .ok_or(AppError::NotFound(ErrorCode::RestaurantNotExist))?;

        tracing::info!("Updated restaurant {}", id);
        Ok(restaurant)
    }

    /// Delete a restaurant with its meals and accounts
    pub async fn delete(&self, id: i32) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM restaurant_meals WHERE restaurant_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete restaurant meals: {:?}", e);
                AppError::Database(e)
            })?;
        RESTAURANT_ACCOUNTS.delete_by_owner(&mut *tx, id).await?;

        let result = sqlx::query("DELETE FROM restaurants WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| handle_db_error(e, ErrorCode::RestaurantDuplicated))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(ErrorCode::RestaurantNotExist));
        }

        tx.commit().await?;
        tracing::info!("Deleted restaurant {}", id);
        Ok(())
    }

    // ==================== Meals ====================

    pub async fn list_meals(&self, restaurant_id: i32) -> Result<Vec<RestaurantMeal>> {
        self.ensure_restaurant(restaurant_id).await?;
        sqlx::query_as::<_, RestaurantMeal>(
            "SELECT * FROM restaurant_meals WHERE restaurant_id = $1 ORDER BY meal_type",
        )
        .bind(restaurant_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list restaurant meals: {:?}", e);
            AppError::Database(e)
        })
    }

    /// Each meal tier can be priced once per restaurant
    pub async fn create_meal(
        &self,
        restaurant_id: i32,
        dto: &RestaurantMealDto,
    ) -> Result<RestaurantMeal> {
        self.ensure_restaurant(restaurant_id).await?;

        let meal = sqlx::query_as::<_, RestaurantMeal>(
            r#"
            INSERT INTO restaurant_meals
                (restaurant_id, meal_type, adult_fee, adult_cost, child_fee, child_cost)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(restaurant_id)
        .bind(dto.meal_type)
        .bind(dto.adult_fee)
        .bind(dto.adult_cost)
        .bind(dto.child_fee)
        .bind(dto.child_cost)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| handle_db_error(e, ErrorCode::RestaurantMealDuplicated))?;

        tracing::info!(
            "Created {} meal {} for restaurant {}",
            dto.meal_type,
            meal.id,
            restaurant_id
        );
        Ok(meal)
    }

    pub async fn get_meal(&self, id: i32) -> Result<RestaurantMeal> {
        sqlx::query_as::<_, RestaurantMeal>("SELECT * FROM restaurant_meals WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get restaurant meal: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or(AppError::NotFound(ErrorCode::RestaurantMealNotExist))
    }

    pub async fn update_meal(&self, id: i32, dto: &RestaurantMealDto) -> Result<RestaurantMeal> {
        let meal = sqlx::query_as::<_, RestaurantMeal>(
            r#"
            UPDATE restaurant_meals
            SET meal_type = $2, adult_fee = $3, adult_cost = $4, child_fee = $5,
                child_cost = $6, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(dto.meal_type)
        .bind(dto.adult_fee)
        .bind(dto.adult_cost)
        .bind(dto.child_fee)
        .bind(dto.child_cost)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| handle_db_error(e, ErrorCode::RestaurantMealDuplicated))?
        .ok_or(AppError::NotFound(ErrorCode::RestaurantMealNotExist))?;

        tracing::info!("Updated restaurant meal {}", id);
        Ok(meal)
    }

    pub async fn delete_meal(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM restaurant_meals WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete restaurant meal: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(ErrorCode::RestaurantMealNotExist));
        }
        tracing::info!("Deleted restaurant meal {}", id);
        Ok(())
    }

    // ==================== Accounts ====================

    pub async fn list_accounts(&self, restaurant_id: i32) -> Result<Vec<RestaurantAccount>> {
        self.ensure_restaurant(restaurant_id).await?;
        RESTAURANT_ACCOUNTS.list_by_owner(&self.pool, restaurant_id).await
    }

    pub async fn create_account(
        &self,
        restaurant_id: i32,
        dto: &BankAccountDto,
    ) -> Result<RestaurantAccount> {
        self.ensure_restaurant(restaurant_id).await?;
        let account: RestaurantAccount =
            RESTAURANT_ACCOUNTS.create(&self.pool, restaurant_id, dto).await?;
        tracing::info!("Added account {} to restaurant {}", account.id, restaurant_id);
        Ok(account)
    }

    pub async fn edit_accounts(
        &self,
        restaurant_id: i32,
        batch: &BatchEditDto<BankAccountDto>,
    ) -> Result<Vec<RestaurantAccount>> {
        self.ensure_restaurant(restaurant_id).await?;
        RESTAURANT_ACCOUNTS
            .edit_batch(&self.pool, restaurant_id, batch)
            .await
    }

    pub async fn update_account(&self, id: i32, dto: &BankAccountDto) -> Result<RestaurantAccount> {
        RESTAURANT_ACCOUNTS.update(&self.pool, id, None, dto).await
    }

    pub async fn delete_account(&self, id: i32) -> Result<()> {
        RESTAURANT_ACCOUNTS.delete(&self.pool, id, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_binds_every_column() {
        let sql = insert_sql();
        assert!(sql.starts_with("INSERT INTO restaurants (company_id, country_id, city_id,"));
        assert!(sql.contains("$34)"));
        assert!(!sql.contains("$35"));
    }

    #[test]
    fn test_update_keeps_id_as_first_parameter() {
        let sql = update_sql();
        assert!(sql.starts_with("UPDATE restaurants SET company_id = $2, country_id = $3,"));
        assert!(sql.contains("luxury_meal_intro_en = $35, updated_at = NOW()"));
        assert!(sql.ends_with("WHERE id = $1 RETURNING *"));
    }
}
