use sqlx::{postgres::PgRow, FromRow, PgExecutor, PgPool, Postgres, QueryBuilder};

use crate::core::error::{AppError, Result};
use crate::shared::types::{Pagination, SearchResult};

/// Run a paginated `SELECT * FROM <table>` with the filters pushed by `filters`.
///
/// `filters` is called once per statement and must only push `AND ...` clauses.
/// The count query runs only when the page asks for a total.
pub async fn search_page<T, P, F>(
    pool: &PgPool,
    table: &str,
    page: &P,
    filters: F,
) -> Result<SearchResult<T>>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    P: Pagination,
    F: Fn(&mut QueryBuilder<'_, Postgres>),
{
    let offset = page.offset()?;

    let total = if page.wants_total() {
        let mut count = QueryBuilder::<Postgres>::new(format!(
            "SELECT COUNT(*) FROM {} WHERE TRUE",
            table
        ));
        filters(&mut count);

        let total: i64 = count
            .build_query_scalar()
            .fetch_one(pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count {}: {:?}", table, e);
                AppError::Database(e)
            })?;
        Some(total)
    } else {
        None
    };

    let mut select = QueryBuilder::<Postgres>::new(format!("SELECT * FROM {} WHERE TRUE", table));
    filters(&mut select);
    select
        .push(" ORDER BY id LIMIT ")
        .push_bind(page.limit())
        .push(" OFFSET ")
        .push_bind(offset);

    let items = select
        .build_query_as::<T>()
        .fetch_all(pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to search {}: {:?}", table, e);
            AppError::Database(e)
        })?;

    Ok(SearchResult { items, total })
}

/// Push `AND city_id = ?`, or `AND country_id = ?` when no city is given
pub fn push_location(qb: &mut QueryBuilder<'_, Postgres>, country_id: Option<i32>, city_id: Option<i32>) {
    if let Some(city_id) = city_id {
        qb.push(" AND city_id = ").push_bind(city_id);
    } else if let Some(country_id) = country_id {
        qb.push(" AND country_id = ").push_bind(country_id);
    }
}

/// Push an equality filter when the value is present
pub fn push_eq<'a, V>(qb: &mut QueryBuilder<'a, Postgres>, column: &str, value: Option<V>)
where
    V: 'a + sqlx::Encode<'a, Postgres> + sqlx::Type<Postgres> + Send,
{
    if let Some(value) = value {
        qb.push(format!(" AND {} = ", column)).push_bind(value);
    }
}

/// Whether `table` holds a row with this id
pub async fn row_exists<'e, E>(executor: E, table: &str, id: i32) -> Result<bool>
where
    E: PgExecutor<'e>,
{
    let sql = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)", table);
    sqlx::query_scalar::<_, bool>(&sql)
        .bind(id)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up {} {}: {:?}", table, id, e);
            AppError::Database(e)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_location_prefers_city() {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT * FROM hotels WHERE TRUE");
        push_location(&mut qb, Some(1), Some(2));
        assert_eq!(qb.sql(), "SELECT * FROM hotels WHERE TRUE AND city_id = $1");

        let mut qb = QueryBuilder::<Postgres>::new("SELECT * FROM hotels WHERE TRUE");
        push_location(&mut qb, Some(1), None);
        assert_eq!(qb.sql(), "SELECT * FROM hotels WHERE TRUE AND country_id = $1");

        let mut qb = QueryBuilder::<Postgres>::new("SELECT * FROM hotels WHERE TRUE");
        push_location(&mut qb, None, None);
        assert_eq!(qb.sql(), "SELECT * FROM hotels WHERE TRUE");
    }

    #[test]
    fn test_push_eq_numbers_placeholders() {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT * FROM shops WHERE TRUE");
        push_eq(&mut qb, "company_id", Some(3));
        push_eq::<i16>(&mut qb, "shop_type", None);
        push_eq(&mut qb, "name", Some("Gem House".to_string()));
        assert_eq!(
            qb.sql(),
            "SELECT * FROM shops WHERE TRUE AND company_id = $1 AND name = $2"
        );
    }
}
