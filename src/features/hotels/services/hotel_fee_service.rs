use sqlx::{postgres::PgRow, FromRow, PgConnection, PgExecutor, PgPool};

use crate::core::error::{handle_db_error, AppError, ErrorCode, Result};
use crate::features::hotels::dtos::{
    FestivalAdditionalChargeDto, HotelFeeDetailDto, HotelFeeDto, MealPriceDto, PriceRowDto,
    RoomAdditionalChargeDto, RoomPriceDto,
};
use crate::features::hotels::models::{
    FestivalAdditionalCharge, HotelFee, MealPrice, RoomAdditionalCharge, RoomPrice,
};
use crate::shared::batch::BatchEditDto;
use crate::shared::search::row_exists;

/// Descriptor of one of the four price tables hanging off a hotel fee
#[derive(Debug, Clone, Copy)]
struct PriceTable {
    table: &'static str,
    kind_column: &'static str,
    not_found: ErrorCode,
}

const ROOM_PRICES: PriceTable = PriceTable {
    table: "hotel_room_prices",
    kind_column: "room_type",
    not_found: ErrorCode::RoomPriceNotExist,
};

const MEAL_PRICES: PriceTable = PriceTable {
    table: "hotel_meal_prices",
    kind_column: "meal_type",
    not_found: ErrorCode::MealPriceNotExist,
};

const ROOM_ADDITIONAL_CHARGES: PriceTable = PriceTable {
    table: "hotel_room_additional_charges",
    kind_column: "room_level",
    not_found: ErrorCode::RoomAdditionalPriceNotExist,
};

const FESTIVAL_ADDITIONAL_CHARGES: PriceTable = PriceTable {
    table: "hotel_festival_additional_charges",
    kind_column: "festival_type",
    not_found: ErrorCode::FestivalPriceNotExist,
};

const PRICE_TABLES: [PriceTable; 4] = [
    ROOM_PRICES,
    MEAL_PRICES,
    ROOM_ADDITIONAL_CHARGES,
    FESTIVAL_ADDITIONAL_CHARGES,
];

impl PriceTable {
    async fn list<'e, T, E>(&self, executor: E, fee_id: i32) -> Result<Vec<T>>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
        E: PgExecutor<'e>,
    {
        let sql = format!(
            "SELECT * FROM {} WHERE hotel_fee_id = $1 ORDER BY {}, start_time",
            self.table, self.kind_column
        );
        sqlx::query_as::<_, T>(&sql)
            .bind(fee_id)
            .fetch_all(executor)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list {}: {:?}", self.table, e);
                AppError::Database(e)
            })
    }

    async fn create<'e, E, R>(&self, executor: E, fee_id: i32, row: &R) -> Result<()>
    where
        E: PgExecutor<'e>,
        R: PriceRowDto,
    {
        let sql = format!(
            "INSERT INTO {} (hotel_fee_id, {}, start_time, end_time, price, note) VALUES ($1, $2, $3, $4, $5, $6)",
            self.table, self.kind_column
        );
        sqlx::query(&sql)
            .bind(fee_id)
            .bind(row.kind())
            .bind(row.start_time())
            .bind(row.end_time())
            .bind(row.price())
            .bind(row.note())
            .execute(executor)
            .await
            .map_err(|e| handle_db_error(e, self.not_found))?;
        Ok(())
    }

    async fn update<'e, E, R>(&self, executor: E, id: i32, fee_id: i32, row: &R) -> Result<()>
    where
        E: PgExecutor<'e>,
        R: PriceRowDto,
    {
        let sql = format!(
            r#"
            UPDATE {}
            SET {} = $3, start_time = $4, end_time = $5, price = $6, note = $7, updated_at = NOW()
            WHERE id = $1 AND hotel_fee_id = $2
            "#,
            self.table, self.kind_column
        );
        let result = sqlx::query(&sql)
            .bind(id)
            .bind(fee_id)
            .bind(row.kind())
            .bind(row.start_time())
            .bind(row.end_time())
            .bind(row.price())
            .bind(row.note())
            .execute(executor)
            .await
            .map_err(|e| handle_db_error(e, self.not_found))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(self.not_found));
        }
        Ok(())
    }

    async fn delete<'e, E>(&self, executor: E, id: i32, fee_id: i32) -> Result<()>
    where
        E: PgExecutor<'e>,
    {
        let sql = format!("DELETE FROM {} WHERE id = $1 AND hotel_fee_id = $2", self.table);
        let result = sqlx::query(&sql)
            .bind(id)
            .bind(fee_id)
            .execute(executor)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete from {}: {:?}", self.table, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(self.not_found));
        }
        Ok(())
    }

    async fn delete_by_fee<'e, E>(&self, executor: E, fee_id: i32) -> Result<u64>
    where
        E: PgExecutor<'e>,
    {
        let sql = format!("DELETE FROM {} WHERE hotel_fee_id = $1", self.table);
        let result = sqlx::query(&sql)
            .bind(fee_id)
            .execute(executor)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete from {}: {:?}", self.table, e);
                AppError::Database(e)
            })?;
        Ok(result.rows_affected())
    }
}

/// Delete a fee and all of its price rows on an open transaction.
///
/// Returns the number of fee rows removed.
pub(crate) async fn delete_fee_rows(conn: &mut PgConnection, fee_id: i32) -> Result<u64> {
    for table in PRICE_TABLES {
        table.delete_by_fee(&mut *conn, fee_id).await?;
    }

    let result = sqlx::query("DELETE FROM hotel_fees WHERE id = $1")
        .bind(fee_id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete hotel fee {}: {:?}", fee_id, e);
            AppError::Database(e)
        })?;
    Ok(result.rows_affected())
}

pub struct HotelFeeService {
    pool: PgPool,
}

impl HotelFeeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn ensure_hotel(&self, hotel_id: i32) -> Result<()> {
        if !row_exists(&self.pool, "hotels", hotel_id).await? {
            return Err(AppError::NotFound(ErrorCode::HotelNotExist));
        }
        Ok(())
    }

    async fn ensure_fee(&self, fee_id: i32) -> Result<()> {
        if !row_exists(&self.pool, "hotel_fees", fee_id).await? {
            return Err(AppError::NotFound(ErrorCode::HotelFeeNotExist));
        }
        Ok(())
    }

    pub async fn list(&self, hotel_id: i32) -> Result<Vec<HotelFee>> {
        self.ensure_hotel(hotel_id).await?;
        sqlx::query_as::<_, HotelFee>("SELECT * FROM hotel_fees WHERE hotel_id = $1 ORDER BY id")
            .bind(hotel_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list hotel fees: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn create(&self, hotel_id: i32, dto: &HotelFeeDto) -> Result<HotelFee> {
        self.ensure_hotel(hotel_id).await?;

        let fee = sqlx::query_as::<_, HotelFee>(
            r#"
            INSERT INTO hotel_fees (hotel_id, free_policy, free, note, confirm_person, attachment_hash)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(hotel_id)
        .bind(dto.free_policy)
        .bind(dto.free)
        .bind(&dto.note)
        .bind(&dto.confirm_person)
        .bind(&dto.attachment_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create hotel fee: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Created fee {} for hotel {}", fee.id, hotel_id);
        Ok(fee)
    }

    pub async fn get(&self, id: i32) -> Result<HotelFeeDetailDto> {
        let fee = sqlx::query_as::<_, HotelFee>("SELECT * FROM hotel_fees WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get hotel fee: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or(AppError::NotFound(ErrorCode::HotelFeeNotExist))?;

        Ok(HotelFeeDetailDto {
            fee,
            room_price_list: ROOM_PRICES.list(&self.pool, id).await?,
            meal_price_list: MEAL_PRICES.list(&self.pool, id).await?,
            room_additional_charge_list: ROOM_ADDITIONAL_CHARGES.list(&self.pool, id).await?,
            festival_additional_charge_list: FESTIVAL_ADDITIONAL_CHARGES
                .list(&self.pool, id)
                .await?,
        })
    }

    pub async fn update(&self, id: i32, dto: &HotelFeeDto) -> Result<HotelFee> {
        let fee = sqlx::query_as::<_, HotelFee>(
            r#"
            UPDATE hotel_fees
            SET free_policy = $2, free = $3, note = $4, confirm_person = $5,
                attachment_hash = $6, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(dto.free_policy)
        .bind(dto.free)
        .bind(&dto.note)
        .bind(&dto.confirm_person)
        .bind(&dto.attachment_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update hotel fee: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or(AppError::NotFound(ErrorCode::HotelFeeNotExist))?;

        tracing::info!("Updated hotel fee {}", id);
        Ok(fee)
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        if delete_fee_rows(&mut *tx, id).await? == 0 {
            return Err(AppError::NotFound(ErrorCode::HotelFeeNotExist));
        }

        tx.commit().await?;
        tracing::info!("Deleted hotel fee {}", id);
        Ok(())
    }

    // ==================== Price rows ====================

    async fn edit_prices<T, R>(
        &self,
        fee_id: i32,
        table: PriceTable,
        batch: &BatchEditDto<R>,
    ) -> Result<Vec<T>>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
        R: PriceRowDto + Sync,
    {
        self.ensure_fee(fee_id).await?;
        let mut tx = self.pool.begin().await?;

        for id in &batch.delete_id_list {
            table.delete(&mut *tx, *id, fee_id).await?;
        }
        for item in &batch.update_list {
            table.update(&mut *tx, item.id, fee_id, &item.data).await?;
        }
        for row in &batch.create_list {
            table.create(&mut *tx, fee_id, row).await?;
        }

        let rows = table.list(&mut *tx, fee_id).await?;
        tx.commit().await?;

        tracing::info!(
            "Batch edited {} of hotel fee {}: {} created, {} updated, {} deleted",
            table.table,
            fee_id,
            batch.create_list.len(),
            batch.update_list.len(),
            batch.delete_id_list.len()
        );
        Ok(rows)
    }

    pub async fn edit_room_prices(
        &self,
        fee_id: i32,
        batch: &BatchEditDto<RoomPriceDto>,
    ) -> Result<Vec<RoomPrice>> {
        self.edit_prices(fee_id, ROOM_PRICES, batch).await
    }

    pub async fn edit_meal_prices(
        &self,
        fee_id: i32,
        batch: &BatchEditDto<MealPriceDto>,
    ) -> Result<Vec<MealPrice>> {
        self.edit_prices(fee_id, MEAL_PRICES, batch).await
    }

    pub async fn edit_room_additional_charges(
        &self,
        fee_id: i32,
        batch: &BatchEditDto<RoomAdditionalChargeDto>,
    ) -> Result<Vec<RoomAdditionalCharge>> {
        self.edit_prices(fee_id, ROOM_ADDITIONAL_CHARGES, batch).await
    }

    pub async fn edit_festival_additional_charges(
        &self,
        fee_id: i32,
        batch: &BatchEditDto<FestivalAdditionalChargeDto>,
    ) -> Result<Vec<FestivalAdditionalCharge>> {
        self.edit_prices(fee_id, FESTIVAL_ADDITIONAL_CHARGES, batch).await
    }
}
