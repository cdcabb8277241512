use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::coded_enum;

coded_enum! {
    pub enum VehicleKind {
        Car = 1,
        Van = 2,
        BigVan = 3,
        MiniCoach = 4,
        Coach = 5,
        LongCoach = 6,
        Other = 7,
    }
}

/// A vehicle model: kind, brand and seating
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct VehicleType {
    pub id: i32,
    #[schema(value_type = i16)]
    pub vehicle_type: VehicleKind,
    pub brand: String,
    /// Seats on the registration
    pub seat: i16,
    pub available_seat: i16,
    /// Recommended number of passengers
    pub passenger_count: i16,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct Vehicle {
    pub id: i32,
    pub country_id: i32,
    pub city_id: i32,
    pub company_id: i32,
    pub vehicle_type_id: i32,
    pub license: String,
    pub insurance_number: String,
    /// Year the vehicle entered service
    pub start_use: String,
    /// Tourist board registration
    pub register_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Per-kilometre price a company charges for a vehicle type over a period
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct VehicleFee {
    pub id: i32,
    pub company_id: i32,
    pub vehicle_type_id: i32,
    pub unit_price: Decimal,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub confirm_person: Option<String>,
    pub attachment_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
