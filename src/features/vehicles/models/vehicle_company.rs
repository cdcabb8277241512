use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::coded_enum;
use crate::shared::company::CompanyInfo;
use crate::shared::enums::Currency;

coded_enum! {
    /// Fleet operator or a single owner-driver
    pub enum CompanyType {
        Company = 1,
        Person = 2,
    }
}

#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct VehicleCompany {
    pub id: i32,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub company: CompanyInfo,
    #[schema(value_type = i16)]
    pub company_type: CompanyType,
    /// Size of the fleet
    pub vehicle_number: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct VehicleCompanyContact {
    pub id: i32,
    pub company_id: i32,
    pub contact: String,
    pub position: String,
    pub telephone: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct VehicleAccount {
    pub id: i32,
    pub company_id: i32,
    #[schema(value_type = i16)]
    pub currency: Currency,
    pub bank_name: String,
    pub deposit_bank: String,
    pub payee: String,
    pub account: String,
    pub swift_code: Option<String>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
