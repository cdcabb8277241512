use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::hotels::models::{HotelCompany, HotelCompanyContact};
use crate::shared::company::CompanyInfo;
use crate::shared::types::{default_number, default_page};

/// Request DTO for creating or replacing a hotel company
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct HotelCompanyDto {
    #[serde(flatten)]
    #[validate(nested)]
    pub company: CompanyInfo,

    #[validate(length(max = 200))]
    pub intro: Option<String>,

    #[validate(length(max = 200))]
    pub note: Option<String>,
}

/// Hotel company with its contact people
#[derive(Debug, Serialize, ToSchema)]
pub struct HotelCompanyDetailDto {
    #[serde(flatten)]
    pub company: HotelCompany,
    pub contact_list: Vec<HotelCompanyContact>,
}

/// Search hotel companies by location (city wins over country)
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct HotelCompanySearchQuery {
    pub country_id: Option<i32>,
    pub city_id: Option<i32>,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_number")]
    pub number: i64,
}

crate::impl_pagination!(HotelCompanySearchQuery);
