use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::shared::company::CompanyInfo;
use crate::shared::types::{default_number, default_page};

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RestaurantCompanyDto {
    #[serde(flatten)]
    #[validate(nested)]
    pub company: CompanyInfo,

    #[validate(length(max = 200))]
    pub intro: Option<String>,

    #[validate(length(max = 200))]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct RestaurantCompanySearchQuery {
    pub country_id: Option<i32>,
    pub city_id: Option<i32>,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_number")]
    pub number: i64,
}

crate::impl_pagination!(RestaurantCompanySearchQuery);
