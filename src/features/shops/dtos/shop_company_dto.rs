use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::shops::models::{ShopCompany, ShopCompanyContact};
use crate::shared::company::CompanyInfo;
use crate::shared::types::{default_number, default_page};

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ShopCompanyDto {
    #[serde(flatten)]
    #[validate(nested)]
    pub company: CompanyInfo,

    #[validate(length(min = 1, max = 500))]
    pub intro: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ShopCompanyDetailDto {
    #[serde(flatten)]
    pub company: ShopCompany,
    pub contact_list: Vec<ShopCompanyContact>,
}

/// Search shop companies by exact `name`, else `name_en`; no filter lists all
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ShopCompanySearchQuery {
    pub name: Option<String>,
    pub name_en: Option<String>,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_number")]
    pub number: i64,
}

crate::impl_pagination!(ShopCompanySearchQuery);
