use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::vehicles::models::{CompanyType, VehicleCompany, VehicleCompanyContact};
use crate::shared::company::CompanyInfo;
use crate::shared::types::{default_number, default_page};

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct VehicleCompanyDto {
    #[serde(flatten)]
    #[validate(nested)]
    pub company: CompanyInfo,

    /// 1 = company, 2 = person
    #[schema(value_type = i16)]
    pub company_type: CompanyType,

    #[validate(range(min = 0))]
    pub vehicle_number: i16,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VehicleCompanyDetailDto {
    #[serde(flatten)]
    pub company: VehicleCompany,
    pub contact_list: Vec<VehicleCompanyContact>,
}

/// Search vehicle companies.
///
/// `name`, else `name_en`; without either, location combined with `company_type`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct VehicleCompanySearchQuery {
    pub name: Option<String>,
    pub name_en: Option<String>,
    pub country_id: Option<i32>,
    pub city_id: Option<i32>,
    #[param(value_type = Option<i16>)]
    pub company_type: Option<CompanyType>,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_number")]
    pub number: i64,
}

crate::impl_pagination!(VehicleCompanySearchQuery);
