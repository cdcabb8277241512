mod vehicle_company_dto;
mod vehicle_dto;

pub use vehicle_company_dto::*;
pub use vehicle_dto::*;
