mod hotel_company_dto;
mod hotel_dto;
mod hotel_fee_dto;

pub use hotel_company_dto::*;
pub use hotel_dto::*;
pub use hotel_fee_dto::*;
