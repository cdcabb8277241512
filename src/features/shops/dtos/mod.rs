mod shop_company_dto;
mod shop_dto;

pub use shop_company_dto::*;
pub use shop_dto::*;
