mod restaurant_company_dto;
mod restaurant_dto;

pub use restaurant_company_dto::*;
pub use restaurant_dto::*;
