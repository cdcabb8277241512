mod shop_company_handler;
mod shop_handler;

pub use shop_company_handler::*;
pub use shop_handler::*;
