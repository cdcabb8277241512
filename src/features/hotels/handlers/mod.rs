mod hotel_company_handler;
mod hotel_fee_handler;
mod hotel_handler;

pub use hotel_company_handler::*;
pub use hotel_fee_handler::*;
pub use hotel_handler::*;
