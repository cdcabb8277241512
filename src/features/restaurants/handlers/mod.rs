mod restaurant_company_handler;
mod restaurant_handler;

pub use restaurant_company_handler::*;
pub use restaurant_handler::*;
