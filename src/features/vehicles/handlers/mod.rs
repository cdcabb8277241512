mod vehicle_company_handler;
mod vehicle_handler;

pub use vehicle_company_handler::*;
pub use vehicle_handler::*;
