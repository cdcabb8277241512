mod hotel_company_service;
mod hotel_fee_service;
mod hotel_service;

pub use hotel_company_service::HotelCompanyService;
pub use hotel_fee_service::HotelFeeService;
pub use hotel_service::HotelService;
