mod vehicle_company_service;
mod vehicle_service;

pub use vehicle_company_service::VehicleCompanyService;
pub use vehicle_service::VehicleService;
