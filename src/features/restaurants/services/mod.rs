mod restaurant_company_service;
mod restaurant_service;

pub use restaurant_company_service::RestaurantCompanyService;
pub use restaurant_service::RestaurantService;
