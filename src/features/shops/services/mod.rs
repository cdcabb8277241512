mod shop_company_service;
mod shop_service;

pub use shop_company_service::ShopCompanyService;
pub use shop_service::ShopService;
