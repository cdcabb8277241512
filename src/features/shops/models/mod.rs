mod shop;
mod shop_company;

pub use shop::{AccountPeriod, AccountWay, Shop, ShopFee, ShopType};
pub use shop_company::{ShopCompany, ShopCompanyContact};
