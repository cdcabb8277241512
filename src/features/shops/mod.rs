//! Shops, their commission agreements and the shopping groups that own them.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{ShopCompanyService, ShopService};
