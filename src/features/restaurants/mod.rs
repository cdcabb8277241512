//! Restaurants, their set meals and bank accounts, and the companies that run them.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{RestaurantCompanyService, RestaurantService};
