//! Vehicle companies with their contacts and bank accounts, vehicle types,
//! registered vehicles and the per-company price of each vehicle type.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{VehicleCompanyService, VehicleService};
