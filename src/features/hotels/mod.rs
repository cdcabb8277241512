//! Hotel companies, hotels and their fee agreements.
//!
//! Deleting a company removes its hotels; deleting a hotel removes its contacts,
//! accounts and fees; deleting a fee removes its four kinds of price rows.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{HotelCompanyService, HotelFeeService, HotelService};
