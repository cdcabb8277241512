//! Countries and the cities that belong to them.
//!
//! Every located entity (hotels, shops, attractions, ...) references a country and
//! a city; [`ensure_location`] is the shared check that the pair is consistent.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{ensure_location, CountryService};
