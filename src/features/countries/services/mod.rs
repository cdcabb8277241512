mod country_service;

pub use country_service::{ensure_location, CountryService};
