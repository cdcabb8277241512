mod city;
mod country;

pub use city::City;
pub use country::Country;
