pub mod attractions;
pub mod countries;
pub mod hotels;
pub mod restaurants;
pub mod shops;
pub mod tour_guides;
pub mod users;
pub mod vehicles;
