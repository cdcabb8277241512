mod attraction_handler;

pub use attraction_handler::*;
