mod attraction_dto;

pub use attraction_dto::*;
