mod tour_guide_dto;

pub use tour_guide_dto::*;
