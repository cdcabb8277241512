mod tour_guide_handler;

pub use tour_guide_handler::*;
