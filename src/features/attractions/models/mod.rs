mod attraction;

pub use attraction::{Attraction, AttractionFee};
