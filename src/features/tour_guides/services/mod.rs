mod tour_guide_service;

pub use tour_guide_service::TourGuideService;
