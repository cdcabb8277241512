mod attraction_service;

pub use attraction_service::AttractionService;
