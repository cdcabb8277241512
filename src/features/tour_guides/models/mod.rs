mod tour_guide;

pub use tour_guide::{
    CertificateType, Gender, GuideType, ServiceType, TourGuide, TourGuideAccount, TourGuideFee,
};
