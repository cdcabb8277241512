mod hotel;
mod hotel_company;
mod hotel_fee;

pub use hotel::{Hotel, HotelAccount, HotelContact};
pub use hotel_company::{HotelCompany, HotelCompanyContact};
pub use hotel_fee::{
    FestivalAdditionalCharge, FestivalType, FreePolicy, HotelFee, MealPrice, MealType,
    RoomAdditionalCharge, RoomLevel, RoomPrice, RoomType,
};
