use utoipa::{Modify, OpenApi};

use crate::features::attractions::{
    dtos as attractions_dtos, handlers as attractions_handlers, models as attractions_models,
};
use crate::features::countries::{
    dtos as countries_dtos, handlers as countries_handlers, models as countries_models,
};
use crate::features::hotels::{
    dtos as hotels_dtos, handlers as hotels_handlers, models as hotels_models,
};
use crate::features::restaurants::{
    dtos as restaurants_dtos, handlers as restaurants_handlers, models as restaurants_models,
};
use crate::features::shops::{dtos as shops_dtos, handlers as shops_handlers, models as shops_models};
use crate::features::tour_guides::{
    dtos as tour_guides_dtos, handlers as tour_guides_handlers, models as tour_guides_models,
};
use crate::features::users::{dtos as users_dtos, handlers as users_handlers, models as users_models};
use crate::features::vehicles::{
    dtos as vehicles_dtos, handlers as vehicles_handlers, models as vehicles_models,
};
use crate::shared::account::BankAccountDto;
use crate::shared::batch::{BatchEditDto, BatchUpdateItem};
use crate::shared::company::CompanyInfo;
use crate::shared::contact::ContactDto;
use crate::shared::types::{ApiResponse, SearchResult};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Countries
        countries_handlers::list_countries,
        countries_handlers::create_country,
        countries_handlers::get_country,
        countries_handlers::update_country,
        countries_handlers::delete_country,
        countries_handlers::list_cities,
        countries_handlers::create_city,
        countries_handlers::get_city,
        countries_handlers::update_city,
        countries_handlers::delete_city,
        // Hotels
        hotels_handlers::search_hotel_companies,
        hotels_handlers::create_hotel_company,
        hotels_handlers::get_hotel_company,
        hotels_handlers::update_hotel_company,
        hotels_handlers::delete_hotel_company,
        hotels_handlers::create_hotel_company_contact,
        hotels_handlers::update_hotel_company_contact,
        hotels_handlers::delete_hotel_company_contact,
        hotels_handlers::search_hotels,
        hotels_handlers::create_hotel,
        hotels_handlers::get_hotel,
        hotels_handlers::update_hotel,
        hotels_handlers::delete_hotel,
        hotels_handlers::create_hotel_contact,
        hotels_handlers::update_hotel_contact,
        hotels_handlers::delete_hotel_contact,
        hotels_handlers::list_hotel_accounts,
        hotels_handlers::create_hotel_account,
        hotels_handlers::edit_hotel_accounts,
        hotels_handlers::update_hotel_account,
        hotels_handlers::delete_hotel_account,
        hotels_handlers::list_hotel_fees,
        hotels_handlers::create_hotel_fee,
        hotels_handlers::get_hotel_fee,
        hotels_handlers::update_hotel_fee,
        hotels_handlers::delete_hotel_fee,
        hotels_handlers::edit_room_prices,
        hotels_handlers::edit_meal_prices,
        hotels_handlers::edit_room_additional_charges,
        hotels_handlers::edit_festival_additional_charges,
        // Restaurants
        restaurants_handlers::search_restaurant_companies,
        restaurants_handlers::create_restaurant_company,
        restaurants_handlers::get_restaurant_company,
        restaurants_handlers::update_restaurant_company,
        restaurants_handlers::delete_restaurant_company,
        restaurants_handlers::search_restaurants,
        restaurants_handlers::create_restaurant,
        restaurants_handlers::get_restaurant,
        restaurants_handlers::update_restaurant,
        restaurants_handlers::delete_restaurant,
        restaurants_handlers::list_restaurant_meals,
        restaurants_handlers::create_restaurant_meal,
        restaurants_handlers::get_restaurant_meal,
        restaurants_handlers::update_restaurant_meal,
        restaurants_handlers::delete_restaurant_meal,
        restaurants_handlers::list_restaurant_accounts,
        restaurants_handlers::create_restaurant_account,
        restaurants_handlers::edit_restaurant_accounts,
        restaurants_handlers::update_restaurant_account,
        restaurants_handlers::delete_restaurant_account,
        // Shops
        shops_handlers::search_shop_companies,
        shops_handlers::create_shop_company,
        shops_handlers::get_shop_company,
        shops_handlers::update_shop_company,
        shops_handlers::delete_shop_company,
        shops_handlers::create_shop_company_contact,
        shops_handlers::update_shop_company_contact,
        shops_handlers::delete_shop_company_contact,
        shops_handlers::search_shops,
        shops_handlers::create_shop,
        shops_handlers::get_shop,
        shops_handlers::update_shop,
        shops_handlers::delete_shop,
        shops_handlers::get_shop_fee,
        shops_handlers::create_shop_fee,
        shops_handlers::update_shop_fee,
        shops_handlers::delete_shop_fee,
        // Vehicles
        vehicles_handlers::search_vehicle_companies,
        vehicles_handlers::create_vehicle_company,
        vehicles_handlers::get_vehicle_company,
        vehicles_handlers::update_vehicle_company,
        vehicles_handlers::delete_vehicle_company,
        vehicles_handlers::create_vehicle_company_contact,
        vehicles_handlers::update_vehicle_company_contact,
        vehicles_handlers::delete_vehicle_company_contact,
        vehicles_handlers::list_vehicle_accounts,
        vehicles_handlers::create_vehicle_account,
        vehicles_handlers::edit_vehicle_accounts,
        vehicles_handlers::update_vehicle_account,
        vehicles_handlers::delete_vehicle_account,
        vehicles_handlers::search_vehicle_types,
        vehicles_handlers::create_vehicle_type,
        vehicles_handlers::get_vehicle_type,
        vehicles_handlers::update_vehicle_type,
        vehicles_handlers::delete_vehicle_type,
        vehicles_handlers::search_vehicles,
        vehicles_handlers::create_vehicle,
        vehicles_handlers::get_vehicle,
        vehicles_handlers::update_vehicle,
        vehicles_handlers::delete_vehicle,
        vehicles_handlers::search_vehicle_fees,
        vehicles_handlers::create_vehicle_fee,
        vehicles_handlers::get_vehicle_fee,
        vehicles_handlers::update_vehicle_fee,
        vehicles_handlers::delete_vehicle_fee,
        // Tour guides
        tour_guides_handlers::search_tour_guides,
        tour_guides_handlers::create_tour_guide,
        tour_guides_handlers::get_tour_guide,
        tour_guides_handlers::update_tour_guide,
        tour_guides_handlers::delete_tour_guide,
        tour_guides_handlers::get_tour_guide_fee,
        tour_guides_handlers::create_tour_guide_fee,
        tour_guides_handlers::update_tour_guide_fee,
        tour_guides_handlers::delete_tour_guide_fee,
        tour_guides_handlers::list_tour_guide_accounts,
        tour_guides_handlers::create_tour_guide_account,
        tour_guides_handlers::edit_tour_guide_accounts,
        tour_guides_handlers::update_tour_guide_account,
        tour_guides_handlers::delete_tour_guide_account,
        // Attractions
        attractions_handlers::search_attractions,
        attractions_handlers::create_attraction,
        attractions_handlers::get_attraction,
        attractions_handlers::update_attraction,
        attractions_handlers::delete_attraction,
        attractions_handlers::get_attraction_fee,
        attractions_handlers::create_attraction_fee,
        attractions_handlers::update_attraction_fee,
        attractions_handlers::delete_attraction_fee,
        // Users
        users_handlers::create_user,
        users_handlers::get_user,
        users_handlers::update_user,
        users_handlers::delete_user,
    ),
    components(
        schemas(
            // Shared
            CompanyInfo,
            ContactDto,
            BankAccountDto,
            BatchEditDto<BankAccountDto>,
            BatchUpdateItem<BankAccountDto>,
            // Countries
            countries_models::Country,
            countries_models::City,
            countries_dtos::CountryDto,
            countries_dtos::CityDto,
            countries_dtos::CountryDetailDto,
            countries_dtos::CityDetailDto,
            ApiResponse<countries_dtos::CountryDetailDto>,
            ApiResponse<countries_dtos::CityDetailDto>,
            // Hotels
            hotels_models::HotelCompany,
            hotels_models::HotelCompanyContact,
            hotels_models::Hotel,
            hotels_models::HotelContact,
            hotels_models::HotelAccount,
            hotels_models::HotelFee,
            hotels_models::RoomPrice,
            hotels_models::MealPrice,
            hotels_models::RoomAdditionalCharge,
            hotels_models::FestivalAdditionalCharge,
            hotels_dtos::HotelCompanyDto,
            hotels_dtos::HotelCompanyDetailDto,
            hotels_dtos::HotelDto,
            hotels_dtos::HotelDetailDto,
            hotels_dtos::HotelFeeDto,
            hotels_dtos::HotelFeeDetailDto,
            hotels_dtos::RoomPriceDto,
            hotels_dtos::MealPriceDto,
            hotels_dtos::RoomAdditionalChargeDto,
            hotels_dtos::FestivalAdditionalChargeDto,
            ApiResponse<SearchResult<hotels_models::HotelCompany>>,
            ApiResponse<SearchResult<hotels_models::Hotel>>,
            ApiResponse<hotels_dtos::HotelFeeDetailDto>,
            // Restaurants
            restaurants_models::RestaurantCompany,
            restaurants_models::Restaurant,
            restaurants_models::RestaurantMeal,
            restaurants_models::RestaurantAccount,
            restaurants_dtos::RestaurantCompanyDto,
            restaurants_dtos::RestaurantDto,
            restaurants_dtos::RestaurantMealDto,
            ApiResponse<SearchResult<restaurants_models::RestaurantCompany>>,
            ApiResponse<SearchResult<restaurants_models::Restaurant>>,
            // Shops
            shops_models::ShopCompany,
            shops_models::ShopCompanyContact,
            shops_models::Shop,
            shops_models::ShopFee,
            shops_dtos::ShopCompanyDto,
            shops_dtos::ShopCompanyDetailDto,
            shops_dtos::ShopDto,
            shops_dtos::ShopFeeDto,
            ApiResponse<SearchResult<shops_models::ShopCompany>>,
            ApiResponse<SearchResult<shops_models::Shop>>,
            // Vehicles
            vehicles_models::VehicleCompany,
            vehicles_models::VehicleCompanyContact,
            vehicles_models::VehicleAccount,
            vehicles_models::VehicleType,
            vehicles_models::Vehicle,
            vehicles_models::VehicleFee,
            vehicles_dtos::VehicleCompanyDto,
            vehicles_dtos::VehicleCompanyDetailDto,
            vehicles_dtos::VehicleTypeDto,
            vehicles_dtos::VehicleDto,
            vehicles_dtos::VehicleFeeDto,
            ApiResponse<SearchResult<vehicles_models::VehicleCompany>>,
            ApiResponse<SearchResult<vehicles_models::VehicleType>>,
            ApiResponse<SearchResult<vehicles_models::Vehicle>>,
            ApiResponse<SearchResult<vehicles_models::VehicleFee>>,
            // Tour guides
            tour_guides_models::TourGuide,
            tour_guides_models::TourGuideFee,
            tour_guides_models::TourGuideAccount,
            tour_guides_dtos::TourGuideDto,
            tour_guides_dtos::TourGuideFeeDto,
            ApiResponse<SearchResult<tour_guides_models::TourGuide>>,
            // Attractions
            attractions_models::Attraction,
            attractions_models::AttractionFee,
            attractions_dtos::AttractionDto,
            attractions_dtos::AttractionFeeDto,
            ApiResponse<SearchResult<attractions_models::Attraction>>,
            // Users
            users_models::User,
            users_dtos::CreateUserDto,
            users_dtos::UpdateUserDto,
            ApiResponse<users_models::User>,
        )
    ),
    tags(
        (name = "countries", description = "Countries and their cities"),
        (name = "hotels", description = "Hotel companies, hotels, accounts and fee agreements"),
        (name = "restaurants", description = "Restaurant companies, restaurants, meals and accounts"),
        (name = "shops", description = "Shop companies, shops and commission agreements"),
        (name = "vehicles", description = "Vehicle companies, vehicle types, vehicles and rental fees"),
        (name = "tour_guides", description = "Tour guides, their fees and bank accounts"),
        (name = "attractions", description = "Attractions and ticket prices"),
        (name = "users", description = "Customer and administrator accounts"),
    ),
    info(
        title = "Creole API",
        version = "0.1.0",
        description = "Back office API of the Creole tour operation system",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_resource_is_documented() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for path in [
            "/ota/api/v1/countries/{id}/cities",
            "/ota/api/v1/hotel-fees/{id}/room-prices/batch",
            "/ota/api/v1/restaurants/{id}/meals",
            "/ota/api/v1/shops/{id}/fee",
            "/ota/api/v1/vehicle-fees",
            "/ota/api/v1/tour-guides/{id}/accounts/batch",
            "/ota/api/v1/attraction-fees/{id}",
            "/ota/api/v1/users/{key}",
        ] {
            assert!(paths.iter().any(|p| p.as_str() == path), "{} missing", path);
        }
    }

    #[test]
    fn test_swagger_info_modifier() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Creole Staging".to_string(),
            version: "9.9.9".to_string(),
            description: "staging".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Creole Staging");
        assert_eq!(doc.info.version, "9.9.9");
        assert_eq!(doc.info.description.as_deref(), Some("staging"));
    }
}
