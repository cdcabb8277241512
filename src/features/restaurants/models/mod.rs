mod restaurant;
mod restaurant_company;

pub use restaurant::{
    CooperationLevel, CostLevel, MealType, Restaurant, RestaurantAccount, RestaurantMeal,
    RestaurantType,
};
pub use restaurant_company::RestaurantCompany;
