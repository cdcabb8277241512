use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Columns shared by hotel, restaurant, shop and vehicle companies.
///
/// Flattened into both the request bodies and the row models of those tables.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, Validate, ToSchema)]
pub struct CompanyInfo {
    pub country_id: i32,
    pub city_id: i32,

    #[validate(length(min = 1, max = 30))]
    pub name: String,

    #[validate(length(min = 1, max = 60))]
    pub name_en: String,

    #[validate(length(min = 1, max = 20))]
    pub nickname_en: String,

    #[validate(length(min = 1, max = 30))]
    pub register_number: String,
}

impl CompanyInfo {
    /// Whether `other` moves the company to a different country or city
    pub fn location_changed(&self, other: &CompanyInfo) -> bool {
        self.country_id != other.country_id || self.city_id != other.city_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company() -> CompanyInfo {
        CompanyInfo {
            country_id: 1,
            city_id: 2,
            name: "锡兰酒店集团".to_string(),
            name_en: "Ceylon Hotels Corporation".to_string(),
            nickname_en: "CHC".to_string(),
            register_number: "PV-00212".to_string(),
        }
    }

    #[test]
    fn test_location_changed() {
        let current = company();
        let mut next = company();
        assert!(!current.location_changed(&next));

        next.city_id = 3;
        assert!(current.location_changed(&next));
    }

    #[test]
    fn test_name_length_counts_characters() {
        let mut info = company();
        info.name = "酒".repeat(30);
        assert!(info.validate().is_ok());

        info.name = "酒".repeat(31);
        assert!(info.validate().is_err());
    }
}
