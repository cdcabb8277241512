use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::features::users::models::UserKeyType;
use crate::shared::validation::USERNAME_REGEX;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_customer_info"))]
pub struct CreateUserDto {
    #[validate(length(min = 1, max = 64), regex(path = *USERNAME_REGEX))]
    pub user_name: String,

    #[validate(length(min = 6, max = 128))]
    pub password: String,

    /// Only honoured for admins; customers always get role 1
    pub role: Option<i16>,

    #[serde(default)]
    pub is_admin: bool,

    #[validate(length(min = 1, max = 40))]
    pub customer_name: Option<String>,

    #[validate(length(min = 1, max = 256))]
    pub address: Option<String>,

    #[validate(length(min = 1, max = 20))]
    pub telephone: Option<String>,
}

/// Customers must carry their name, address and telephone
fn validate_customer_info(dto: &CreateUserDto) -> Result<(), ValidationError> {
    if dto.is_admin {
        return Ok(());
    }
    if dto.customer_name.is_none() || dto.address.is_none() || dto.telephone.is_none() {
        let mut err = ValidationError::new("customer_info");
        err.message = Some("customer_name, address and telephone are required for customers".into());
        return Err(err);
    }
    Ok(())
}

/// Partial update; absent fields keep their current value
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUserDto {
    #[validate(length(min = 1, max = 64), regex(path = *USERNAME_REGEX))]
    pub user_name: Option<String>,

    #[validate(length(min = 6, max = 128))]
    pub password: Option<String>,

    /// Ignored for customers
    pub role: Option<i16>,

    #[validate(length(min = 1, max = 40))]
    pub customer_name: Option<String>,

    #[validate(length(min = 1, max = 256))]
    pub address: Option<String>,

    #[validate(length(min = 1, max = 20))]
    pub telephone: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct UserLookupQuery {
    /// 0 = uuid, 1 = id, 2 = user_name, 3 = customer_name
    #[serde(rename = "type", default)]
    #[param(value_type = Option<i16>)]
    pub key_type: UserKeyType,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_customer_requires_contact_fields() {
        let dto: CreateUserDto = serde_json::from_value(json!({
            "user_name": "lanka_travel",
            "password": "s3cret-pass",
            "customer_name": "Lanka Travel"
        }))
        .unwrap();
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.field_errors()["__all__"][0].code, "customer_info");
    }

    #[test]
    fn test_admin_needs_no_customer_fields() {
        let dto: CreateUserDto = serde_json::from_value(json!({
            "user_name": "ops",
            "password": "s3cret-pass",
            "role": 7,
            "is_admin": true
        }))
        .unwrap();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_user_name_must_be_identifier() {
        let dto: CreateUserDto = serde_json::from_value(json!({
            "user_name": "ops team",
            "password": "s3cret-pass",
            "is_admin": true
        }))
        .unwrap();
        assert!(dto
            .validate()
            .unwrap_err()
            .field_errors()
            .contains_key("user_name"));
    }

    #[test]
    fn test_short_password_rejected_on_update() {
        let dto = UpdateUserDto {
            password: Some("abc".to_string()),
            ..Default::default()
        };
        assert!(dto
            .validate()
            .unwrap_err()
            .field_errors()
            .contains_key("password"));
    }
}
