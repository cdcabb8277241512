mod user;

pub use user::{User, UserKeyType, ADMIN_DEFAULT_ROLE, CUSTOMER_ROLE};
