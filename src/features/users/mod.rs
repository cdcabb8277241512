//! Admin and customer accounts.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/users` | Create a user, hashing the password with Argon2id |
//! | GET | `/users/{key}?type=0..3` | Look up by uuid, id, user name or customer name |
//! | PUT | `/users/{id}` | Partial update |
//! | DELETE | `/users/{id}` | Delete |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::UserService;
