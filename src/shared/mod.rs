pub mod account;
pub mod batch;
pub mod company;
pub mod constants;
pub mod contact;
pub mod enums;
pub mod search;
#[cfg(test)]
pub mod test_helpers;
pub mod types;
pub mod validation;
