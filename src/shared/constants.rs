/// Default page for search endpoints
pub const DEFAULT_PAGE_NUMBER: i64 = 1;

/// Default page size for search endpoints
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

/// Earliest year accepted for a tour guide's `start_work`
pub const MIN_START_WORK_YEAR: i32 = 1900;
