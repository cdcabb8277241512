use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::core::error::{AppError, ErrorCode, Result};
use crate::shared::constants::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Envelope wrapping every response body: `{code, data, message}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub data: Option<T>,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: ErrorCode::SUCCESS,
            data: Some(data),
            message: "ok".to_string(),
        }
    }

    pub fn error(code: i32, message: String) -> ApiResponse<()> {
        ApiResponse {
            code,
            data: None,
            message,
        }
    }
}

impl ApiResponse<()> {
    /// Success envelope without payload (`data: null`)
    pub fn ok() -> Self {
        Self {
            code: ErrorCode::SUCCESS,
            data: None,
            message: "ok".to_string(),
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Page/number pagination shared by every search endpoint.
///
/// `page` is 1-indexed and `number` is clamped to `1..=MAX_PAGE_SIZE`.
pub trait Pagination {
    fn page(&self) -> i64;

    fn number(&self) -> i64;

    /// Calculate SQL OFFSET from page number; a page past `i64` rows is a parameter error
    fn offset(&self) -> Result<i64> {
        (self.page().max(1) - 1)
            .checked_mul(self.limit())
            .ok_or_else(|| AppError::BadRequest(format!("page {} is out of range", self.page())))
    }

    /// Get clamped number (respects MAX_PAGE_SIZE)
    fn limit(&self) -> i64 {
        self.number().clamp(1, MAX_PAGE_SIZE)
    }

    /// The total count is only computed for the first page
    fn wants_total(&self) -> bool {
        self.page() <= 1
    }
}

/// Pagination-only query parameters
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct PaginationQuery {
    /// Page number (1-indexed, default: 1)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,

    /// Number of items per page (default: 20, max: 100)
    #[serde(default = "default_number")]
    #[param(minimum = 1, maximum = 100)]
    pub number: i64,
}

pub fn default_page() -> i64 {
    DEFAULT_PAGE_NUMBER
}

pub fn default_number() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            number: DEFAULT_PAGE_SIZE,
        }
    }
}

crate::impl_pagination!(PaginationQuery);

/// Implement [`Pagination`] for a search query struct with `page` and `number` fields
#[macro_export]
macro_rules! impl_pagination {
    ($($query:ty),+ $(,)?) => {
        $(
            impl $crate::shared::types::Pagination for $query {
                fn page(&self) -> i64 {
                    self.page
                }

                fn number(&self) -> i64 {
                    self.number
                }
            }
        )+
    };
}

/// One page of search results; `total` is only present on the first page
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SearchResult<T> {
    pub items: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_defaults() {
        let query = PaginationQuery::default();
        assert_eq!(query.page, 1);
        assert_eq!(query.number, 20);
        assert_eq!(query.offset().unwrap(), 0);
        assert_eq!(query.limit(), 20);
        assert!(query.wants_total());
    }

    #[test]
    fn test_pagination_offset_and_clamp() {
        let query = PaginationQuery {
            page: 3,
            number: 15,
        };
        assert_eq!(query.offset().unwrap(), 30);
        assert!(!query.wants_total());

        let query = PaginationQuery {
            page: 2,
            number: 1000,
        };
        assert_eq!(query.limit(), MAX_PAGE_SIZE);
        assert_eq!(query.offset().unwrap(), MAX_PAGE_SIZE);

        let query = PaginationQuery { page: 0, number: 0 };
        assert_eq!(query.limit(), 1);
        assert_eq!(query.offset().unwrap(), 0);
        assert!(query.wants_total());
    }

    #[test]
    fn test_pagination_huge_page_is_parameter_error() {
        let query = PaginationQuery {
            page: 100_000_000_000_000_000,
            number: 100,
        };
        assert!(matches!(query.offset(), Err(AppError::BadRequest(_))));

        let query = PaginationQuery {
            page: i64::MAX,
            number: 1,
        };
        assert_eq!(query.offset().unwrap(), i64::MAX - 1);
    }

    #[test]
    fn test_search_result_total_only_when_present() {
        let first = SearchResult {
            items: vec![1, 2],
            total: Some(12),
        };
        let json = serde_json::to_value(&first).unwrap();
        assert_eq!(json["total"], 12);

        let next = SearchResult {
            items: vec![3],
            total: None,
        };
        let json = serde_json::to_value(&next).unwrap();
        assert!(json.get("total").is_none());
        assert_eq!(json["items"][0], 3);
    }

    #[test]
    fn test_envelope_shape() {
        let json = serde_json::to_value(ApiResponse::success(serde_json::json!({ "id": 7 }))).unwrap();
        assert_eq!(json["code"], 200);
        assert_eq!(json["message"], "ok");
        assert_eq!(json["data"]["id"], 7);

        let json = serde_json::to_value(ApiResponse::ok()).unwrap();
        assert!(json["data"].is_null());

        let json = serde_json::to_value(ApiResponse::<()>::error(
            3012,
            "country do not exist".to_string(),
        ))
        .unwrap();
        assert_eq!(json["code"], 3012);
        assert_eq!(json["message"], "country do not exist");
    }
}
