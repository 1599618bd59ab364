//! List query parameters
//!
//! Limit/offset are passed through to the store as-is; range clamping is
//! deliberately out of scope.

use serde::Deserialize;

/// Default number of items returned by the list endpoint
const DEFAULT_LIMIT: i64 = 50;

/// Resolved limit/offset window for a list query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    pub limit: i64,
    pub offset: i64,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

/// Raw query parameters for the list endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl From<ListParams> for ListQuery {
    fn from(params: ListParams) -> Self {
        Self {
            limit: params.limit.unwrap_or(DEFAULT_LIMIT),
            offset: params.offset.unwrap_or(0),
        }
    }
}
