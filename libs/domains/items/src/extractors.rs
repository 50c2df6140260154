//! Path extractor for integer item ids.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

use crate::error::ItemError;
use crate::params::parse_leading_int;

/// The `{id}` path segment parsed as an `i64`.
///
/// Only the leading integer counts, so `12abc` and `12.5` both address item
/// 12. A segment that does not start with a number (`abc`) is rejected with
/// 400 `Invalid item ID`.
#[derive(Debug, Clone, Copy)]
pub struct ItemIdPath(pub i64);

impl<S> FromRequestParts<S> for ItemIdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ItemError::InvalidId.into_response())?;

        parse_id(&raw)
            .map(ItemIdPath)
            .ok_or_else(|| ItemError::InvalidId.into_response())
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    parse_leading_int(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id(" 7 "), Some(7));
        assert_eq!(parse_id("-1"), Some(-1));
        assert_eq!(parse_id("1.5"), Some(1));
        assert_eq!(parse_id("12abc"), Some(12));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("-"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("99999999999999999999"), Some(i64::MAX));
    }
}
