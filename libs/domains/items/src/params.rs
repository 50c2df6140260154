//! Query parameter normalization for `GET /items`.
//!
//! Raw query strings are untrusted: every field may be missing or malformed.
//! Only an over-long search term is rejected; everything else falls back to
//! a default or is clamped. Numbers are read from their leading digits.

use serde::Deserialize;
use std::num::IntErrorKind;
use strum::{Display, EnumString};
use utoipa::IntoParams;
use validator::Validate;

use crate::error::ItemError;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

/// Query string as received; every value is kept as text so that bad input
/// degrades to defaults instead of a deserialization error.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RawListQuery {
    /// Page number, 1-based (default 1). Only leading digits count: `2.9` is page 2
    #[param(example = "1")]
    pub page: Option<String>,
    /// Page size, clamped to 1..=100 (default 10). `25abc` is read as 25
    #[param(example = "10")]
    pub limit: Option<String>,
    /// Substring matched against name and description (max 100 chars).
    /// Case is ignored for ASCII letters only: `RED` finds `red`, `ÉCLAIR` does not find `éclair`
    #[param(example = "widget")]
    pub search: Option<String>,
    /// Exact, case-sensitive category match
    #[param(example = "Electronics")]
    pub category: Option<String>,
    /// One of `name`, `price`, `category`, `id`; anything else sorts by `id`
    #[param(example = "price")]
    pub sort: Option<String>,
    /// `desc` for descending, anything else ascending
    #[param(example = "asc")]
    pub order: Option<String>,
}

/// Sortable columns. Parsing is case-sensitive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SortField {
    #[default]
    Id,
    Name,
    Price,
    Category,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    fn from_param(raw: Option<&str>) -> Self {
        match raw {
            Some("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

/// Normalized list parameters
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct ListParams {
    /// `>= 1`
    pub page: u64,
    /// `1..=100`
    pub limit: u64,
    #[validate(length(max = 100, message = "search must be at most 100 characters"))]
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort: SortField,
    pub order: SortOrder,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            search: None,
            category: None,
            sort: SortField::default(),
            order: SortOrder::default(),
        }
    }
}

impl ListParams {
    /// Rows skipped before the current page: `(page - 1) * limit`
    pub fn skip(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit).min(i64::MAX as u64)
    }
}

impl TryFrom<RawListQuery> for ListParams {
    type Error = ItemError;

    fn try_from(raw: RawListQuery) -> Result<Self, Self::Error> {
        let page = match parse_int(raw.page.as_deref()) {
            Some(page) if page >= 1 => page as u64,
            _ => DEFAULT_PAGE,
        };

        let limit = match parse_int(raw.limit.as_deref()) {
            Some(limit) => limit.clamp(1, MAX_LIMIT as i64) as u64,
            None => DEFAULT_LIMIT,
        };

        let sort = raw
            .sort
            .as_deref()
            .and_then(|s| s.parse::<SortField>().ok())
            .unwrap_or_default();

        let params = ListParams {
            page,
            limit,
            search: non_blank(raw.search),
            category: non_blank(raw.category),
            sort,
            order: SortOrder::from_param(raw.order.as_deref()),
        };

        params.validate().map_err(|errors| {
            ItemError::Validation(
                errors
                    .field_errors()
                    .values()
                    .flat_map(|errs| errs.iter())
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect(),
            )
        })?;

        Ok(params)
    }
}

/// Integer value of a query parameter, see [`parse_leading_int`].
fn parse_int(raw: Option<&str>) -> Option<i64> {
    parse_leading_int(raw?)
}

/// Integer at the start of `raw`: leading whitespace, an optional sign, then
/// the run of ASCII digits. Whatever follows is ignored, so `25abc` is 25 and
/// `2.9` is 2. Out-of-range values saturate so they can still be clamped.
/// `None` when no digit follows the sign.
pub(crate) fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let sign_len = usize::from(s.starts_with(|c| c == '+' || c == '-'));
    let digits_len = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }

    match s[..sign_len + digits_len].parse::<i64>() {
        Ok(value) => Some(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}
