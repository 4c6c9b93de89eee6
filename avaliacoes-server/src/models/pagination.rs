//! Pagination types
//!
//! Query values are parsed leniently: anything that does not yield a
//! positive integer silently falls back to the default.

/// Default page number
const DEFAULT_PAGE: i64 = 1;

/// Default items per page
const DEFAULT_LIMIT: i64 = 3;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: i64,
    /// Items per page
    pub limit: i64,
}

impl Pagination {
    /// Create pagination, substituting defaults for non-positive values.
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: if page >= 1 { page } else { DEFAULT_PAGE },
            limit: if limit >= 1 { limit } else { DEFAULT_LIMIT },
        }
    }

    /// Calculate SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> i64 {
        self.limit
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Raw query parameters for pagination.
///
/// Kept as strings so malformed input never rejects the request.
#[derive(Debug, Clone, Default)]
pub struct PaginationParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Collect from raw query pairs. A repeated key keeps its first value,
/// unknown keys are ignored.
impl FromIterator<(String, String)> for PaginationParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut params.page,
                "limit" => &mut params.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        // Overflowing values count as unparseable and take the default
        // rather than reaching the database as a huge LIMIT/OFFSET.
        let page = params.page.as_deref().and_then(parse_leading_int);
        let limit = params.limit.as_deref().and_then(parse_leading_int);
        Self::new(page.unwrap_or(DEFAULT_PAGE), limit.unwrap_or(DEFAULT_LIMIT))
    }
}

/// Parse the leading integer of a query value.
///
/// Leading whitespace and an optional sign are accepted, then the longest
/// run of ASCII digits. Trailing garbage is ignored (`"2abc"` -> 2).
/// Returns `None` when there are no digits or the value overflows.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_end = s
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len());
    if digits_end == 0 {
        return None;
    }

    let value: i64 = s[..digits_end].parse().ok()?;
    Some(if negative { -value } else { value })
}
