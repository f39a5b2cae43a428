//! Page-number pagination shared by position and employee listings.
//!
//! # Contract
//! - `offset` is a 1-based page number, not a skip count.
//! - An empty collection with `limit == 1 && offset == 1` yields an empty page.
//! - A page is out of range when `len / limit <= offset - 1` in floating
//!   point; the last page may be partial.

use std::fmt::{Display, Formatter};

/// Default upper bound for `limit`.
pub const DEFAULT_MAX_PAGE_LIMIT: u32 = 100;

/// Requested page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u32,
    pub offset: u32,
}

impl PageRequest {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }
}

/// Reasons a page request cannot be served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageError {
    InvalidLimit,
    InvalidOffset,
    LimitTooLarge { limit: u32, max: u32 },
    OutOfRange { total: usize },
}

impl Display for PageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLimit => write!(f, "limit must be at least 1"),
            Self::InvalidOffset => write!(f, "offset must be at least 1"),
            Self::LimitTooLarge { limit, max } => {
                write!(f, "limit {limit} exceeds maximum of {max}")
            }
            Self::OutOfRange { total } => write!(f, "page is out of range for {total} item(s)"),
        }
    }
}

/// Slices `items` into the requested page.
///
/// # Errors
/// - `InvalidLimit` / `InvalidOffset` for zero values.
/// - `LimitTooLarge` when `limit > max_limit`.
/// - `OutOfRange` when the page starts past the available items.
pub fn paginate<T>(items: Vec<T>, page: PageRequest, max_limit: u32) -> Result<Vec<T>, PageError> {
    if items.is_empty() && page.limit == 1 && page.offset == 1 {
        return Ok(Vec::new());
    }
    if page.limit < 1 {
        return Err(PageError::InvalidLimit);
    }
    if page.offset < 1 {
        return Err(PageError::InvalidOffset);
    }
    if page.limit > max_limit {
        return Err(PageError::LimitTooLarge {
            limit: page.limit,
            max: max_limit,
        });
    }

    let page_index = page.offset - 1;
    let total = items.len();
    if total as f64 / f64::from(page.limit) <= f64::from(page_index) {
        return Err(PageError::OutOfRange { total });
    }

    let limit = page.limit as usize;
    let start = limit * page_index as usize;
    Ok(items.into_iter().skip(start).take(limit).collect())
}

#[cfg(test)]
mod tests {
    use super::{paginate, PageError, PageRequest, DEFAULT_MAX_PAGE_LIMIT};

    fn page(items: &[u32], limit: u32, offset: u32) -> Result<Vec<u32>, PageError> {
        paginate(items.to_vec(), PageRequest::new(limit, offset), DEFAULT_MAX_PAGE_LIMIT)
    }

    #[test]
    fn empty_collection_first_unit_page_is_empty() {
        assert_eq!(page(&[], 1, 1), Ok(Vec::new()));
    }

    #[test]
    fn empty_collection_with_other_window_is_out_of_range() {
        assert_eq!(page(&[], 2, 1), Err(PageError::OutOfRange { total: 0 }));
    }

    #[test]
    fn last_page_may_be_partial() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(page(&items, 2, 1), Ok(vec![1, 2]));
        assert_eq!(page(&items, 2, 3), Ok(vec![5]));
        assert_eq!(page(&items, 2, 4), Err(PageError::OutOfRange { total: 5 }));
    }

    #[test]
    fn boundary_cases_from_two_items() {
        let items = [10, 20];
        assert_eq!(page(&items, 2, 1), Ok(vec![10, 20]));
        assert_eq!(page(&items, 1, 2), Ok(vec![20]));
        assert_eq!(page(&items, 1, 3), Err(PageError::OutOfRange { total: 2 }));
        assert_eq!(page(&items, 5, 1), Ok(vec![10, 20]));
    }

    #[test]
    fn zero_values_and_oversized_limits_are_rejected() {
        let items = [1, 2, 3];
        assert_eq!(page(&items, 0, 1), Err(PageError::InvalidLimit));
        assert_eq!(page(&items, 1, 0), Err(PageError::InvalidOffset));
        assert_eq!(
            page(&items, 101, 1),
            Err(PageError::LimitTooLarge {
                limit: 101,
                max: 100
            })
        );
        assert_eq!(page(&items, 100, 1), Ok(vec![1, 2, 3]));
    }
}
