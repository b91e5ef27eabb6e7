//! Page windows, sort resolution, and paginated result envelopes.

use serde::{Deserialize, Serialize};

/// Default number of items per page.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Maximum number of items per page.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Clamp a user-provided limit to `[1, max]`, falling back to `default`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided 1-based page number to at least 1.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "ASC", alias = "asc")]
    Asc,
    #[serde(rename = "DESC", alias = "desc")]
    Desc,
}

impl SortDirection {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// A resolved sort: which field, which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F> SortSpec<F> {
    pub fn new(field: F, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// An explicit sort only applies when both field and direction are given.
    pub fn resolve(field: Option<F>, direction: Option<SortDirection>, default: Self) -> Self {
        match (field, direction) {
            (Some(field), Some(direction)) => Self { field, direction },
            _ => default,
        }
    }
}

/// A 1-based page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: i64,
    pub limit: i64,
}

impl PageWindow {
    pub fn from_request(page: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            page: clamp_page(page),
            limit: clamp_limit(limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT),
        }
    }

    /// Rows to skip. Saturates for pages far past the end.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// Raw page returned by a store: the window's items and the total match count.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub total_items: i64,
    pub item_count: i64,
    pub items_per_page: i64,
    pub total_pages: i64,
    pub current_page: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Paginated<T> {
    pub fn new(page: Page<T>, window: PageWindow) -> Self {
        let total_pages = if page.total == 0 {
            0
        } else {
            (page.total + window.limit - 1) / window.limit
        };
        let meta = PageMeta {
            total_items: page.total,
            item_count: page.items.len() as i64,
            items_per_page: window.limit,
            total_pages,
            current_page: window.page,
        };
        Self {
            items: page.items,
            meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_limit_uses_default_when_none() {
        assert_eq!(clamp_limit(None, 10, 100), 10);
    }

    #[test]
    fn clamp_limit_respects_max() {
        assert_eq!(clamp_limit(Some(500), 10, 100), 100);
    }

    #[test]
    fn clamp_limit_floors_at_one() {
        assert_eq!(clamp_limit(Some(0), 10, 100), 1);
        assert_eq!(clamp_limit(Some(-3), 10, 100), 1);
    }

    #[test]
    fn clamp_page_floors_at_one() {
        assert_eq!(clamp_page(None), 1);
        assert_eq!(clamp_page(Some(0)), 1);
        assert_eq!(clamp_page(Some(4)), 4);
    }

    #[test]
    fn window_offset() {
        let window = PageWindow::from_request(Some(3), Some(20));
        assert_eq!(window.offset(), 40);
    }

    #[test]
    fn huge_page_offset_saturates() {
        let window = PageWindow::from_request(Some(i64::MAX), Some(MAX_PAGE_LIMIT));
        assert_eq!(window.offset(), i64::MAX);
    }

    #[test]
    fn explicit_sort_needs_both_parts() {
        let default = SortSpec::new("created_at", SortDirection::Desc);
        assert_eq!(SortSpec::resolve(Some("title"), None, default), default);
        assert_eq!(
            SortSpec::resolve(None, Some(SortDirection::Asc), default),
            default
        );
        assert_eq!(
            SortSpec::resolve(Some("title"), Some(SortDirection::Asc), default),
            SortSpec::new("title", SortDirection::Asc)
        );
    }

    #[test]
    fn meta_rounds_total_pages_up() {
        let page = Page {
            items: vec![1, 2, 3],
            total: 23,
        };
        let paginated = Paginated::new(page, PageWindow::from_request(Some(3), Some(10)));
        assert_eq!(paginated.meta.total_pages, 3);
        assert_eq!(paginated.meta.item_count, 3);
        assert_eq!(paginated.meta.current_page, 3);
        assert_eq!(paginated.meta.items_per_page, 10);
    }

    #[test]
    fn empty_result_has_zero_pages() {
        let page: Page<u8> = Page {
            items: vec![],
            total: 0,
        };
        let paginated = Paginated::new(page, PageWindow::from_request(None, None));
        assert_eq!(paginated.meta.total_pages, 0);
        assert_eq!(paginated.meta.total_items, 0);
    }

    #[test]
    fn direction_accepts_lowercase() {
        let dir: SortDirection = serde_json::from_str("\"asc\"").unwrap();
        assert_eq!(dir, SortDirection::Asc);
        assert_eq!(serde_json::to_string(&SortDirection::Desc).unwrap(), "\"DESC\"");
    }
}
