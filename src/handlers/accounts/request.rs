//! Account request DTOs

use serde::Deserialize;

/// Listing query parameters
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ListQuery {
    /// Resolve pagination with the usual defaults and cap
    pub fn pagination(&self) -> (i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(20).min(100);
        let offset = i64::from(page - 1) * i64::from(per_page);
        (offset, i64::from(per_page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_defaults_and_cap() {
        let query = ListQuery {
            page: None,
            per_page: None,
        };
        assert_eq!(query.pagination(), (0, 20));

        let query = ListQuery {
            page: Some(3),
            per_page: Some(500),
        };
        assert_eq!(query.pagination(), (200, 100));
    }
}
