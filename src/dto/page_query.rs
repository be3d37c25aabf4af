use serde::{Deserialize, Serialize};
use validator::Validate;

/// `?page=&pageSize=` query for list endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<u32>,

    #[validate(range(min = 1, max = 100, message = "pageSize must be between 1 and 100"))]
    pub page_size: Option<u32>,
}

impl PageQuery {
    pub const DEFAULT_PAGE_SIZE: u32 = 10;

    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }

    pub fn page_size(&self) -> u32 {
        self.page_size.unwrap_or(Self::DEFAULT_PAGE_SIZE)
    }

    pub fn offset(&self) -> usize {
        self.page().saturating_sub(1) as usize * self.page_size() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page_of_ten() {
        let query = PageQuery::default();

        assert_eq!(query.page(), 1);
        assert_eq!(query.page_size(), 10);
        assert_eq!(query.offset(), 0);
        assert!(query.validate().is_ok());
    }

    #[test]
    fn offset_skips_previous_pages() {
        let query = PageQuery {
            page: Some(3),
            page_size: Some(5),
        };

        assert_eq!(query.offset(), 10);
    }

    #[test]
    fn rejects_out_of_range_values() {
        let zero_page = PageQuery {
            page: Some(0),
            page_size: None,
        };
        assert!(zero_page.validate().is_err());

        let huge_page = PageQuery {
            page: None,
            page_size: Some(500),
        };
        assert!(huge_page.validate().is_err());
    }
}
