pub mod page_query;

pub use page_query::PageQuery;
