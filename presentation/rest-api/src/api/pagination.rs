use poem_openapi::Object;

use business::domain::errors::ServiceError;
use business::domain::shared::pagination::{Page, PageRequest, SortFields};

/// Navigation data returned with every paged collection
#[derive(Object, Debug, Clone, PartialEq)]
#[oai(rename_all = "camelCase")]
pub struct PageMetadata {
    pub total_elements: u64,
    pub total_pages: u64,
    /// Zero-based index of this page
    pub number: u32,
    pub size: u32,
    pub number_of_elements: u64,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> From<&Page<T>> for PageMetadata {
    fn from(page: &Page<T>) -> Self {
        Self {
            total_elements: page.total_elements,
            total_pages: page.total_pages(),
            number: page.page,
            size: page.size,
            number_of_elements: page.content.len() as u64,
            first: page.is_first(),
            last: page.is_last(),
            empty: page.content.is_empty(),
        }
    }
}

/// Reads the `page`, `size` and `sort` query parameters.
pub fn page_request(
    page: Option<i64>,
    size: Option<i64>,
    sort: Option<String>,
    fields: &SortFields,
) -> Result<PageRequest, ServiceError> {
    PageRequest::from_query(page, size, sort.as_deref(), fields)
}
