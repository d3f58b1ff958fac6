use super::validation::FieldErrors;
use crate::domain::errors::ServiceError;

pub const DEFAULT_PAGE_SIZE: u32 = 12;
pub const MAX_PAGE_SIZE: u32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "ASC"),
            SortDirection::Desc => write!(f, "DESC"),
        }
    }
}

impl std::str::FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(format!("Invalid sort direction: {}", s)),
        }
    }
}

/// Sort order of a paged query. `field` is always one of the entity's sortable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub field: String,
    pub direction: SortDirection,
}

impl Sort {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Which fields an entity can be sorted by, and its default order.
#[derive(Debug, Clone, Copy)]
pub struct SortFields {
    pub sortable: &'static [&'static str],
    pub default_field: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort: Sort,
}

impl PageRequest {
    pub fn new(page: u32, size: u32, sort: Sort) -> Self {
        Self {
            page,
            size: size.min(MAX_PAGE_SIZE),
            sort,
        }
    }

    /// Builds a request from raw query parameters.
    ///
    /// Missing values fall back to page 0, `DEFAULT_PAGE_SIZE` and
    /// `SortFields::default_field` ascending. `sort` has the form `field` or `field,asc|desc`.
    pub fn from_query(
        page: Option<i64>,
        size: Option<i64>,
        sort: Option<&str>,
        fields: &SortFields,
    ) -> Result<Self, ServiceError> {
        let mut errors = FieldErrors::new();

        let page = match page {
            None => 0,
            Some(p) if p < 0 => {
                errors.add("page", "Page index must not be negative");
                0
            }
            Some(p) => u32::try_from(p).unwrap_or(u32::MAX),
        };

        let size = match size {
            None => DEFAULT_PAGE_SIZE,
            Some(s) if s < 1 => {
                errors.add("size", "Page size must be at least 1");
                DEFAULT_PAGE_SIZE
            }
            Some(s) => u32::try_from(s).unwrap_or(MAX_PAGE_SIZE),
        };

        let sort = match sort.map(str::trim).filter(|s| !s.is_empty()) {
            None => Sort::asc(fields.default_field),
            Some(raw) => {
                let mut parts = raw.splitn(2, ',');
                let field = parts.next().unwrap_or_default().trim();
                let direction = match parts.next().map(str::trim) {
                    None | Some("") => SortDirection::Asc,
                    Some(d) => d.parse::<SortDirection>().unwrap_or_else(|_| {
                        errors.add("sort", "Sort direction must be 'asc' or 'desc'");
                        SortDirection::Asc
                    }),
                };
                if !fields.sortable.contains(&field) {
                    errors.add("sort", &format!("Cannot sort by '{}'", field));
                }
                Sort {
                    field: field.to_string(),
                    direction,
                }
            }
        };

        errors.into_result()?;
        Ok(Self::new(page, size, sort))
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

/// A slice of a result set plus the metadata needed to navigate the rest of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            page: request.page,
            size: request.size,
            total_elements,
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            0
        } else {
            self.total_elements.div_ceil(u64::from(self.size))
        }
    }

    pub fn is_first(&self) -> bool {
        self.page == 0
    }

    pub fn is_last(&self) -> bool {
        u64::from(self.page) + 1 >= self.total_pages()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
        }
    }
}
