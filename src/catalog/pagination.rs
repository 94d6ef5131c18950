//! Page cursor and page size types for catalog requests.
//!
//! The catalog API uses 1-based page numbers and a bounded `per_page`
//! parameter. These newtypes keep invalid values out of request building and
//! out of the list reducer.

use std::fmt;

use super::error::CatalogError;

/// Largest page size accepted by the catalog API.
pub const MAX_PER_PAGE: u8 = 80;

/// Default number of items requested per page.
pub const DEFAULT_PER_PAGE: u8 = 10;

/// A 1-based page number.
///
/// # Example
///
/// ```
/// use taplist::catalog::PageNumber;
///
/// let first = PageNumber::FIRST;
/// assert!(first.is_first());
/// assert_eq!(first.next().value(), 2);
/// assert!(PageNumber::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(u32);

impl PageNumber {
    /// The first page.
    pub const FIRST: Self = Self(1);

    /// Creates a page number, rejecting zero.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidPagination`] when `value` is zero.
    pub fn new(value: u32) -> Result<Self, CatalogError> {
        if value == 0 {
            return Err(CatalogError::InvalidPagination {
                message: "page numbers start at 1".to_owned(),
            });
        }
        Ok(Self(value))
    }

    /// Returns the following page, saturating at `u32::MAX`.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns true for page 1.
    #[must_use]
    pub const fn is_first(self) -> bool {
        self.0 == 1
    }

    /// Returns the raw page number.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of items requested per page (`1..=MAX_PER_PAGE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PerPage(u8);

impl PerPage {
    /// Creates a page size, rejecting zero and values above [`MAX_PER_PAGE`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidPagination`] when `value` is out of
    /// range.
    pub fn new(value: u8) -> Result<Self, CatalogError> {
        if value == 0 || value > MAX_PER_PAGE {
            return Err(CatalogError::InvalidPagination {
                message: format!("per_page must be between 1 and {MAX_PER_PAGE}, got {value}"),
            });
        }
        Ok(Self(value))
    }

    /// Returns the raw page size.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the page size as a collection length.
    #[must_use]
    pub const fn as_len(self) -> usize {
        self.0 as usize
    }
}

impl Default for PerPage {
    fn default() -> Self {
        Self(DEFAULT_PER_PAGE)
    }
}

/// Parameters of a single catalog page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageRequest {
    page: PageNumber,
    per_page: PerPage,
}

impl PageRequest {
    /// Creates a request for `page` using `per_page` items.
    #[must_use]
    pub const fn new(page: PageNumber, per_page: PerPage) -> Self {
        Self { page, per_page }
    }

    /// Returns the requested page.
    #[must_use]
    pub const fn page(&self) -> PageNumber {
        self.page
    }

    /// Returns the requested page size.
    #[must_use]
    pub const fn per_page(&self) -> PerPage {
        self.per_page
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{CatalogError, MAX_PER_PAGE, PageNumber, PageRequest, PerPage};

    #[rstest]
    #[case::zero(0, false)]
    #[case::one(1, true)]
    #[case::large(9_000, true)]
    fn page_number_validation(#[case] value: u32, #[case] valid: bool) {
        assert_eq!(PageNumber::new(value).is_ok(), valid);
    }

    #[rstest]
    #[case::zero(0, false)]
    #[case::one(1, true)]
    #[case::default_size(10, true)]
    #[case::max(MAX_PER_PAGE, true)]
    #[case::above_max(MAX_PER_PAGE + 1, false)]
    fn per_page_validation(#[case] value: u8, #[case] valid: bool) {
        assert_eq!(PerPage::new(value).is_ok(), valid);
    }

    #[rstest]
    fn zero_page_reports_invalid_pagination() {
        let error = PageNumber::new(0).expect_err("zero should be rejected");

        assert!(matches!(error, CatalogError::InvalidPagination { .. }));
    }

    #[rstest]
    fn next_saturates() {
        let last = PageNumber::new(u32::MAX).expect("valid page");

        assert_eq!(last.next(), last);
        assert_eq!(PageNumber::FIRST.next().value(), 2);
    }

    #[rstest]
    fn request_defaults_to_first_page_of_ten() {
        let request = PageRequest::default();

        assert!(request.page().is_first());
        assert_eq!(request.per_page().value(), 10);
    }
}
