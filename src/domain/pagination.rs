//! Page-number parsing and page arithmetic for the movie listing.
//!
//! Pages are 1-based. An empty catalog still has one (empty) page, and
//! requests past the end clamp to the last page.

/// Fixed number of movies per listing page.
pub const PAGE_SIZE: u64 = 50;

/// Returned when a numeric page value cannot be converted to an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Invalid page number. Must be an integer.")]
pub struct InvalidPage;

/// A requested page, before it is resolved against the catalog size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    Number(u64),
    Last,
}

impl PageRequest {
    /// Parses the raw `page` query value.
    ///
    /// # Rules
    ///
    /// - absent → page 1
    /// - `"last"` → the final page
    /// - all characters numeric → integer page, clamped to at least 1
    /// - anything else → page 1
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPage`] when every character is numeric but the value
    /// is not a representable integer. Only ASCII digits convert, so
    /// non-ASCII numerals (`"²"`, `"٣"`, `"３"`) fail here, as does overflow.
    pub fn parse(raw: Option<&str>) -> Result<Self, InvalidPage> {
        let Some(raw) = raw else {
            return Ok(Self::Number(1));
        };

        if raw == "last" {
            return Ok(Self::Last);
        }

        if raw.is_empty() || !raw.chars().all(char::is_numeric) {
            return Ok(Self::Number(1));
        }

        let number: u64 = raw.parse().map_err(|_| InvalidPage)?;
        Ok(Self::Number(number.max(1)))
    }
}

/// Splits a catalog of `count` movies into fixed-size pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    count: u64,
    per_page: u64,
}

impl Paginator {
    /// Creates a paginator. `per_page` of zero is treated as one.
    pub fn new(count: u64, per_page: u64) -> Self {
        Self {
            count,
            per_page: per_page.max(1),
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Number of pages, never less than one.
    pub fn total_pages(&self) -> u64 {
        self.count.div_ceil(self.per_page).max(1)
    }

    /// Resolves a request to a concrete page, clamping out-of-range numbers.
    pub fn page(&self, request: PageRequest) -> PageWindow {
        let total_pages = self.total_pages();
        let number = match request {
            PageRequest::Last => total_pages,
            PageRequest::Number(n) => n.clamp(1, total_pages),
        };

        PageWindow {
            number,
            total_pages,
            offset: (number - 1) * self.per_page,
            limit: self.per_page,
        }
    }
}

/// A resolved page: its number plus the offset/limit to query with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub number: u64,
    pub total_pages: u64,
    pub offset: u64,
    pub limit: u64,
}

impl PageWindow {
    pub fn prev(&self) -> Option<u64> {
        (self.number > 1).then(|| self.number - 1)
    }

    pub fn next(&self) -> Option<u64> {
        (self.number < self.total_pages).then(|| self.number + 1)
    }
}
