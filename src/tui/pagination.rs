//! Pagination state for the character browser
//!
//! An explicit state struct owned by the app rather than ambient globals.
//! `current_page` always starts at 1 and `total_pages` defaults to 1 until
//! the first successful fetch reports the real total.

/// Previous/next pagination over a known number of pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    current_page: u32,
    total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
        }
    }
}

impl Pagination {
    pub fn new(start_page: u32) -> Self {
        Self {
            current_page: start_page.max(1),
            total_pages: 1,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Move to an arbitrary page. Callers are expected to respect the
    /// `can_prev`/`can_next` guards; there is no rejection path here.
    pub fn go_to(&mut self, page: u32) {
        self.current_page = page;
    }

    /// Record the total reported by a fetched page
    pub fn set_total_pages(&mut self, total: u32) {
        self.total_pages = total.max(1);
    }

    /// Whether the "Previous" control is active
    pub fn can_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Whether the "Next" control is active
    pub fn can_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// The page "Previous" would navigate to, if allowed
    pub fn prev_page(&self) -> Option<u32> {
        self.can_prev().then(|| self.current_page - 1)
    }

    /// The page "Next" would navigate to, if allowed
    pub fn next_page(&self) -> Option<u32> {
        self.can_next().then(|| self.current_page + 1)
    }

    /// Status label, e.g. "Page 3 of 42"
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages)
    }
}
