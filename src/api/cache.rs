//! In-memory cache of fetched character pages
//!
//! One entry per page number, kept for the whole session. There is no
//! eviction and no TTL: the character roster is static enough that a page
//! fetched once stays valid until the user refreshes it explicitly.

use std::collections::HashMap;
use tracing::trace;

use super::types::CharacterPage;

/// Session-lifetime page cache
#[derive(Debug, Default)]
pub struct PageCache {
    pages: HashMap<u32, CharacterPage>,
    hits: u64,
    misses: u64,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a page, counting the hit or miss for diagnostics
    pub fn get(&mut self, page: u32) -> Option<&CharacterPage> {
        if self.pages.contains_key(&page) {
            self.hits += 1;
            trace!("Cache hit for page {}", page);
        } else {
            self.misses += 1;
            trace!("Cache miss for page {}", page);
        }
        self.pages.get(&page)
    }

    /// Store a fetched page, silently overwriting any previous entry
    pub fn insert(&mut self, page: u32, data: CharacterPage) {
        trace!("Caching page {} ({} characters)", page, data.results.len());
        self.pages.insert(page, data);
    }

    pub fn contains(&self, page: u32) -> bool {
        self.pages.contains_key(&page)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// (hits, misses) observed so far
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}
