//! Paging primitives shared by list and search queries

use serde::{Deserialize, Serialize};

/// A 1-based page selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page_index: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub fn new(page_index: u32, page_size: u32) -> Self {
        Self {
            page_index: page_index.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Number of rows to skip
    pub fn offset(&self) -> i64 {
        i64::from(self.page_index.saturating_sub(1)) * i64::from(self.page_size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }

    /// Slice an already materialised, ordered result set
    pub fn paginate<T: Clone>(&self, all: &[T]) -> PagedList<T> {
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX).min(all.len());
        let end = start.saturating_add(self.page_size as usize).min(all.len());
        PagedList {
            items: all[start..end].to_vec(),
            page_index: self.page_index,
            page_size: self.page_size,
            total_count: all.len() as i64,
        }
    }
}

/// One page of results plus the size of the whole result set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagedList<T> {
    pub items: Vec<T>,
    pub page_index: u32,
    pub page_size: u32,
    pub total_count: i64,
}

impl<T> PagedList<T> {
    pub fn total_pages(&self) -> i64 {
        let size = i64::from(self.page_size.max(1));
        (self.total_count + size - 1) / size
    }

    pub fn has_previous_page(&self) -> bool {
        self.page_index > 1
    }

    pub fn has_next_page(&self) -> bool {
        i64::from(self.page_index) < self.total_pages()
    }
}
