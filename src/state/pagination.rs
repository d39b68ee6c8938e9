//! Page cursor shared by paginated views.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

/// Current page (1-based) and the total reported by the last fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageCursor {
    pub current: u32,
    pub total_pages: u32,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self { current: 1, total_pages: 1 }
    }
}

impl PageCursor {
    /// Highest selectable page. An empty result set still has page 1.
    pub fn last_page(self) -> u32 {
        self.total_pages.max(1)
    }

    /// Move to `page`. Returns `false` when it is out of range or already current.
    pub fn go_to(&mut self, page: u32) -> bool {
        if page == 0 || page > self.last_page() || page == self.current {
            return false;
        }
        self.current = page;
        true
    }

    pub fn prev(self) -> Option<u32> {
        (self.current > 1).then(|| self.current - 1)
    }

    pub fn next(self) -> Option<u32> {
        (self.current < self.last_page()).then(|| self.current + 1)
    }

    /// Whether a pagination control is worth rendering.
    pub fn has_multiple_pages(self) -> bool {
        self.total_pages > 1
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
