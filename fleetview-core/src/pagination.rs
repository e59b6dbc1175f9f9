use std::ops::Range;

/// Numbered page buttons to render, with truncation markers on either side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub pages: Vec<usize>,
    pub show_leading_ellipsis: bool,
    pub show_trailing_ellipsis: bool,
}

impl PageWindow {
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Compute which page numbers (1-indexed) to show around `current_page`.
///
/// Near either boundary the window is pinned to the first or last
/// `window_size` pages; elsewhere it is centered on the current page.
/// Never shows more than `window_size` pages or pages past `total_pages`.
pub fn compute_window(current_page: usize, total_pages: usize, window_size: usize) -> PageWindow {
    let window_size = window_size.max(1);

    if total_pages <= window_size {
        return PageWindow {
            pages: (1..=total_pages).collect(),
            show_leading_ellipsis: false,
            show_trailing_ellipsis: false,
        };
    }

    let half = window_size / 2;
    let current = current_page.clamp(1, total_pages);

    let start = if current <= half + 1 {
        1
    } else if current >= total_pages - half {
        total_pages - window_size + 1
    } else {
        current - half
    };
    let end = start + window_size - 1;

    PageWindow {
        pages: (start..=end).collect(),
        show_leading_ellipsis: start > 1,
        show_trailing_ellipsis: end < total_pages,
    }
}

/// `ceil(total_items / page_size)`; zero items means zero pages
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1))
}

/// Items of the 1-indexed `page`; empty when the page lies past the end
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let range = page_range(items.len(), page, page_size);
    &items[range]
}

fn page_range(total_items: usize, page: usize, page_size: usize) -> Range<usize> {
    let page_size = page_size.max(1);
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(total_items);
    let end = start.saturating_add(page_size).min(total_items);
    start..end
}

/// Generic pagination utility for managing paged content
#[derive(Debug, Clone)]
pub struct PaginatedView<T> {
    items: Vec<T>,
    current_page: usize,
    items_per_page: usize,
}

impl<T> PaginatedView<T> {
    pub fn new(items: Vec<T>, items_per_page: usize) -> Self {
        Self {
            items,
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.items.len(), self.items_per_page)
    }

    fn last_valid_page(&self) -> usize {
        self.total_pages().max(1)
    }

    /// Move to page `page`, clamped into range. Returns whether the page changed.
    pub fn set_page(&mut self, page: usize) -> bool {
        let page = page.clamp(1, self.last_valid_page());
        if page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn first_page(&mut self) -> bool {
        self.set_page(1)
    }

    pub fn last_page(&mut self) -> bool {
        self.set_page(self.last_valid_page())
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn prev_page(&mut self) -> bool {
        if self.can_go_prev() {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    pub fn next_page(&mut self) -> bool {
        if self.can_go_next() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    pub fn current_items(&self) -> &[T] {
        page_slice(&self.items, self.current_page, self.items_per_page)
    }

    /// 0-indexed, half-open range of the current page's items
    pub fn current_range(&self) -> Range<usize> {
        page_range(self.items.len(), self.current_page, self.items_per_page)
    }

    pub fn window(&self, window_size: usize) -> PageWindow {
        compute_window(self.current_page, self.total_pages(), window_size)
    }
}
