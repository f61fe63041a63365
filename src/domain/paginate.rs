// src/domain/paginate.rs

/// How many numbered page links the pager renders before collapsing into an ellipsis.
pub const MAX_PAGE_LINKS: usize = 5;

/// One page worth of records plus the page count it was cut from.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
}

/// `max(1, ceil(len / page_size))`. An empty listing still has one (empty) page.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Slices out 1-based `page`. Pages outside the collection come back empty.
pub fn paginate<T: Clone>(records: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let items = page
        .checked_sub(1)
        .and_then(|p| p.checked_mul(page_size))
        .filter(|start| *start < records.len())
        .map(|start| {
            let end = start.saturating_add(page_size).min(records.len());
            records[start..end].to_vec()
        })
        .unwrap_or_default();

    Page {
        items,
        total_pages: total_pages(records.len(), page_size),
    }
}

/// The pager under a listing: previous, up to five numbered links, an ellipsis, next.
///
/// Previous and next stay on the current page at either end instead of going out of range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLinks {
    pub current: usize,
    pub total_pages: usize,
    pub numbers: Vec<usize>,
    pub has_more: bool,
    pub previous: usize,
    pub next: usize,
}

impl PageLinks {
    pub fn new(current: usize, total_pages: usize) -> Self {
        let total_pages = total_pages.max(1);
        let current = current.clamp(1, total_pages);

        Self {
            current,
            total_pages,
            numbers: (1..=total_pages.min(MAX_PAGE_LINKS)).collect(),
            has_more: total_pages > MAX_PAGE_LINKS,
            previous: if current > 1 { current - 1 } else { current },
            next: if current < total_pages {
                current + 1
            } else {
                current
            },
        }
    }

    pub fn at_first(&self) -> bool {
        self.current == 1
    }

    pub fn at_last(&self) -> bool {
        self.current == self.total_pages
    }
}
