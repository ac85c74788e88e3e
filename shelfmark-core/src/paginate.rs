//! Fixed-capacity pagination with lazily produced successor pages

/// Descriptor of a page that has not been produced yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub offset: usize,
}

/// One page of an ordered list
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// 1-based page number
    pub number: usize,
    /// Total number of pages for the list
    pub count: usize,
    /// Offset of the first item in the list
    pub start: usize,
    pub items: &'a [T],
    /// Where the next page starts, when this one is not the last
    pub next: Option<PageCursor>,
}

impl<T> Page<'_, T> {
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

/// Page number of the page starting at `offset`
pub fn page_number(offset: usize, capacity: usize) -> usize {
    offset / capacity.max(1) + 1
}

/// Number of pages needed for `len` items
pub fn page_count(len: usize, capacity: usize) -> usize {
    len.div_ceil(capacity.max(1))
}

/// Splits ordered lists into pages of at most `capacity` items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    capacity: usize,
}

impl Paginator {
    /// A capacity of zero is treated as one
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The page covering `[offset, offset + min(capacity, remaining))`
    ///
    /// When more items remain past the page, the first of them is replaced
    /// by a cursor to the following page.
    pub fn paginate<'a, T>(&self, items: &'a [T], offset: usize) -> Page<'a, T> {
        let start = offset.min(items.len());
        let remaining = items.len() - start;
        let emitted = remaining.min(self.capacity);
        let next = (remaining > self.capacity).then_some(PageCursor {
            offset: start + emitted,
        });
        Page {
            number: page_number(offset, self.capacity),
            count: page_count(items.len(), self.capacity).max(1),
            start,
            items: &items[start..start + emitted],
            next,
        }
    }

    /// Walk every page of `items`, producing each one only when asked for
    pub fn pages<'a, T>(&self, items: &'a [T]) -> Pages<'a, T> {
        Pages {
            paginator: *self,
            items,
            cursor: Some(PageCursor { offset: 0 }),
        }
    }
}

/// Iterator following the cursor chain of a paginated list
#[derive(Debug)]
pub struct Pages<'a, T> {
    paginator: Paginator,
    items: &'a [T],
    cursor: Option<PageCursor>,
}

impl<'a, T> Iterator for Pages<'a, T> {
    type Item = Page<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor.take()?;
        let page = self.paginator.paginate(self.items, cursor.offset);
        self.cursor = page.next;
        Some(page)
    }
}

/// Free-function form of [`Paginator::paginate`]
pub fn paginate<T>(items: &[T], capacity: usize, offset: usize) -> Page<'_, T> {
    Paginator::new(capacity).paginate(items, offset)
}
