/// Selected index into a list whose length is fixed for the lifetime of the
/// owning component.
///
/// The index is always in bounds while the list is non-empty, so callers
/// can index the list with `selected()` without re-checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    index: usize,
    len: usize,
}

impl Selection {
    /// Start at `preferred`, clamped to the last entry
    pub fn new(preferred: usize, len: usize) -> Self {
        Self {
            index: preferred.min(len.saturating_sub(1)),
            len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current index, or None for an empty list
    pub fn selected(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected() == Some(index)
    }

    /// Select `index`; returns false and leaves the selection alone when out of range
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        true
    }

    /// Move down one entry, stopping at the last
    pub fn next(&mut self) {
        if self.len > 0 && self.index + 1 < self.len {
            self.index += 1;
        }
    }

    /// Move up one entry, stopping at the first
    pub fn previous(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn first(&mut self) {
        self.index = 0;
    }

    pub fn last(&mut self) {
        self.index = self.len.saturating_sub(1);
    }
}
