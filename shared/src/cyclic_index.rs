//! Wrapping index into a fixed, non-empty collection.
//!
//! Shared by the gallery lightbox and the testimonial carousel.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("Cannot navigate an empty collection")]
    EmptyCollection,
    #[error("Index {index} is out of range for a collection of {size}")]
    IndexOutOfRange { index: usize, size: usize },
}

/// Index that stays within `0..size`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyclicIndex {
    current: usize,
    size: usize,
}

impl CyclicIndex {
    /// Start at the first item of a collection of `size` items
    pub fn new(size: usize) -> Result<Self, NavigationError> {
        if size == 0 {
            return Err(NavigationError::EmptyCollection);
        }
        Ok(Self { current: 0, size })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn advance(&mut self) -> usize {
        self.current = (self.current + 1) % self.size;
        self.current
    }

    pub fn retreat(&mut self) -> usize {
        self.current = (self.current + self.size - 1) % self.size;
        self.current
    }

    /// Move straight to `target`; out-of-range targets leave the index untouched
    pub fn jump_to(&mut self, target: usize) -> Result<usize, NavigationError> {
        if target >= self.size {
            return Err(NavigationError::IndexOutOfRange {
                index: target,
                size: self.size,
            });
        }
        self.current = target;
        Ok(self.current)
    }
}
