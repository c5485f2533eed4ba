//! Shared heap allocation wrapper.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A thread-safe, reference-counted heap value.
///
/// This type wraps `Arc<T>` and enforces that all heap allocations go
/// through the `Value` factory methods (the constructor is crate-private).
/// `Arc` rather than `Rc` because values cross thread boundaries when a
/// closure is handed to `spawn`.
///
/// The `#[repr(transparent)]` attribute ensures this has the same memory
/// layout as `Arc<T>`, so there is no overhead from the wrapper.
#[repr(transparent)]
pub struct Heap<T>(Arc<T>);

impl<T> Heap<T> {
    /// Create a new `Heap` wrapping the given value.
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }
}

impl<T> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: PartialEq> PartialEq for Heap<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: fmt::Display> fmt::Display for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
