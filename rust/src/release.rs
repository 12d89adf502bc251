//! Element release hooks.
//!
//! A [`Release`] hook receives every element the tree gives up without
//! handing it back to the caller: values overwritten by
//! [`BTree::put`](crate::BTree::put) and every element dropped by
//! [`BTree::clear`](crate::BTree::clear) or by dropping the tree.

/// Receives elements the tree discards.
pub trait Release<T> {
    fn release(&mut self, elem: T);
}

/// Default hook: the element is dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoRelease;

impl<T> Release<T> for NoRelease {
    #[inline]
    fn release(&mut self, _elem: T) {}
}

/// Hook backed by a closure.
pub struct ReleaseFn<F>(pub F);

impl<T, F: FnMut(T)> Release<T> for ReleaseFn<F> {
    #[inline]
    fn release(&mut self, elem: T) {
        (self.0)(elem)
    }
}

impl<F> std::fmt::Debug for ReleaseFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ReleaseFn")
    }
}
