//! Pull-based cursor contract shared by all traversal strategies.
//!
//! A cursor is driven entirely by its caller:
//!
//! ```ignore
//! while cursor.has_next() {
//!     let item = cursor.next()?;
//! }
//! ```
//!
//! Implementations share nothing but this trait. The trait is object safe, so
//! `Box<dyn Cursor<Item = X>>` and `&mut dyn Cursor<Item = X>` can stand in for
//! any concrete cursor.

use std::iter::FusedIterator;

use crate::domain::error::DomainResult;

/// Forward-only, finite, non-restartable producer of elements.
pub trait Cursor {
    type Item;

    /// True iff the next call to [`Cursor::next`] yields an element.
    ///
    /// Never advances the cursor; calling it repeatedly gives the same answer.
    fn has_next(&self) -> bool;

    /// Yield the next element and advance by exactly one position.
    ///
    /// # Errors
    /// [`DomainError::Exhausted`](crate::domain::DomainError::Exhausted) when `has_next()` is false. The cursor state
    /// is left untouched in that case.
    fn next(&mut self) -> DomainResult<Self::Item>;

    /// Adapt the cursor into a standard [`Iterator`].
    fn values(self) -> Values<Self>
    where
        Self: Sized,
    {
        Values { cursor: self }
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    fn has_next(&self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> DomainResult<Self::Item> {
        (**self).next()
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    fn has_next(&self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> DomainResult<Self::Item> {
        (**self).next()
    }
}

/// Iterator adapter returned by [`Cursor::values`].
#[derive(Debug, Clone)]
pub struct Values<C> {
    cursor: C,
}

impl<C> Values<C> {
    /// Give back the underlying cursor, e.g. to inspect its state.
    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for Values<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.cursor.has_next() {
            return None;
        }
        self.cursor.next().ok()
    }
}

impl<C: Cursor> FusedIterator for Values<C> {}

/// Drain a cursor through the `has_next`/`next` loop.
pub fn collect_remaining<C>(cursor: &mut C) -> DomainResult<Vec<C::Item>>
where
    C: Cursor + ?Sized,
{
    let mut out = Vec::new();
    while cursor.has_next() {
        out.push(cursor.next()?);
    }
    Ok(out)
}
