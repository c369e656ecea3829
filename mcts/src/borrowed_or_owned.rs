use std::ops::Deref;

/// Holds either a borrowed state from the tree or one produced while playing out a simulation.
/// Unlike `Cow` it never needs `T: Clone`.
pub(crate) enum BorrowedOrOwned<'a, T> {
    Borrowed(&'a T),
    Owned(T),
}

impl<T> Deref for BorrowedOrOwned<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self {
            BorrowedOrOwned::Borrowed(r) => r,
            BorrowedOrOwned::Owned(v) => v,
        }
    }
}
