//! Traits for checking whether a shape contains another object.

/// Provides information on whether a shape contains another object.
///
/// Membership is exact: there is no tolerance, and boundaries belong
/// to the shape.
pub trait Contains<T: ?Sized> {
    /// Returns true if `other` lies within this shape.
    fn contains(&self, other: &T) -> bool;
}

impl<S, T> Contains<T> for &S
where
    S: Contains<T> + ?Sized,
    T: ?Sized,
{
    #[inline]
    fn contains(&self, other: &T) -> bool {
        S::contains(*self, other)
    }
}
