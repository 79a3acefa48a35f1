/// Decides how far a [`DynamicArray`](crate::DynamicArray) grows when it runs
/// out of room.
pub trait CapacityPolicy {

    fn can_grow() -> bool;

    /// New capacity for a container holding `current` slots that needs
    /// room for `required` elements. `None` when the policy refuses to
    /// grow or the arithmetic overflows.
    fn grow(current: usize, required: usize) -> Option<usize>;
}

/// Doubles on every reallocation, or jumps straight to `required` when that
/// is larger. An empty container grows to exactly `required`.
pub struct Doubling {}

impl CapacityPolicy for Doubling {

    #[inline]
    fn can_grow() -> bool {
        true
    }

    #[inline]
    fn grow(current: usize, required: usize) -> Option<usize> {
        Some(required.max(current.checked_mul(2)?))
    }
}

/// Never reallocates after construction.
pub struct Fixed {}

impl CapacityPolicy for Fixed {

    #[inline]
    fn can_grow() -> bool {
        false
    }

    #[inline]
    fn grow(_: usize, _: usize) -> Option<usize> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubling_from_empty_takes_required() {
        assert_eq!(Doubling::grow(0, 1), Some(1));
        assert_eq!(Doubling::grow(0, 5), Some(5));
    }

    #[test]
    fn doubling_prefers_twice_current() {
        assert_eq!(Doubling::grow(4, 5), Some(8));
        assert_eq!(Doubling::grow(4, 4), Some(8));
        assert_eq!(Doubling::grow(4, 20), Some(20));
    }

    #[test]
    fn doubling_overflow_is_none() {
        assert_eq!(Doubling::grow(usize::MAX / 2 + 1, usize::MAX), None);
    }

    #[test]
    fn fixed_refuses() {
        assert!(!Fixed::can_grow());
        assert_eq!(Fixed::grow(4, 5), None);
    }
}
