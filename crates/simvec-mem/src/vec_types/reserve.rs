/// Requested capacity for [`DynamicArray::with_reserve`](crate::DynamicArray::with_reserve).
///
/// Only exists to tell "allocate `n` slots" apart from "create `n`
/// elements" at the call site.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct ReserveRequest(pub usize);

impl ReserveRequest {

    #[inline(always)]
    pub fn capacity(self) -> usize {
        self.0
    }
}

impl From<usize> for ReserveRequest {

    #[inline(always)]
    fn from(value: usize) -> Self {
        Self(value)
    }
}

#[inline(always)]
pub fn reserve(capacity: usize) -> ReserveRequest {
    ReserveRequest(capacity)
}
