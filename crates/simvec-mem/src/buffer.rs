use core::{
    alloc::Layout,
    marker::PhantomData,
    mem,
    ptr::NonNull,
};

use crate::{
    allocator::Allocator,
    errors::CapacityError,
};

use CapacityError::{AllocFailed, CapacityOverflow};

/// Exclusively owned, uninitialized storage for `capacity` values of `T`.
///
/// The buffer only manages memory. It never constructs, reads or drops
/// elements; whoever writes into it is responsible for them. Dropping the
/// buffer returns the memory to its allocator exactly once.
pub struct Buffer<'alloc, T, Alloc: Allocator> {
    data: NonNull<T>,
    capacity: usize,
    alloc: &'alloc Alloc,
    _marker: PhantomData<T>,
}

impl<'alloc, T, Alloc: Allocator> Buffer<'alloc, T, Alloc> {

    /// A buffer with no slots. Never touches the allocator.
    #[inline(always)]
    pub fn empty(alloc: &'alloc Alloc) -> Self {
        Self {
            data: NonNull::dangling(),
            capacity: 0,
            alloc,
            _marker: PhantomData,
        }
    }

    pub fn allocate(capacity: usize, alloc: &'alloc Alloc) -> Result<Self, CapacityError> {
        if capacity == 0 {
            return Ok(Self::empty(alloc))
        }
        if Layout::array::<T>(capacity).is_err() {
            return Err(CapacityOverflow { requested: capacity })
        }
        let data = unsafe { alloc
            .allocate_uninit(capacity)
            .ok_or(AllocFailed { new_capacity: capacity })?
        };
        Ok(Self {
            data,
            capacity,
            alloc,
            _marker: PhantomData,
        })
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub fn allocator(&self) -> &'alloc Alloc {
        self.alloc
    }

    #[inline(always)]
    pub fn as_non_null(&self) -> NonNull<T> {
        self.data
    }

    #[inline(always)]
    pub fn as_ptr(&self) -> *mut T {
        self.data.as_ptr()
    }

    /// Exchanges storage with `other` without moving any element.
    #[inline(always)]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}

unsafe impl<'alloc, T: Send, Alloc: Allocator + Sync> Send for Buffer<'alloc, T, Alloc> {}
unsafe impl<'alloc, T: Sync, Alloc: Allocator + Sync> Sync for Buffer<'alloc, T, Alloc> {}

impl<'alloc, T, Alloc: Allocator> Drop for Buffer<'alloc, T, Alloc> {

    fn drop(&mut self) {
        if self.capacity == 0 {
            return
        }
        unsafe { self.alloc.free_uninit(self.data, self.capacity) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GLOBAL_ALLOC;
    use core::cell::Cell;

    #[derive(Default)]
    struct Tally {
        live: Cell<isize>,
        calls: Cell<usize>,
    }

    impl Allocator for Tally {

        unsafe fn allocate_raw(&self, layout: Layout) -> Option<NonNull<u8>> {
            self.live.set(self.live.get() + 1);
            self.calls.set(self.calls.get() + 1);
            unsafe { GLOBAL_ALLOC.allocate_raw(layout) }
        }

        unsafe fn free_raw(&self, ptr: NonNull<u8>, layout: Layout) {
            self.live.set(self.live.get() - 1);
            unsafe { GLOBAL_ALLOC.free_raw(ptr, layout) }
        }
    }

    #[test]
    fn empty_buffer_skips_allocator() {
        let tally = Tally::default();
        {
            let buf = Buffer::<u32, _>::allocate(0, &tally).unwrap();
            assert_eq!(buf.capacity(), 0);
        }
        assert_eq!(tally.calls.get(), 0);
    }

    #[test]
    fn drop_releases_exactly_once() {
        let tally = Tally::default();
        {
            let buf = Buffer::<u32, _>::allocate(8, &tally).unwrap();
            assert_eq!(buf.capacity(), 8);
            assert_eq!(tally.live.get(), 1);
        }
        assert_eq!(tally.live.get(), 0);
        assert_eq!(tally.calls.get(), 1);
    }

    #[test]
    fn swap_exchanges_storage() {
        let tally = Tally::default();
        let mut a = Buffer::<u64, _>::allocate(4, &tally).unwrap();
        let mut b = Buffer::<u64, _>::empty(&tally);
        let ptr = a.as_non_null();
        a.swap(&mut b);
        assert_eq!(a.capacity(), 0);
        assert_eq!(b.capacity(), 4);
        assert_eq!(b.as_non_null(), ptr);
        drop(a);
        assert_eq!(tally.live.get(), 1);
        drop(b);
        assert_eq!(tally.live.get(), 0);
    }

    #[test]
    fn overflowing_capacity_is_reported() {
        let res = Buffer::<u64, _>::allocate(usize::MAX, &GLOBAL_ALLOC);
        assert!(matches!(res, Err(CapacityError::CapacityOverflow { requested: usize::MAX })));
    }

    #[test]
    fn zero_sized_elements_need_no_memory() {
        let tally = Tally::default();
        let buf = Buffer::<(), _>::allocate(1000, &tally).unwrap();
        assert_eq!(buf.capacity(), 1000);
        drop(buf);
        assert_eq!(tally.calls.get(), 0);
    }
}
