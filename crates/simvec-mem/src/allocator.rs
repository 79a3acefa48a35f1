use core::{
    alloc::Layout,
    ptr::NonNull,
};

/// Source of raw memory for [`Buffer`](crate::Buffer).
///
/// Implementors hand out uninitialized blocks and take them back. They never
/// see element values.
pub trait Allocator {

    /// Returns `None` when the request can't be satisfied. `layout` is never
    /// zero-sized.
    unsafe fn allocate_raw(&self, layout: Layout) -> Option<NonNull<u8>>;

    /// # Safety
    /// `ptr` must come from `allocate_raw` on the same allocator with the same
    /// `layout`, and must not be freed twice.
    unsafe fn free_raw(&self, ptr: NonNull<u8>, layout: Layout);

    unsafe fn allocate_uninit<T>(&self, count: usize) -> Option<NonNull<T>> {
        let layout = Layout::array::<T>(count).ok()?;
        if layout.size() == 0 {
            return Some(NonNull::dangling())
        }
        unsafe { self.allocate_raw(layout).map(|ptr| ptr.cast::<T>()) }
    }

    unsafe fn free_uninit<T>(&self, ptr: NonNull<T>, count: usize) {
        let Ok(layout) = Layout::array::<T>(count) else {
            return
        };
        if layout.size() == 0 {
            return
        }
        unsafe { self.free_raw(ptr.cast::<u8>(), layout) }
    }
}

impl<A: Allocator + ?Sized> Allocator for &A {

    #[inline(always)]
    unsafe fn allocate_raw(&self, layout: Layout) -> Option<NonNull<u8>> {
        unsafe { (**self).allocate_raw(layout) }
    }

    #[inline(always)]
    unsafe fn free_raw(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { (**self).free_raw(ptr, layout) }
    }
}
