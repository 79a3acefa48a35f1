use std::alloc::{Layout, alloc, dealloc};

use core::ptr::NonNull;

use crate::Allocator;

/// The process-wide allocator from `std::alloc`.
#[derive(Clone, Copy, Default, Debug)]
pub struct GlobalAlloc;

pub static GLOBAL_ALLOC: GlobalAlloc = GlobalAlloc;

impl Allocator for GlobalAlloc {

    unsafe fn allocate_raw(&self, layout: Layout) -> Option<NonNull<u8>> {
        if layout.size() == 0 {
            return None
        }
        NonNull::new(unsafe { alloc(layout) })
    }

    unsafe fn free_raw(&self, ptr: NonNull<u8>, layout: Layout) {
        if layout.size() == 0 {
            return
        }
        unsafe { dealloc(ptr.as_ptr(), layout) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocates_and_frees_array() {
        unsafe {
            let ptr = GLOBAL_ALLOC.allocate_uninit::<u64>(16).unwrap();
            for i in 0..16 {
                ptr.add(i).write(i as u64 * 3);
            }
            assert_eq!(ptr.add(15).read(), 45);
            GLOBAL_ALLOC.free_uninit(ptr, 16);
        }
    }

    #[test]
    fn zero_sized_requests_never_reach_allocator() {
        unsafe {
            assert_eq!(GLOBAL_ALLOC.allocate_uninit::<u32>(0), Some(NonNull::dangling()));
            assert_eq!(GLOBAL_ALLOC.allocate_uninit::<()>(1024), Some(NonNull::dangling()));
            assert!(GLOBAL_ALLOC.allocate_raw(Layout::new::<()>()).is_none());
        }
    }

    #[test]
    fn overflowing_count_is_refused() {
        unsafe {
            assert!(GLOBAL_ALLOC.allocate_uninit::<u64>(usize::MAX).is_none());
        }
    }
}
