use core::{
    mem::needs_drop,
    ptr::{self, NonNull},
};

/// Moves `len` elements from `src` into the non-overlapping `dst`. The
/// source slots are left logically uninitialized.
#[inline(always)]
pub(crate) unsafe fn move_elements<T>(src: NonNull<T>, dst: NonNull<T>, len: usize) {
    unsafe {
        src.copy_to_nonoverlapping(dst, len);
    }
}

/// Shifts `[index, len)` one slot right and writes `value` into the gap.
/// Slot `len` must be allocated.
#[inline(always)]
pub(crate) unsafe fn insert_element<T>(ptr: NonNull<T>, value: T, index: usize, len: usize) {
    unsafe {
        let slot = ptr.add(index);
        slot.copy_to(slot.add(1), len - index);
        slot.write(value);
    }
}

/// Reads out the element at `index` and shifts `(index, len)` one slot left.
#[inline(always)]
pub(crate) unsafe fn remove_element<T>(ptr: NonNull<T>, index: usize, len: usize) -> T {
    unsafe {
        let slot = ptr.add(index);
        let value = slot.read();
        slot.add(1).copy_to(slot, len - index - 1);
        value
    }
}

#[inline(always)]
pub(crate) unsafe fn drop_in_place<T>(ptr: NonNull<T>, len: usize) {
    if needs_drop::<T>() {
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(ptr.as_ptr(), len));
        }
    }
}
