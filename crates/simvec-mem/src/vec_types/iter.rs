use core::{
    iter::FusedIterator,
    marker::PhantomData,
    ptr::NonNull,
};

use crate::{
    allocator::Allocator,
    buffer::Buffer,
};

use super::strategies;

pub struct IterBase<'a, T, Ref> {
    ptr: NonNull<T>,
    len: usize,
    _markers: PhantomData<(&'a T, Ref)>,
}

impl<'a, T, Ref> IterBase<'a, T, Ref> {

    /// # Safety
    /// `ptr` must point to `len` initialized elements that stay borrowed for
    /// `'a`.
    #[inline(always)]
    pub(crate) unsafe fn new(ptr: NonNull<T>, len: usize) -> Self {
        Self {
            ptr,
            len,
            _markers: PhantomData,
        }
    }
}

pub type Iter<'a, T> = IterBase<'a, T, &'a T>;
pub type IterMut<'a, T> = IterBase<'a, T, &'a mut T>;

unsafe impl<'a, T, Ref: Send> Send for IterBase<'a, T, Ref> {}
unsafe impl<'a, T, Ref: Sync> Sync for IterBase<'a, T, Ref> {}

impl<'a, T> Clone for Iter<'a, T> {

    fn clone(&self) -> Self {
        Self {
            ptr: self.ptr,
            len: self.len,
            _markers: PhantomData,
        }
    }
}

impl<'a, T> Iter<'a, T> {

    #[inline(always)]
    pub fn as_slice(&self) -> &'a [T] {
        unsafe { core::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {

    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            None
        }
        else {
            let item = unsafe { self.ptr.as_ref() };
            self.ptr = unsafe { self.ptr.add(1) };
            self.len -= 1;
            Some(item)
        }
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {

    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            None
        }
        else {
            self.len -= 1;
            Some(unsafe { self.ptr.add(self.len).as_ref() })
        }
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {

    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            None
        }
        else {
            let item = unsafe { self.ptr.as_mut() };
            self.ptr = unsafe { self.ptr.add(1) };
            self.len -= 1;
            Some(item)
        }
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {

    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            None
        }
        else {
            self.len -= 1;
            Some(unsafe { self.ptr.add(self.len).as_mut() })
        }
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

/// Owning iterator returned by `DynamicArray::into_iter`.
///
/// Elements not yet yielded are dropped together with the iterator.
pub struct IntoIter<'alloc, T, Alloc: Allocator> {
    buffer: Buffer<'alloc, T, Alloc>,
    start: usize,
    end: usize,
}

impl<'alloc, T, Alloc: Allocator> IntoIter<'alloc, T, Alloc> {

    /// # Safety
    /// The first `len` slots of `buffer` must be initialized.
    #[inline(always)]
    pub(crate) unsafe fn new(buffer: Buffer<'alloc, T, Alloc>, len: usize) -> Self {
        Self {
            buffer,
            start: 0,
            end: len,
        }
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        unsafe {
            core::slice::from_raw_parts(
                self.buffer.as_non_null().add(self.start).as_ptr(),
                self.end - self.start,
            )
        }
    }
}

impl<'alloc, T, Alloc: Allocator> Iterator for IntoIter<'alloc, T, Alloc> {

    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            None
        }
        else {
            let value = unsafe { self.buffer.as_non_null().add(self.start).read() };
            self.start += 1;
            Some(value)
        }
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<'alloc, T, Alloc: Allocator> DoubleEndedIterator for IntoIter<'alloc, T, Alloc> {

    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            None
        }
        else {
            self.end -= 1;
            Some(unsafe { self.buffer.as_non_null().add(self.end).read() })
        }
    }
}

impl<'alloc, T, Alloc: Allocator> ExactSizeIterator for IntoIter<'alloc, T, Alloc> {}

impl<'alloc, T, Alloc: Allocator> FusedIterator for IntoIter<'alloc, T, Alloc> {}

impl<'alloc, T, Alloc: Allocator> Drop for IntoIter<'alloc, T, Alloc> {

    fn drop(&mut self) {
        let remaining = self.end - self.start;
        self.start = self.end;
        unsafe {
            strategies::drop_in_place(self.buffer.as_non_null().add(self.end - remaining), remaining);
        }
    }
}
