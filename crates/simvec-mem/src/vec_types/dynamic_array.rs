use core::{
    cmp::Ordering,
    fmt::{self, Debug, Formatter},
    hash::{Hash, Hasher},
    marker::PhantomData,
    mem::{self, ManuallyDrop},
    ops::{Index, IndexMut, Deref, DerefMut},
    ptr::NonNull,
    slice::{self, SliceIndex},
};

use crate::{
    allocator::Allocator,
    buffer::Buffer,
    capacity_policy::{CapacityPolicy, Doubling, Fixed},
    errors::CapacityError,
    global_alloc::{GlobalAlloc, GLOBAL_ALLOC},
    const_assert,
    size_of,
};

use super::{
    strategies,
    Iter,
    IterMut,
    IntoIter,
    ReserveRequest,
    Result,
};

use CapacityError::{FixedCapacity, CapacityOverflow, IndexOutOfBounds};

/// A contiguous, growable array of `T` owning a single [`Buffer`].
///
/// `len` elements are live, `capacity` slots are allocated. Growth goes
/// through one decision point: when `len` has to reach the current capacity
/// the array reallocates to whatever `CapacityPol` answers (with
/// [`Doubling`], `max(required, 2 * capacity)`) and moves every element
/// over.
///
/// Positions are plain indices. Any call that may reallocate (`push_back`,
/// `insert`, `resize*`, `reserve`, `extend_from_slice`) moves the elements,
/// so pointers obtained through `as_ptr` before it are dangling afterwards.
/// References can't outlive such a call; the borrow checker enforces that.
pub struct DynamicArray<'alloc, T, Alloc: Allocator = GlobalAlloc, CapacityPol: CapacityPolicy = Doubling> {
    buffer: Buffer<'alloc, T, Alloc>,
    len: usize,
    _markers: PhantomData<CapacityPol>,
}

pub type GlobalArray<T> = DynamicArray<'static, T, GlobalAlloc, Doubling>;
pub type FixedArray<'alloc, T, Alloc = GlobalAlloc> = DynamicArray<'alloc, T, Alloc, Fixed>;

const_assert!(size_of!(GlobalArray<u32>) == size_of!(Option<GlobalArray<u32>>));

impl<T> GlobalArray<T> {

    #[inline(always)]
    pub fn new() -> Self {
        Self::new_in(&GLOBAL_ALLOC)
    }

    pub fn with_len(len: usize) -> Result<Self>
        where
            T: Default
    {
        Self::with_len_in(len, &GLOBAL_ALLOC)
    }

    pub fn with_len_value(len: usize, value: T) -> Result<Self>
        where
            T: Clone
    {
        Self::with_len_value_in(len, value, &GLOBAL_ALLOC)
    }

    pub fn with_len_with<F>(len: usize, f: F) -> Result<Self>
        where
            F: FnMut() -> T
    {
        Self::with_len_with_in(len, f, &GLOBAL_ALLOC)
    }

    pub fn with_reserve(request: ReserveRequest) -> Result<Self> {
        Self::with_reserve_in(request, &GLOBAL_ALLOC)
    }

    pub fn from_array<const N: usize>(array: [T; N]) -> Result<Self> {
        Self::from_array_in(array, &GLOBAL_ALLOC)
    }

    pub fn from_slice(slice: &[T]) -> Result<Self>
        where
            T: Clone
    {
        Self::from_slice_in(slice, &GLOBAL_ALLOC)
    }
}

impl<'alloc, T, Alloc, CapacityPol> DynamicArray<'alloc, T, Alloc, CapacityPol>
    where
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
{

    /// An empty array. Allocates nothing.
    #[inline(always)]
    pub fn new_in(alloc: &'alloc Alloc) -> Self {
        Self {
            buffer: Buffer::empty(alloc),
            len: 0,
            _markers: PhantomData,
        }
    }

    /// `len` default values, `capacity == len`.
    pub fn with_len_in(len: usize, alloc: &'alloc Alloc) -> Result<Self>
        where
            T: Default
    {
        Self::with_len_with_in(len, T::default, alloc)
    }

    /// `len` clones of `value`, `capacity == len`.
    pub fn with_len_value_in(len: usize, value: T, alloc: &'alloc Alloc) -> Result<Self>
        where
            T: Clone
    {
        Self::with_len_with_in(len, || value.clone(), alloc)
    }

    pub fn with_len_with_in<F>(len: usize, mut f: F, alloc: &'alloc Alloc) -> Result<Self>
        where
            F: FnMut() -> T
    {
        let mut arr = Self::with_reserve_in(ReserveRequest(len), alloc)?;
        for _ in 0..len {
            unsafe { arr.write_next(f()) }
        }
        Ok(arr)
    }

    /// Allocates `request.capacity()` slots and leaves the array empty.
    pub fn with_reserve_in(request: ReserveRequest, alloc: &'alloc Alloc) -> Result<Self> {
        Ok(Self {
            buffer: Buffer::allocate(request.capacity(), alloc)?,
            len: 0,
            _markers: PhantomData,
        })
    }

    pub fn from_array_in<const N: usize>(array: [T; N], alloc: &'alloc Alloc) -> Result<Self> {
        let mut arr = Self::with_reserve_in(ReserveRequest(N), alloc)?;
        for value in array {
            unsafe { arr.write_next(value) }
        }
        Ok(arr)
    }

    pub fn from_slice_in(slice: &[T], alloc: &'alloc Alloc) -> Result<Self>
        where
            T: Clone
    {
        let mut arr = Self::with_reserve_in(ReserveRequest(slice.len()), alloc)?;
        for value in slice {
            unsafe { arr.write_next(value.clone()) }
        }
        Ok(arr)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn allocator(&self) -> &'alloc Alloc {
        self.buffer.allocator()
    }

    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.buffer.as_ptr()
    }

    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buffer.as_ptr()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.buffer.as_ptr(), self.len) }
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.buffer.as_ptr(), self.len) }
    }

    /// Ensures `capacity() >= min_capacity`, allocating exactly
    /// `min_capacity` slots when it has to. Never shrinks.
    pub fn reserve(&mut self, min_capacity: usize) -> Result<()> {
        if min_capacity <= self.capacity() {
            return Ok(())
        }
        if !CapacityPol::can_grow() {
            return Err(FixedCapacity { capacity: self.capacity() })
        }
        mem_log!(debug, "reserving {} slots for {} elements", min_capacity, self.len);
        self.relocate(min_capacity)
    }

    /// Sets the length to `new_len`, filling new slots with `T::default()`.
    ///
    /// Shrinking drops the tail and keeps the allocation. Growing past the
    /// capacity reallocates; on allocation failure nothing changes.
    pub fn resize(&mut self, new_len: usize) -> Result<()>
        where
            T: Default
    {
        self.resize_with(new_len, T::default)
    }

    pub fn resize_value(&mut self, new_len: usize, value: T) -> Result<()>
        where
            T: Clone
    {
        self.resize_with(new_len, || value.clone())
    }

    pub fn resize_with<F>(&mut self, new_len: usize, mut f: F) -> Result<()>
        where
            F: FnMut() -> T
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(())
        }
        self.grow_for(new_len)?;
        unsafe { self.fill_tail(new_len - self.len, |_| f()) }
        Ok(())
    }

    /// Drops everything past `len`. No-op if `len >= self.len()`.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return
        }
        let tail = self.len - len;
        self.len = len;
        unsafe {
            strategies::drop_in_place(self.buffer.as_non_null().add(len), tail);
        }
    }

    /// Appends `value`, same as `insert(self.len(), value)`.
    #[inline(always)]
    pub fn push_back(&mut self, value: T) -> Result<&mut T> {
        let position = self.insert(self.len, value)?;
        Ok(unsafe { self.buffer.as_non_null().add(position).as_mut() })
    }

    /// Inserts `value` at `position`, shifting the tail right. Returns the
    /// position of the inserted element.
    ///
    /// # Panics
    /// If `position > self.len()`.
    pub fn insert(&mut self, position: usize, value: T) -> Result<usize> {
        if position > self.len {
            panic!("position {} was out of bounds with len {} when inserting", position, self.len)
        }
        let new_len = self.len
            .checked_add(1)
            .ok_or(CapacityOverflow { requested: usize::MAX })?;
        self.grow_for(new_len)?;
        unsafe {
            strategies::insert_element(self.buffer.as_non_null(), value, position, self.len);
        }
        self.len = new_len;
        Ok(position)
    }

    /// Removes the last element. `None` when empty.
    #[inline(always)]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None
        }
        self.len -= 1;
        Some(unsafe { self.buffer.as_non_null().add(self.len).read() })
    }

    /// Removes and returns the element at `position`, shifting the tail left.
    ///
    /// # Panics
    /// If `position >= self.len()`.
    pub fn remove(&mut self, position: usize) -> T {
        if position >= self.len {
            panic!("position {} was out of bounds with len {} when removing", position, self.len)
        }
        let value = unsafe {
            strategies::remove_element(self.buffer.as_non_null(), position, self.len)
        };
        self.len -= 1;
        value
    }

    /// Drops the element at `position` and returns the position of its
    /// successor, which equals `len()` when the last element was erased.
    ///
    /// # Panics
    /// If `position >= self.len()`.
    #[inline(always)]
    pub fn erase(&mut self, position: usize) -> usize {
        drop(self.remove(position));
        position
    }

    /// Drops all elements and keeps the allocation.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.truncate(0)
    }

    pub fn at(&self, index: usize) -> Result<&T> {
        if index < self.len {
            Ok(unsafe { self.buffer.as_non_null().add(index).as_ref() })
        } else {
            Err(IndexOutOfBounds { index, len: self.len })
        }
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        if index < self.len {
            Ok(unsafe { self.buffer.as_non_null().add(index).as_mut() })
        } else {
            Err(IndexOutOfBounds { index, len: self.len })
        }
    }

    /// # Safety
    /// `index` must be less than `len()`. Only checked in debug builds.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len, "index {} out of bounds for length {}", index, self.len);
        unsafe { self.buffer.as_non_null().add(index).as_ref() }
    }

    /// # Safety
    /// `index` must be less than `len()`. Only checked in debug builds.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len, "index {} out of bounds for length {}", index, self.len);
        unsafe { self.buffer.as_non_null().add(index).as_mut() }
    }

    #[inline(always)]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    #[inline(always)]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    #[inline(always)]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    pub fn contains(&self, value: &T) -> bool
        where
            T: PartialEq
    {
        self.as_slice().contains(value)
    }

    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<()>
        where
            T: Clone
    {
        if values.is_empty() {
            return Ok(())
        }
        let new_len = self.len
            .checked_add(values.len())
            .ok_or(CapacityOverflow { requested: usize::MAX })?;
        self.grow_for(new_len)?;
        unsafe { self.fill_tail(values.len(), |i| values[i].clone()) }
        Ok(())
    }

    /// Exchanges contents, lengths and capacities. Moves no element.
    #[inline(always)]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other)
    }

    /// Moves the contents out, leaving `self` empty with no allocation.
    #[inline(always)]
    pub fn take(&mut self) -> Self {
        let empty = Self::new_in(self.allocator());
        mem::replace(self, empty)
    }

    /// Deep copy of the live elements into a buffer of exactly `len()` slots.
    ///
    /// Spare capacity of `self` is not carried over.
    pub fn try_clone(&self) -> Result<Self>
        where
            T: Clone
    {
        Self::from_slice_in(self.as_slice(), self.allocator())
    }

    /// Replaces the contents with a copy of `source`.
    ///
    /// The copy is built first and swapped in afterwards, so if allocation
    /// fails or a `clone` panics, `self` is untouched.
    pub fn assign_from(&mut self, source: &Self) -> Result<()>
        where
            T: Clone
    {
        let mut tmp = source.try_clone()?;
        self.swap(&mut tmp);
        Ok(())
    }

    #[inline(always)]
    pub fn iter(&self) -> Iter<'_, T> {
        unsafe { Iter::new(self.buffer.as_non_null(), self.len) }
    }

    #[inline(always)]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        unsafe { IterMut::new(self.buffer.as_non_null(), self.len) }
    }

    /// Growth decision point shared by every operation that adds elements.
    ///
    /// `new_len` strictly below the capacity fits in place. Otherwise the
    /// policy picks a new capacity and the elements move there. A policy that
    /// refuses to grow is fine as long as `new_len` still fits.
    fn grow_for(&mut self, new_len: usize) -> Result<()> {
        let capacity = self.capacity();
        if new_len < capacity {
            return Ok(())
        }
        match CapacityPol::grow(capacity, new_len) {
            Some(new_capacity) => self.relocate(new_capacity),
            None if new_len <= capacity => Ok(()),
            None if CapacityPol::can_grow() => Err(CapacityOverflow { requested: new_len }),
            None => Err(FixedCapacity { capacity }),
        }
    }

    fn relocate(&mut self, new_capacity: usize) -> Result<()> {
        debug_assert!(self.len <= new_capacity);
        let mut buffer = match Buffer::allocate(new_capacity, self.allocator()) {
            Ok(buffer) => buffer,
            Err(err) => {
                mem_log!(warn, "keeping capacity {}: {}", self.capacity(), err);
                return Err(err)
            },
        };
        mem_log!(trace,
            "relocating {} elements, capacity {} -> {}",
            self.len, self.capacity(), new_capacity,
        );
        unsafe {
            strategies::move_elements(self.buffer.as_non_null(), buffer.as_non_null(), self.len);
        }
        self.buffer.swap(&mut buffer);
        Ok(())
    }

    /// Writes `count` values produced by `f` past the end and only then
    /// makes them live. If `f` unwinds, the values written so far are dropped
    /// and `len` is untouched.
    ///
    /// # Safety
    /// `self.len() + count <= self.capacity()`.
    unsafe fn fill_tail<F>(&mut self, count: usize, mut f: F)
        where
            F: FnMut(usize) -> T
    {
        debug_assert!(self.len + count <= self.capacity());
        let mut tail = TailGuard {
            start: unsafe { self.buffer.as_non_null().add(self.len) },
            written: 0,
        };
        while tail.written < count {
            let value = f(tail.written);
            unsafe { tail.start.add(tail.written).write(value) }
            tail.written += 1;
        }
        mem::forget(tail);
        self.len += count;
    }

    /// # Safety
    /// `self.len() < self.capacity()`.
    #[inline(always)]
    unsafe fn write_next(&mut self, value: T) {
        debug_assert!(self.len < self.capacity());
        unsafe { self.buffer.as_non_null().add(self.len).write(value) }
        self.len += 1;
    }
}

/// Slots written past `len` that are not live yet.
struct TailGuard<T> {
    start: NonNull<T>,
    written: usize,
}

impl<T> Drop for TailGuard<T> {

    fn drop(&mut self) {
        unsafe { strategies::drop_in_place(self.start, self.written) }
    }
}

impl<'alloc, T, Alloc, CapacityPol> Drop for DynamicArray<'alloc, T, Alloc, CapacityPol>
    where
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
{

    #[inline(always)]
    fn drop(&mut self) {
        self.clear()
    }
}

impl<T> Default for GlobalArray<T> {

    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<'alloc, T, Alloc, CapacityPol> Clone for DynamicArray<'alloc, T, Alloc, CapacityPol>
    where
        T: Clone,
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
{

    /// # Panics
    /// If allocation fails.
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(copy) => copy,
            Err(err) => panic!("failed to clone array of len {}: {}", self.len, err),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(err) = self.assign_from(source) {
            panic!("failed to clone array of len {}: {}", source.len, err)
        }
    }
}

impl<'alloc, T, I, Alloc, CapacityPol> Index<I> for DynamicArray<'alloc, T, Alloc, CapacityPol>
    where
        I: SliceIndex<[T]>,
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
{

    type Output = I::Output;

    #[inline(always)]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<'alloc, T, I, Alloc, CapacityPol> IndexMut<I> for DynamicArray<'alloc, T, Alloc, CapacityPol>
    where
        I: SliceIndex<[T]>,
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
{

    #[inline(always)]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<'alloc, T, Alloc, CapacityPol> Deref for DynamicArray<'alloc, T, Alloc, CapacityPol>
    where
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
{

    type Target = [T];

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<'alloc, T, Alloc, CapacityPol> DerefMut for DynamicArray<'alloc, T, Alloc, CapacityPol>
    where
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
{

    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<'alloc, T, Alloc, CapacityPol> AsRef<[T]> for DynamicArray<'alloc, T, Alloc, CapacityPol>
    where
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
{

    #[inline(always)]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<'alloc, T, Alloc, CapacityPol> AsMut<[T]> for DynamicArray<'alloc, T, Alloc, CapacityPol>
    where
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
{

    #[inline(always)]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'vec, 'alloc, T, Alloc, CapacityPol> IntoIterator for &'vec DynamicArray<'alloc, T, Alloc, CapacityPol>
    where
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
{

    type Item = &'vec T;
    type IntoIter = Iter<'vec, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'vec, 'alloc, T, Alloc, CapacityPol> IntoIterator for &'vec mut DynamicArray<'alloc, T, Alloc, CapacityPol>
    where
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
{

    type Item = &'vec mut T;
    type IntoIter = IterMut<'vec, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<'alloc, T, Alloc, CapacityPol> IntoIterator for DynamicArray<'alloc, T, Alloc, CapacityPol>
    where
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
{

    type Item = T;
    type IntoIter = IntoIter<'alloc, T, Alloc>;

    fn into_iter(self) -> Self::IntoIter {
        let mut this = ManuallyDrop::new(self);
        let alloc = this.allocator();
        let buffer = mem::replace(&mut this.buffer, Buffer::empty(alloc));
        unsafe { IntoIter::new(buffer, this.len) }
    }
}

impl<'alloc, T, Alloc, CapacityPol> Extend<T> for DynamicArray<'alloc, T, Alloc, CapacityPol>
    where
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
{

    /// Reserves the iterator's lower size bound up front.
    ///
    /// # Panics
    /// If the array can't grow to hold every item.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if CapacityPol::can_grow() {
            if let Err(err) = self.reserve(self.len.saturating_add(lower)) {
                panic!("failed to extend array of len {}: {}", self.len, err)
            }
        }
        for value in iter {
            if self.len < self.capacity() {
                unsafe { self.write_next(value) }
            } else if let Err(err) = self.push_back(value) {
                panic!("failed to extend array of len {}: {}", self.len, err)
            }
        }
    }
}

impl<T> FromIterator<T> for GlobalArray<T> {

    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = Self::new();
        arr.extend(iter);
        arr
    }
}

impl<'alloc, T, Alloc, CapacityPol> PartialEq for DynamicArray<'alloc, T, Alloc, CapacityPol>
    where
        T: PartialEq,
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
{

    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'alloc, T, Alloc, CapacityPol> Eq for DynamicArray<'alloc, T, Alloc, CapacityPol>
    where
        T: Eq,
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
{}

impl<'alloc, T, Alloc, CapacityPol, const N: usize> PartialEq<[T; N]> for DynamicArray<'alloc, T, Alloc, CapacityPol>
    where
        T: PartialEq,
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
{

    #[inline(always)]
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'alloc, T, Alloc, CapacityPol> PartialOrd for DynamicArray<'alloc, T, Alloc, CapacityPol>
    where
        T: PartialOrd,
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
{

    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<'alloc, T, Alloc, CapacityPol> Ord for DynamicArray<'alloc, T, Alloc, CapacityPol>
    where
        T: Ord,
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
{

    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<'alloc, T, Alloc, CapacityPol> Hash for DynamicArray<'alloc, T, Alloc, CapacityPol>
    where
        T: Hash,
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
{

    #[inline(always)]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<'alloc, T, Alloc, CapacityPol> Debug for DynamicArray<'alloc, T, Alloc, CapacityPol>
    where
        T: Debug,
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
{

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
