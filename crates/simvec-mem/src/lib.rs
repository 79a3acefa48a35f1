//! Growable contiguous arrays over a pluggable [`Allocator`].
//!
//! [`DynamicArray`] owns exactly one [`Buffer`] and grows it with a
//! [`CapacityPolicy`]; [`GlobalArray`] is the common instantiation over the
//! process allocator.
//!
//! ```
//! use simvec_mem::{GlobalArray, reserve};
//!
//! let mut arr = GlobalArray::with_reserve(reserve(4)).unwrap();
//! arr.push_back(5).unwrap();
//! arr.push_back(6).unwrap();
//! arr.insert(1, 7).unwrap();
//! assert_eq!(arr, [5, 7, 6]);
//! assert!(arr.at(3).is_err());
//! ```

#[macro_use]
mod macros;

pub mod capacity_policy;
pub mod vec_types;

mod errors;
mod allocator;
mod global_alloc;
mod buffer;

pub use errors::CapacityError;
pub use allocator::Allocator;
pub use global_alloc::{GlobalAlloc, GLOBAL_ALLOC};
pub use buffer::Buffer;
pub use capacity_policy::{CapacityPolicy, Doubling, Fixed};
pub use vec_types::{DynamicArray, GlobalArray, FixedArray, ReserveRequest, reserve};
