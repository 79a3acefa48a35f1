mod strategies;
mod reserve;
mod iter;
mod dynamic_array;

pub use reserve::{ReserveRequest, reserve};
pub use iter::{Iter, IterMut, IterBase, IntoIter};
pub use dynamic_array::{DynamicArray, GlobalArray, FixedArray};

pub type Result<T> = core::result::Result<T, crate::CapacityError>;
