#[macro_export]
macro_rules! const_assert {
    ($check:expr $(,$msg:tt)*) => {
        const _: () = assert!($check $(,$msg)*);
    };
}

#[macro_export]
macro_rules! size_of {
    ($t:ty) => {
        core::mem::size_of::<$t>()
    };
}

/// Builds a [`GlobalArray`](crate::GlobalArray), returning
/// `Result<GlobalArray<_>, CapacityError>`.
///
/// ```
/// use simvec_mem::dynamic_array;
///
/// let arr = dynamic_array![1, 2, 3].unwrap();
/// assert_eq!(arr.len(), 3);
/// let zeros = dynamic_array![0u8; 4].unwrap();
/// assert_eq!(zeros.as_slice(), &[0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! dynamic_array {
    () => {
        core::result::Result::<_, $crate::CapacityError>::Ok($crate::GlobalArray::new())
    };
    ($value:expr; $n:expr) => {
        $crate::GlobalArray::with_len_value($n, $value)
    };
    [$($elem:expr),+ $(,)?] => {
        $crate::GlobalArray::from_array([$($elem),+])
    };
}

#[cfg(feature = "log")]
macro_rules! mem_log {
    ($level:ident, $($arg:tt)*) => {
        {
            let _ = simvec_log::$level!($($arg)*);
        }
    };
}

#[cfg(not(feature = "log"))]
macro_rules! mem_log {
    ($level:ident, $($arg:tt)*) => {
        if false {
            let _ = format!($($arg)*);
        }
    };
}
