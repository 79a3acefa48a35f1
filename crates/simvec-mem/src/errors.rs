#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CapacityError {
    FixedCapacity {
        capacity: usize,
    },
    AllocFailed {
        new_capacity: usize,
    },
    CapacityOverflow {
        requested: usize,
    },
    IndexOutOfBounds {
        index: usize,
        len: usize,
    },
}

impl core::fmt::Display for CapacityError {

    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::FixedCapacity { capacity } => {
                write!(f, "exceeded fixed capacity of {}", capacity)
            },
            Self::AllocFailed { new_capacity } => {
                write!(f, "allocation failed with new capacity {}", new_capacity)
            },
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity {} overflows the address space", requested)
            },
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {} was out of bounds of len {}", index, len)
            },
        }
    }
}

impl core::error::Error for CapacityError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            CapacityError::IndexOutOfBounds { index: 4, len: 2 }.to_string(),
            "index 4 was out of bounds of len 2",
        );
        assert_eq!(
            CapacityError::FixedCapacity { capacity: 8 }.to_string(),
            "exceeded fixed capacity of 8",
        );
        assert_eq!(
            CapacityError::AllocFailed { new_capacity: 16 }.to_string(),
            "allocation failed with new capacity 16",
        );
    }
}
