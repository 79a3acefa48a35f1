#[derive(Debug)]
pub enum LogError {
    InvalidFormat {
        index: usize,
    },
    Uninitialized,
    IoError(std::io::Error),
}

impl core::fmt::Display for LogError {

    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidFormat { index } => write!(f, "no custom log format at index {}", index),
            Self::Uninitialized => write!(f, "logger was not initialized"),
            Self::IoError(_) => write!(f, "IO error"),
        }
    }
}

impl core::error::Error for LogError {

    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LogError {

    fn from(value: std::io::Error) -> Self {
        Self::IoError(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::error::Error;

    #[test]
    fn io_error_is_exposed_as_source() {
        let err = LogError::from(std::io::Error::other("broken pipe"));
        assert_eq!(err.to_string(), "IO error");
        assert!(err.source().is_some());
    }

    #[test]
    fn invalid_format_names_index() {
        let err = LogError::InvalidFormat { index: 3 };
        assert_eq!(err.to_string(), "no custom log format at index 3");
        assert!(err.source().is_none());
    }
}
