use thiserror::Error;

/// Errors returned by the keyed operations of [`BSTMap`](crate::BSTMap)
///
/// Every failure is a deterministic function of the map's contents and the
/// argument passed in. The map is never modified by a failing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum MapError {
    /// An absent key (`None`) was passed to a keyed operation
    #[error("key must not be absent")]
    InvalidArgument,

    /// The key was not present in the map
    #[error("key not found in map")]
    KeyNotFound,
}

/// Result type used throughout this crate
pub type Result<T, E = MapError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(MapError::InvalidArgument.to_string(), "key must not be absent");
        assert_eq!(MapError::KeyNotFound.to_string(), "key not found in map");
    }
}
