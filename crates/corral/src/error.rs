use thiserror::Error;

/// Error type shared by the checked accessors (`at` / `at_mut`).
///
/// Duplicate inserts, erases of invalid positions and lookups on empty
/// containers are not errors; those report through their return values.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },
    #[error("key not found")]
    KeyNotFound,
}
