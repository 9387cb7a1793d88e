//! Error types for the SliceCRC engine

/// Errors that can occur while constructing an engine or loading tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Slice length outside the supported 1..=16 range
    InvalidSliceLength,
    /// Flat table data does not hold exactly 16 x 256 entries
    InvalidTableLength,
}

impl Error {
    /// Returns a human-readable description of the error
    pub const fn description(&self) -> &'static str {
        match self {
            Error::InvalidSliceLength => "slice length must be between 1 and 16 bytes",
            Error::InvalidTableLength => "table data must hold exactly 16 x 256 entries",
        }
    }
}

#[cfg(feature = "std")]
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type alias for SliceCRC operations
pub type Result<T> = core::result::Result<T, Error>;
