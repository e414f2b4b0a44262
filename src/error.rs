//! Error types for catalog decoding, star lookup and angle parsing.

use thiserror::Error;

/// Failure while decoding the binary star catalog.
///
/// Any decode error aborts the whole load; no partial catalog is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error(
        "Truncated catalog at byte {offset}: {field} needs {needed} bytes, only {available} left"
    )]
    Truncated {
        offset: usize,
        field: &'static str,
        needed: usize,
        available: usize,
    },

    #[error("Duplicate star id {id} in catalog")]
    DuplicateId { id: u32 },

    #[error("Star {id} has a non-finite position")]
    NonFinitePosition { id: u32 },

    #[error("Star {id} has a name field that is not valid UTF-8")]
    InvalidName { id: u32 },
}

/// Failure while encoding a catalog back to the binary layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("Names of star {id} take {len} bytes, the record limit is 255")]
    NameTooLong { id: u32, len: usize },

    /// The name would decode differently: it contains the `|` separator or
    /// ends in a NUL byte.
    #[error("Star {id} has a name that cannot be stored: {name:?}")]
    UnencodableName { id: u32, name: String },

    #[error("Star {id} has no names")]
    NoNames { id: u32 },
}

/// The requested center star is not in any star's name list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown star name: {name}")]
pub struct StarNotFound {
    pub name: String,
}

/// An angle argument could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid angle '{input}': expected a number with optional 'deg' or 'rad' suffix")]
pub struct AngleParseError {
    pub input: String,
}

/// Umbrella error for the session layer.
#[derive(Debug, Error)]
pub enum SkyError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    StarNotFound(#[from] StarNotFound),

    #[error(transparent)]
    Angle(#[from] AngleParseError),
}

pub type SkyResult<T> = Result<T, SkyError>;
