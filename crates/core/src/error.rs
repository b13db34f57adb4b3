use std::fmt;

use crate::timestamp::TimestampError;
use crate::types::DbId;
use crate::API_VERSION;

/// Boxed underlying cause carried by wrapping error variants.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Every failure a to-do operation can report.
///
/// Wrapping variants render as `<cause>-> <underlying error>`.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(
        "unsupported API version: service implements API version '{}', but asked for '{requested}'",
        API_VERSION
    )]
    VersionUnsupported { requested: String },

    #[error("failed to connect to database-> {0}")]
    ConnectionFailure(#[source] BoxError),

    #[error("reminder field has invalid format-> {0}")]
    InvalidTimestamp(#[source] TimestampError),

    #[error("todo with ID='{id}' is not found")]
    NotFound { id: DbId },

    #[error("found multiple todo rows with ID='{id}'")]
    DuplicateIdentifier { id: DbId },

    #[error("{context}-> {source}")]
    StorageFailure {
        context: &'static str,
        #[source]
        source: BoxError,
    },
}

impl ServiceError {
    pub fn connection(source: impl Into<BoxError>) -> Self {
        Self::ConnectionFailure(source.into())
    }

    pub fn storage(context: &'static str, source: impl Into<BoxError>) -> Self {
        Self::StorageFailure {
            context,
            source: source.into(),
        }
    }

    /// The status code reported to callers.
    pub fn code(&self) -> Code {
        match self {
            Self::VersionUnsupported { .. } => Code::Unimplemented,
            Self::InvalidTimestamp(_) => Code::InvalidArgument,
            Self::NotFound { .. } => Code::NotFound,
            Self::ConnectionFailure(_)
            | Self::DuplicateIdentifier { .. }
            | Self::StorageFailure { .. } => Code::Unknown,
        }
    }
}

/// Result alias used by the service layer.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Caller-visible status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Code {
    Unimplemented,
    InvalidArgument,
    NotFound,
    Unknown,
}

impl Code {
    pub fn as_str(self) -> &'static str {
        match self {
            Code::Unimplemented => "UNIMPLEMENTED",
            Code::InvalidArgument => "INVALID_ARGUMENT",
            Code::NotFound => "NOT_FOUND",
            Code::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
