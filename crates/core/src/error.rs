//! Domain error model.

use thiserror::Error;

/// Result type used across the kernel.
pub type DomainResult<T> = Result<T, DomainError>;

/// Kernel-level error.
///
/// Keep this focused on deterministic validation failures. Errors are raised
/// synchronously at the point of violation and propagate to the caller;
/// nothing here is retried or recovered internally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required value was absent.
    #[error("required value was missing")]
    NullArgument { name: Option<String> },

    /// A value was present but semantically invalid (e.g. an empty string
    /// or a default-valued identifier).
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        name: Option<String>,
        reason: String,
    },

    /// A value fell outside an inclusive bound.
    #[error("value was outside the permitted range")]
    OutOfRange { name: Option<String> },

    /// A required collaborator was not supplied.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}

impl DomainError {
    pub fn null_argument(name: Option<&str>) -> Self {
        Self::NullArgument {
            name: name.map(Into::into),
        }
    }

    pub fn invalid_argument(name: Option<&str>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.map(Into::into),
            reason: reason.into(),
        }
    }

    pub fn out_of_range(name: Option<&str>) -> Self {
        Self::OutOfRange {
            name: name.map(Into::into),
        }
    }

    pub fn invalid_operation(msg: impl Into<String>) -> Self {
        Self::InvalidOperation(msg.into())
    }

    /// The argument label carried by the error, if one was provided at the
    /// call site.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::NullArgument { name }
            | Self::InvalidArgument { name, .. }
            | Self::OutOfRange { name } => name.as_deref(),
            Self::InvalidOperation(_) => None,
        }
    }
}
