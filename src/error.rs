//! Error types for bulk set operations.
//!
//! Every operation in this crate validates its arguments before touching
//! the target set or the source sequence. A missing source sequence or a
//! missing key selector is reported as [`SetRangeError::InvalidArgument`].

/// The category of a [`SetRangeError`].
///
/// There is exactly one category today; the enum exists so callers can
/// match on the kind without destructuring the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required argument was absent.
    InvalidArgument,
}

/// Represents a required argument that was not supplied.
///
/// # Examples
///
/// ```rust
/// use hashset_range::InvalidArgumentError;
///
/// let error = InvalidArgumentError {
///     operation: "add_range",
///     parameter: "source",
/// };
/// assert_eq!(
///     format!("{}", error),
///     "add_range: argument `source` must be present"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgumentError {
    /// The name of the operation that rejected the call.
    pub operation: &'static str,
    /// The name of the missing parameter.
    pub parameter: &'static str,
}

impl std::fmt::Display for InvalidArgumentError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: argument `{}` must be present",
            self.operation, self.parameter
        )
    }
}

impl std::error::Error for InvalidArgumentError {}

/// Errors returned by the builders, mutators and predicates of this crate.
///
/// # Examples
///
/// ```rust
/// use hashset_range::{ErrorKind, SetRangeError, add_range};
/// use std::collections::HashSet;
///
/// let mut set: HashSet<i32> = HashSet::new();
/// let error: SetRangeError = add_range(&mut set, None::<&[i32]>).unwrap_err();
/// assert_eq!(error.kind(), ErrorKind::InvalidArgument);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetRangeError {
    /// A required argument was absent.
    InvalidArgument(InvalidArgumentError),
}

impl SetRangeError {
    /// Creates an [`SetRangeError::InvalidArgument`] and records it at debug level.
    pub(crate) fn invalid_argument(operation: &'static str, parameter: &'static str) -> Self {
        log::debug!("{operation}: rejected call, `{parameter}` is absent");
        Self::InvalidArgument(InvalidArgumentError {
            operation,
            parameter,
        })
    }

    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }
}

impl std::fmt::Display for SetRangeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for SetRangeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidArgument(error) => Some(error),
        }
    }
}

impl From<InvalidArgumentError> for SetRangeError {
    fn from(error: InvalidArgumentError) -> Self {
        Self::InvalidArgument(error)
    }
}

/// Unwraps a required argument or fails with [`SetRangeError::InvalidArgument`].
pub(crate) fn require<T>(
    argument: Option<T>,
    operation: &'static str,
    parameter: &'static str,
) -> Result<T, SetRangeError> {
    argument.ok_or_else(|| SetRangeError::invalid_argument(operation, parameter))
}
