use cqlcodec_primitives::ColumnType;
use std::fmt;
use thiserror::Error as ThisError;

///
/// CodecError
///
/// Structured codec error with a stable classification.
/// Validation kinds are deterministic functions of the input and are never
/// worth retrying; `InvariantViolation` signals a bug on the calling side.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("{message}")]
pub struct CodecError {
    pub kind: ErrorKind,
    pub column_type: Option<ColumnType>,
    pub message: String,

    /// Optional structured detail; the variant (if present) matches `kind`.
    pub detail: Option<ErrorDetail>,
}

impl CodecError {
    fn new(kind: ErrorKind, column_type: Option<ColumnType>, message: String) -> Self {
        Self {
            kind,
            column_type,
            message,
            detail: None,
        }
    }

    /// Malformed textual grammar or an external value of the wrong shape.
    pub fn syntax(column_type: ColumnType, cause: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::Syntax,
            Some(column_type),
            format!("invalid {column_type} value: {cause}"),
        )
    }

    /// Well-formed value outside the representable domain of the type.
    pub fn range(column_type: ColumnType, cause: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::Range,
            Some(column_type),
            format!("{column_type} value out of range: {cause}"),
        )
    }

    /// Range violation against known integral bounds.
    pub fn out_of_bounds(
        column_type: ColumnType,
        value: impl fmt::Display,
        min: impl fmt::Display,
        max: impl fmt::Display,
    ) -> Self {
        let (min, max) = (min.to_string(), max.to_string());
        let mut err = Self::range(column_type, format!("{value} is outside [{min}, {max}]"));
        err.detail = Some(ErrorDetail::Bounds { min, max });

        err
    }

    /// UUID that parses but carries the wrong version nibble.
    pub fn version(column_type: ColumnType, expected: usize, found: usize) -> Self {
        let mut err = Self::new(
            ErrorKind::Version,
            Some(column_type),
            format!("invalid {column_type} value: expected UUID version {expected}, found version {found}"),
        );
        err.detail = Some(ErrorDetail::Version { expected, found });

        err
    }

    /// Collection, tuple, user-defined or otherwise non-scalar type.
    pub fn unsupported(definition: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::UnsupportedType,
            None,
            format!("type not supported by this codec: {definition}"),
        )
    }

    /// Malformed type definition text.
    pub fn definition(definition: &str, cause: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::Syntax,
            None,
            format!("invalid type definition '{definition}': {cause}"),
        )
    }

    /// Internal inconsistency between a column type and a native value.
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::InvariantViolation,
            None,
            format!("codec invariant violated: {}", message.into()),
        )
    }

    /// Whether this error is caused by client input.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        self.kind.is_validation()
    }

    /// Codec errors are deterministic; retrying never changes the outcome.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        false
    }

    /// Client-facing message, or `None` for errors that must not reach clients.
    #[must_use]
    pub fn to_validation_message(&self) -> Option<String> {
        self.is_validation()
            .then(|| format!("Validation error: {}", self.message))
    }

    #[must_use]
    pub fn display_with_kind(&self) -> String {
        format!("{}: {}", self.kind, self.message)
    }
}

///
/// ErrorKind
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    Syntax,
    Range,
    Version,
    UnsupportedType,
    InvariantViolation,
}

impl ErrorKind {
    #[must_use]
    pub const fn is_validation(self) -> bool {
        !matches!(self, Self::InvariantViolation)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Syntax => "syntax",
            Self::Range => "range",
            Self::Version => "version",
            Self::UnsupportedType => "unsupported_type",
            Self::InvariantViolation => "invariant_violation",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

///
/// ErrorDetail
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorDetail {
    Bounds { min: String, max: String },
    Version { expected: usize, found: usize },
}

///
/// TESTS
///
