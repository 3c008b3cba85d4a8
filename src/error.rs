use std::error;
use std::fmt::{self, Display, Formatter};

/// Errors trying to construct, parse or decode a [`WarningValue`].
///
/// [`WarningValue`]: crate::WarningValue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
}

/// The kind of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The warn-code is outside of `0..=999`.
    CodeOutOfRange,
    /// The warn-agent is empty or neither a `host` nor a `token`.
    InvalidAgent,
    /// The warn-text is not a valid `quoted-string` (content).
    InvalidText,
    /// The input is not exactly one `warning-value`.
    InvalidFormat,
}

impl Error {
    pub(crate) const fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    pub(crate) const fn code_out_of_range() -> Self {
        Self::new(ErrorKind::CodeOutOfRange)
    }

    pub(crate) const fn invalid_agent() -> Self {
        Self::new(ErrorKind::InvalidAgent)
    }

    pub(crate) const fn invalid_text() -> Self {
        Self::new(ErrorKind::InvalidText)
    }

    pub(crate) const fn invalid_format() -> Self {
        Self::new(ErrorKind::InvalidFormat)
    }

    /// The [`ErrorKind`] of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// `true` if the warn-code was out of range.
    #[must_use]
    pub const fn is_code_out_of_range(&self) -> bool {
        matches!(self.kind, ErrorKind::CodeOutOfRange)
    }

    /// `true` if the warn-agent was empty or malformed.
    #[must_use]
    pub const fn is_invalid_agent(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidAgent)
    }

    /// `true` if the warn-text was malformed.
    #[must_use]
    pub const fn is_invalid_text(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidText)
    }

    /// `true` if the input as a whole could not be parsed.
    #[must_use]
    pub const fn is_invalid_format(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidFormat)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::CodeOutOfRange => f.write_str("warning code out of range (0..=999)"),
            ErrorKind::InvalidAgent => {
                f.write_str("invalid warning agent: expected a non-empty host or token")
            }
            ErrorKind::InvalidText => {
                f.write_str("invalid warning text: not representable as quoted-string")
            }
            ErrorKind::InvalidFormat => f.write_str("invalid warning value"),
        }
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_predicates() {
        let err = Error::code_out_of_range();
        assert_eq!(err.kind(), ErrorKind::CodeOutOfRange);
        assert!(err.is_code_out_of_range());
        assert!(!err.is_invalid_format());

        assert!(Error::invalid_agent().is_invalid_agent());
        assert!(Error::invalid_text().is_invalid_text());
        assert!(Error::from(ErrorKind::InvalidFormat).is_invalid_format());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Error::code_out_of_range().to_string(),
            "warning code out of range (0..=999)"
        );
        assert_eq!(Error::invalid_format().to_string(), "invalid warning value");
    }
}
