//! Error types for splitting, checking and changing Subversion URLs.

use std::fmt;

use crate::edit::EditKey;
use crate::field::Field;

/// A value that does not satisfy the grammar of its field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    /// The offending raw value
    pub input: String,
    /// Why the value was rejected
    pub kind: FormatErrorKind,
}

impl FormatError {
    pub(crate) fn new(input: impl Into<String>, kind: FormatErrorKind) -> Self {
        Self {
            input: input.into(),
            kind,
        }
    }
}

/// Specific format error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// Value contains characters from the forbidden set `< > | @ ? *`
    ForbiddenChars {
        /// The forbidden characters found, sorted and deduplicated
        chars: String,
    },
    /// URL has neither a network scheme nor a host
    MissingSchemeAndHost,
    /// URL carries a query string or a fragment
    QueryOrFragment {
        /// The query string, if any
        query: Option<String>,
        /// The fragment, if any
        fragment: Option<String>,
    },
    /// URL doesn't start with the configured base URL
    BaseUrlMismatch {
        /// The base URL (trailing slashes stripped)
        baseurl: String,
    },
    /// A dotted name contains a slash
    SlashInName,
    /// A dotted name has an empty dot-delimited component
    BadlyDotted,
    /// A reserved keyword was used as a name
    ReservedKeyword {
        /// The keyword
        keyword: &'static str,
    },
    /// Branch part doesn't start with `trunk`, `branches` or `tags`
    InvalidBranchPart,
    /// Value is not acceptable for a boolean-style switch
    InvalidSwitch {
        /// The keyword the switch selects
        keyword: &'static str,
    },
    /// A boolean was given where text is expected
    ExpectedText,
    /// Peg revision is not a number
    PegNotNumber,
    /// Peg revision is zero or negative
    PegNotPositive,
    /// Edit key is not one of the known names
    UnknownEditKey,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let input = &self.input;
        match &self.kind {
            FormatErrorKind::ForbiddenChars { chars } => {
                write!(f, "'{input}' contains forbidden characters ({chars})")
            }
            FormatErrorKind::MissingSchemeAndHost => {
                write!(f, "URL '{input}' doesn't contain a scheme nor a hostname")
            }
            FormatErrorKind::QueryOrFragment { query, fragment } => write!(
                f,
                "error parsing '{input}': URLs containing query strings ({}) or fragments ({}) are not supported",
                query.as_deref().unwrap_or(""),
                fragment.as_deref().unwrap_or("")
            ),
            FormatErrorKind::BaseUrlMismatch { baseurl } => {
                write!(f, "URL '{input}' doesn't match the given baseurl '{baseurl}'")
            }
            FormatErrorKind::SlashInName => {
                write!(f, "dotted name '{input}' must not contain slashes")
            }
            FormatErrorKind::BadlyDotted => write!(f, "badly dotted name: '{input}'"),
            FormatErrorKind::ReservedKeyword { keyword } => {
                write!(f, "'{input}': reserved keyword '{keyword}' can't be used as a name")
            }
            FormatErrorKind::InvalidBranchPart => {
                write!(f, "'{input}': trunk, tags/... or branches/... expected")
            }
            FormatErrorKind::InvalidSwitch { keyword } => write!(
                f,
                "'{input}': expected a boolean, 0/1 or '{keyword}' for the {keyword} switch"
            ),
            FormatErrorKind::ExpectedText => {
                write!(f, "expected a string value, found boolean {input}")
            }
            FormatErrorKind::PegNotNumber => {
                write!(f, "peg revision must be a number >= 1 ('{input}')")
            }
            FormatErrorKind::PegNotPositive => {
                write!(f, "peg revision needs to be >= 1 ({input})")
            }
            FormatErrorKind::UnknownEditKey => write!(f, "unsupported edit key '{input}'"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Two edits in one change request resolve to non-empty values for the same field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictError {
    /// The competing edit keys, sorted alphabetically by name
    pub keys: [EditKey; 2],
    /// The field both edits target
    pub field: Field,
}

impl ConflictError {
    pub(crate) fn new(a: EditKey, b: EditKey, field: Field) -> Self {
        let mut keys = [a, b];
        keys.sort_by_key(|k| k.as_str());
        Self { keys, field }
    }
}

impl fmt::Display for ConflictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "conflicting changes '{}' and '{}' for field {} ({})",
            self.keys[0],
            self.keys[1],
            self.field.index(),
            self.field
        )
    }
}

impl std::error::Error for ConflictError {}

/// Errors that can occur when changing a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeError {
    /// A URL or an edit value failed validation
    Format(FormatError),
    /// Two edits compete for the same field
    Conflict(ConflictError),
}

impl fmt::Display for ChangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format(e) => write!(f, "invalid value: {e}"),
            Self::Conflict(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ChangeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Format(e) => Some(e),
            Self::Conflict(e) => Some(e),
        }
    }
}

impl From<FormatError> for ChangeError {
    fn from(e: FormatError) -> Self {
        Self::Format(e)
    }
}

impl From<ConflictError> for ChangeError {
    fn from(e: ConflictError) -> Self {
        Self::Conflict(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_keys_are_sorted() {
        let err = ConflictError::new(EditKey::Trunk, EditKey::Branch, Field::Branch);
        assert_eq!(err.keys, [EditKey::Branch, EditKey::Trunk]);
        assert_eq!(
            err.to_string(),
            "conflicting changes 'branch' and 'trunk' for field 3 (branch)"
        );
    }

    #[test]
    fn change_error_wraps_source() {
        use std::error::Error;

        let err: ChangeError = FormatError::new("x@y", FormatErrorKind::ForbiddenChars {
            chars: "@".to_string(),
        })
        .into();
        assert!(err.source().is_some());
        assert!(err.to_string().contains("forbidden characters (@)"));
    }

    #[test]
    fn peg_messages_name_the_value() {
        let err = FormatError::new("PREV", FormatErrorKind::PegNotNumber);
        assert_eq!(err.to_string(), "peg revision must be a number >= 1 ('PREV')");
    }
}
