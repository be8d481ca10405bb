//! Field positions and normalized field values.

use std::fmt;

use crate::peg::Peg;

/// One of the six positional fields of a split URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Field {
    /// Repository root (`scheme://host` or `^`)
    Repo,
    /// Path between repository root and project
    Prefix,
    /// Project name
    Project,
    /// Branch part (`trunk`, `branches/<name>`, `tags/<name>`)
    Branch,
    /// Path below the branch part
    Suffix,
    /// Peg revision
    Peg,
}

impl Field {
    /// All fields in positional order.
    pub const ALL: [Self; 6] = [
        Self::Repo,
        Self::Prefix,
        Self::Project,
        Self::Branch,
        Self::Suffix,
        Self::Peg,
    ];

    /// Returns the position of this field in the split tuple.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Repo => "repo",
            Self::Prefix => "prefix",
            Self::Project => "project",
            Self::Branch => "branch",
            Self::Suffix => "suffix",
            Self::Peg => "peg",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A checked value bound to the field it is written into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Normalized repository root
    Repo(String),
    /// Normalized prefix
    Prefix(String),
    /// Normalized project name
    Project(String),
    /// Normalized branch part
    Branch(String),
    /// Normalized suffix
    Suffix(String),
    /// Peg revision, or none
    Peg(Option<Peg>),
}

impl FieldValue {
    /// Returns the field this value targets.
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::Repo(_) => Field::Repo,
            Self::Prefix(_) => Field::Prefix,
            Self::Project(_) => Field::Project,
            Self::Branch(_) => Field::Branch,
            Self::Suffix(_) => Field::Suffix,
            Self::Peg(_) => Field::Peg,
        }
    }

    /// Returns true if the value is non-empty (text) or present (peg).
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Repo(s) | Self::Prefix(s) | Self::Project(s) | Self::Branch(s) | Self::Suffix(s) => {
                !s.is_empty()
            }
            Self::Peg(p) => p.is_some(),
        }
    }
}
