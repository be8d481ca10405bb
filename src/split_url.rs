//! The split URL record.

use std::fmt;
use std::str::FromStr;

use crate::constants::{BRANCHES, REPO_ROOT, TAGS, TRUNK};
use crate::error::FormatError;
use crate::field::FieldValue;
use crate::peg::Peg;
use crate::split::split;
use crate::unsplit::unsplit;

/// A Subversion URL split into six fields.
///
/// # Structure
///
/// ```text
/// <repo><prefix><project>/<branch>/<suffix>@<peg>
/// ```
///
/// Empty strings stand for absent text fields.
///
/// # Examples
///
/// ```
/// use svn_urls::SplitUrl;
///
/// let url = SplitUrl::parse("^/my.project/tags/v1.0/setup.py").unwrap();
/// assert_eq!(url.repo(), "^");
/// assert_eq!(url.prefix(), "/");
/// assert_eq!(url.project(), "my.project");
/// assert_eq!(url.branch(), "tags/v1.0");
/// assert_eq!(url.suffix(), "setup.py");
/// assert_eq!(url.to_string(), "^/my.project/tags/v1.0/setup.py");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SplitUrl {
    repo: String,
    prefix: String,
    project: String,
    branch: String,
    suffix: String,
    peg: Option<Peg>,
}

/// What kind of line of development a branch part refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchKind<'a> {
    /// No branch part
    None,
    /// `trunk`
    Trunk,
    /// `branches/<name>`
    Branch(&'a str),
    /// `tags/<name>`
    Tag(&'a str),
    /// Bare `branches`
    AllBranches,
    /// Bare `tags`
    AllTags,
}

impl SplitUrl {
    /// Splits a URL using the default options.
    ///
    /// # Errors
    ///
    /// Returns `FormatError` if the URL can't be split; see [`split_with`](crate::split_with).
    pub fn parse(input: &str) -> Result<Self, FormatError> {
        split(input)
    }

    /// Creates a split URL from its fields.
    ///
    /// The fields are not validated; use the [`check`](crate::check)
    /// functions first if they come from untrusted input.
    #[must_use]
    pub fn new(
        repo: impl Into<String>,
        prefix: impl Into<String>,
        project: impl Into<String>,
        branch: impl Into<String>,
        suffix: impl Into<String>,
        peg: Option<Peg>,
    ) -> Self {
        Self {
            repo: repo.into(),
            prefix: prefix.into(),
            project: project.into(),
            branch: branch.into(),
            suffix: suffix.into(),
            peg,
        }
    }

    /// Returns the repository root (`scheme://host` or `^`).
    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Returns the prefix, bounded by slashes.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the project name.
    #[must_use]
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Returns the branch part.
    #[must_use]
    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Returns the path below the branch part.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Returns the peg revision, if present.
    #[must_use]
    pub const fn peg(&self) -> Option<Peg> {
        self.peg
    }

    /// Returns true if the repository is the current one (`^`).
    #[must_use]
    pub fn is_repo_relative(&self) -> bool {
        self.repo.is_empty() || self.repo == REPO_ROOT
    }

    /// Classifies the branch part.
    ///
    /// # Examples
    ///
    /// ```
    /// use svn_urls::{BranchKind, SplitUrl};
    ///
    /// let url = SplitUrl::parse("^/p/branches/feature1/x").unwrap();
    /// assert_eq!(url.branch_kind(), BranchKind::Branch("feature1"));
    /// ```
    #[must_use]
    pub fn branch_kind(&self) -> BranchKind<'_> {
        let (head, name) = self.branch.split_once('/').unwrap_or((self.branch.as_str(), ""));
        match (head, name) {
            ("", _) => BranchKind::None,
            (TRUNK, _) => BranchKind::Trunk,
            (BRANCHES, "") => BranchKind::AllBranches,
            (BRANCHES, name) => BranchKind::Branch(name),
            (TAGS, "") => BranchKind::AllTags,
            (TAGS, name) => BranchKind::Tag(name),
            _ => BranchKind::None,
        }
    }

    /// Returns a copy with one field replaced.
    #[must_use]
    pub fn with_field(mut self, value: FieldValue) -> Self {
        match value {
            FieldValue::Repo(s) => self.repo = s,
            FieldValue::Prefix(s) => self.prefix = s,
            FieldValue::Project(s) => self.project = s,
            FieldValue::Branch(s) => self.branch = s,
            FieldValue::Suffix(s) => self.suffix = s,
            FieldValue::Peg(p) => self.peg = p,
        }
        self
    }
}

impl fmt::Display for SplitUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&unsplit(self))
    }
}

impl FromStr for SplitUrl {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for SplitUrl {
    type Error = FormatError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SplitUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&unsplit(self))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SplitUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
