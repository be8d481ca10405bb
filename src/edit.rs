//! Edit requests for [`change`](crate::change).
//!
//! An edit pairs an [`EditKey`] with a loosely typed [`EditValue`]. Each key
//! targets exactly one [`Field`] and has its own checker; several keys
//! (`branch_part`, `branch`, `tag`, `trunk`, `branches`, `tags`) all target
//! the branch field.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::check::{self, Keyword};
use crate::error::{FormatError, FormatErrorKind};
use crate::field::{Field, FieldValue};
use crate::split::SplitOptions;

/// Name of an edit, mapped to a target field and a checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EditKey {
    /// Replace the repository root
    Repo,
    /// Replace the prefix
    Prefix,
    /// Replace the project name
    Project,
    /// Replace the path below the branch part
    Suffix,
    /// Set or clear the peg revision
    Peg,
    /// Replace the whole branch part
    BranchPart,
    /// Switch to `branches/<name>`
    Branch,
    /// Switch to `tags/<name>`
    Tag,
    /// Switch to `trunk`
    Trunk,
    /// Switch to the bare `branches` collection
    Branches,
    /// Switch to the bare `tags` collection
    Tags,
}

impl EditKey {
    /// All edit keys.
    pub const ALL: [Self; 11] = [
        Self::Repo,
        Self::Prefix,
        Self::Project,
        Self::Suffix,
        Self::Peg,
        Self::BranchPart,
        Self::Branch,
        Self::Tag,
        Self::Trunk,
        Self::Branches,
        Self::Tags,
    ];

    /// Returns the key name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Repo => "repo",
            Self::Prefix => "prefix",
            Self::Project => "project",
            Self::Suffix => "suffix",
            Self::Peg => "peg",
            Self::BranchPart => "branch_part",
            Self::Branch => "branch",
            Self::Tag => "tag",
            Self::Trunk => "trunk",
            Self::Branches => "branches",
            Self::Tags => "tags",
        }
    }

    /// Returns the field this key writes into.
    #[must_use]
    pub const fn field(self) -> Field {
        match self {
            Self::Repo => Field::Repo,
            Self::Prefix => Field::Prefix,
            Self::Project => Field::Project,
            Self::Suffix => Field::Suffix,
            Self::Peg => Field::Peg,
            Self::BranchPart
            | Self::Branch
            | Self::Tag
            | Self::Trunk
            | Self::Branches
            | Self::Tags => Field::Branch,
        }
    }

    /// Runs the checker for this key and binds the result to its field.
    ///
    /// # Errors
    ///
    /// Returns `FormatError` if the value is rejected by the checker.
    ///
    /// # Examples
    ///
    /// ```
    /// use svn_urls::{EditKey, EditValue, FieldValue};
    ///
    /// let value = EditKey::Branch.check(&EditValue::from("feature1")).unwrap();
    /// assert_eq!(value, FieldValue::Branch("branches/feature1".to_string()));
    ///
    /// let value = EditKey::Trunk.check(&EditValue::from(true)).unwrap();
    /// assert_eq!(value, FieldValue::Branch("trunk".to_string()));
    /// ```
    pub fn check(self, value: &EditValue) -> Result<FieldValue, FormatError> {
        Ok(match self {
            Self::Repo => FieldValue::Repo(check::repo_value(&value.as_text()?)?),
            Self::Prefix => FieldValue::Prefix(check::prefix_value(&value.as_text()?)?),
            Self::Project => FieldValue::Project(check::dotted_name(&value.as_text()?)?),
            Self::Suffix => FieldValue::Suffix(check::url_subpath(&value.as_text()?)?),
            Self::Peg => FieldValue::Peg(check::peg_value(value)?),
            Self::BranchPart => FieldValue::Branch(check::branch_part(&value.as_text()?)?),
            Self::Branch => FieldValue::Branch(check::branch_value(&value.as_text()?)?),
            Self::Tag => FieldValue::Branch(check::tag_value(&value.as_text()?)?),
            Self::Trunk => FieldValue::Branch(check::switch_value(Keyword::Trunk, value)?),
            Self::Branches => FieldValue::Branch(check::switch_value(Keyword::Branches, value)?),
            Self::Tags => FieldValue::Branch(check::switch_value(Keyword::Tags, value)?),
        })
    }
}

impl fmt::Display for EditKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EditKey {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| FormatError::new(s, FormatErrorKind::UnknownEditKey))
    }
}

/// A loosely typed edit value.
///
/// Switch-style keys accept booleans and `0`/`1`, the peg accepts numbers,
/// and all other keys expect text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditValue {
    /// No value; clears the field
    #[default]
    None,
    /// A boolean flag
    Bool(bool),
    /// An integer
    Int(i64),
    /// A string
    Text(String),
}

impl EditValue {
    /// Returns the value as text for text-valued checkers.
    ///
    /// `None` becomes the empty string and integers their decimal form.
    ///
    /// # Errors
    ///
    /// Returns `FormatError` with `ExpectedText` for booleans.
    pub fn as_text(&self) -> Result<Cow<'_, str>, FormatError> {
        match self {
            Self::None => Ok(Cow::Borrowed("")),
            Self::Bool(b) => Err(FormatError::new(b.to_string(), FormatErrorKind::ExpectedText)),
            Self::Int(i) => Ok(Cow::Owned(i.to_string())),
            Self::Text(s) => Ok(Cow::Borrowed(s)),
        }
    }
}

impl fmt::Display for EditValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for EditValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for EditValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for EditValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for EditValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for EditValue {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<u32> for EditValue {
    fn from(i: u32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl<T: Into<EditValue>> From<Option<T>> for EditValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::None, Into::into)
    }
}

/// An ordered set of edits with unique keys.
///
/// Setting a key again replaces its value but keeps its original position,
/// so the processing order is the order in which keys were first set.
///
/// # Examples
///
/// ```
/// use svn_urls::{change, Edits};
///
/// let url = "svn+ssh://svn.mycompany/repo1/my.project/trunk/setup.py";
/// let changed = change(url, &Edits::new().branch("feature1").peg(42)).unwrap();
/// assert_eq!(
///     changed,
///     "svn+ssh://svn.mycompany/repo1/my.project/branches/feature1/setup.py@42"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Edits {
    entries: Vec<(EditKey, EditValue)>,
    split_options: SplitOptions,
}

impl Edits {
    /// Creates an empty set of edits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for a key.
    #[must_use]
    pub fn set(mut self, key: EditKey, value: impl Into<EditValue>) -> Self {
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
        self
    }

    /// Sets the value for a key given by name.
    ///
    /// # Errors
    ///
    /// Returns `FormatError` with `UnknownEditKey` if the name is not an edit key.
    pub fn set_named(self, name: &str, value: impl Into<EditValue>) -> Result<Self, FormatError> {
        let key = name.parse()?;
        Ok(self.set(key, value))
    }

    /// Replaces the repository root.
    #[must_use]
    pub fn repo(self, value: impl Into<EditValue>) -> Self {
        self.set(EditKey::Repo, value)
    }

    /// Replaces the prefix.
    #[must_use]
    pub fn prefix(self, value: impl Into<EditValue>) -> Self {
        self.set(EditKey::Prefix, value)
    }

    /// Replaces the project name.
    #[must_use]
    pub fn project(self, value: impl Into<EditValue>) -> Self {
        self.set(EditKey::Project, value)
    }

    /// Replaces the suffix.
    #[must_use]
    pub fn suffix(self, value: impl Into<EditValue>) -> Self {
        self.set(EditKey::Suffix, value)
    }

    /// Sets or clears the peg revision.
    #[must_use]
    pub fn peg(self, value: impl Into<EditValue>) -> Self {
        self.set(EditKey::Peg, value)
    }

    /// Replaces the whole branch part.
    #[must_use]
    pub fn branch_part(self, value: impl Into<EditValue>) -> Self {
        self.set(EditKey::BranchPart, value)
    }

    /// Switches to a branch.
    #[must_use]
    pub fn branch(self, value: impl Into<EditValue>) -> Self {
        self.set(EditKey::Branch, value)
    }

    /// Switches to a tag.
    #[must_use]
    pub fn tag(self, value: impl Into<EditValue>) -> Self {
        self.set(EditKey::Tag, value)
    }

    /// Switches to trunk.
    #[must_use]
    pub fn trunk(self, value: impl Into<EditValue>) -> Self {
        self.set(EditKey::Trunk, value)
    }

    /// Switches to the bare `branches` collection.
    #[must_use]
    pub fn branches(self, value: impl Into<EditValue>) -> Self {
        self.set(EditKey::Branches, value)
    }

    /// Switches to the bare `tags` collection.
    #[must_use]
    pub fn tags(self, value: impl Into<EditValue>) -> Self {
        self.set(EditKey::Tags, value)
    }

    /// Sets the options used to split the URL before editing.
    #[must_use]
    pub fn split_options(mut self, options: SplitOptions) -> Self {
        self.split_options = options;
        self
    }

    /// Returns the options used to split the URL before editing.
    #[must_use]
    pub const fn options(&self) -> &SplitOptions {
        &self.split_options
    }

    /// Iterates over the edits in processing order.
    pub fn iter(&self) -> impl Iterator<Item = (EditKey, &EditValue)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    /// Returns the number of edits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no edits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Edits
where
    K: Into<EditKey>,
    V: Into<EditValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |edits, (k, v)| edits.set(k.into(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names_roundtrip() {
        for key in EditKey::ALL {
            assert_eq!(key.as_str().parse::<EditKey>().unwrap(), key);
        }
    }

    #[test]
    fn unknown_key_fails() {
        let result = "bogus".parse::<EditKey>();
        assert!(matches!(
            result,
            Err(FormatError {
                kind: FormatErrorKind::UnknownEditKey,
                ..
            })
        ));
    }

    #[test]
    fn branch_aliases_target_branch_field() {
        for key in [
            EditKey::BranchPart,
            EditKey::Branch,
            EditKey::Tag,
            EditKey::Trunk,
            EditKey::Branches,
            EditKey::Tags,
        ] {
            assert_eq!(key.field(), Field::Branch);
        }
        assert_eq!(EditKey::Suffix.field(), Field::Suffix);
    }

    #[test]
    fn set_again_keeps_position() {
        let edits = Edits::new().branch("a").peg(3).branch("b");
        let keys: Vec<EditKey> = edits.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![EditKey::Branch, EditKey::Peg]);
        assert_eq!(edits.iter().next().unwrap().1, &EditValue::from("b"));
    }

    #[test]
    fn set_named_parses_key() {
        let edits = Edits::new().set_named("branch_part", "tags").unwrap();
        assert_eq!(edits.len(), 1);
        assert!(Edits::new().set_named("split_kwargs", "x").is_err());
    }

    #[test]
    fn bool_is_not_text() {
        let result = EditValue::Bool(true).as_text();
        assert!(matches!(
            result,
            Err(FormatError {
                kind: FormatErrorKind::ExpectedText,
                ..
            })
        ));
        assert_eq!(EditValue::None.as_text().unwrap(), "");
        assert_eq!(EditValue::Int(2).as_text().unwrap(), "2");
    }

    #[test]
    fn option_conversion() {
        assert_eq!(EditValue::from(None::<&str>), EditValue::None);
        assert_eq!(EditValue::from(Some(5)), EditValue::Int(5));
    }

    #[test]
    fn collect_from_pairs() {
        let edits: Edits = [(EditKey::Trunk, true), (EditKey::Tags, false)]
            .into_iter()
            .collect();
        assert_eq!(edits.len(), 2);
    }
}
