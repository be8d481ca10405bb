//! Applying edits to a split URL.

use crate::edit::{EditKey, Edits};
use crate::error::{ChangeError, ConflictError};
use crate::field::{Field, FieldValue};
use crate::split::split_with;
use crate::split_url::SplitUrl;
use crate::unsplit::unsplit;

/// The value chosen so far for one field.
#[derive(Debug)]
struct Pending {
    key: EditKey,
    value: FieldValue,
}

impl SplitUrl {
    /// Applies a set of edits, returning the changed record.
    ///
    /// Edits are checked in order. For each field, at most one edit may
    /// produce a non-empty value; empty values only take effect when no edit
    /// for that field is non-empty, the last one winning.
    ///
    /// # Errors
    ///
    /// Returns `ChangeError::Format` if an edit value is rejected by its
    /// checker, and `ChangeError::Conflict` if two edits produce non-empty
    /// values for the same field.
    ///
    /// # Examples
    ///
    /// ```
    /// use svn_urls::{Edits, SplitUrl};
    ///
    /// let url = SplitUrl::parse("^/my.project/trunk/setup.py").unwrap();
    /// let tagged = url.apply(&Edits::new().tag("v1.0").trunk(false)).unwrap();
    /// assert_eq!(tagged.to_string(), "^/my.project/tags/v1.0/setup.py");
    /// ```
    pub fn apply(self, edits: &Edits) -> Result<Self, ChangeError> {
        let mut pending: [Option<Pending>; Field::ALL.len()] = Default::default();

        for (key, raw) in edits.iter() {
            let value = key.check(raw)?;
            let field = value.field();
            let slot = &mut pending[field.index()];
            if let Some(current) = slot.as_ref().filter(|p| p.value.is_truthy()) {
                if value.is_truthy() {
                    return Err(ConflictError::new(current.key, key, field).into());
                }
                continue;
            }
            *slot = Some(Pending { key, value });
        }

        Ok(pending
            .into_iter()
            .flatten()
            .fold(self, |url, p| url.with_field(p.value)))
    }
}

/// Splits a URL, applies the edits and joins it again.
///
/// The URL is split with the options carried by `edits`
/// (see [`Edits::split_options`]).
///
/// # Errors
///
/// Returns `ChangeError` if the URL can't be split, an edit value is
/// invalid, or two edits conflict.
///
/// # Examples
///
/// ```
/// use svn_urls::{change, Edits};
///
/// let url1 = "svn+ssh://svn.mycompany/repo1/my.project/trunk/setup.py";
/// assert_eq!(
///     change(url1, &Edits::new().project("other.project/")).unwrap(),
///     "svn+ssh://svn.mycompany/repo1/other.project/trunk/setup.py"
/// );
/// assert_eq!(
///     change(url1, &Edits::new().branch_part("branches/feature1")).unwrap(),
///     "svn+ssh://svn.mycompany/repo1/my.project/branches/feature1/setup.py"
/// );
/// ```
pub fn change(url: &str, edits: &Edits) -> Result<String, ChangeError> {
    let split = split_with(url, edits.options())?;
    Ok(unsplit(&split.apply(edits)?))
}
