//! Joining split fields back into a URL.

use crate::constants::{PEG_SEPARATOR, REPO_ROOT};
use crate::split_url::SplitUrl;

/// Joins the fields of a split URL into its canonical string form.
///
/// An empty repo becomes `^` and an empty prefix `/`; project and branch are
/// each followed by a slash, and a peg is appended after `@`. The fields are
/// not re-validated.
///
/// # Examples
///
/// ```
/// use svn_urls::{split, unsplit};
///
/// let url = "svn+ssh://svn.mycompany/repo1/my.project/trunk/setup.py";
/// assert_eq!(unsplit(&split(url).unwrap()), url);
/// ```
#[must_use]
pub fn unsplit(url: &SplitUrl) -> String {
    let mut result = String::new();

    result.push_str(if url.repo().is_empty() { REPO_ROOT } else { url.repo() });
    result.push_str(if url.prefix().is_empty() { "/" } else { url.prefix() });

    for part in [url.project(), url.branch()] {
        if !part.is_empty() {
            result.push_str(part);
            result.push('/');
        }
    }

    result.push_str(url.suffix());

    if let Some(peg) = url.peg() {
        result.push(PEG_SEPARATOR);
        result.push_str(&peg.to_string());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::peg::Peg;

    #[test]
    fn empty_fields_use_defaults() {
        assert_eq!(unsplit(&SplitUrl::default()), "^/");
    }

    #[test]
    fn joins_all_fields() {
        let url = SplitUrl::new(
            "svn://host",
            "/repo1/",
            "my.project",
            "tags/v1.0",
            "docs/index.txt",
            Some(Peg::new(17).unwrap()),
        );
        assert_eq!(unsplit(&url), "svn://host/repo1/my.project/tags/v1.0/docs/index.txt@17");
    }

    #[test]
    fn empty_branch_is_skipped() {
        let url = SplitUrl::new("^", "/", "my.project", "", "", None);
        assert_eq!(unsplit(&url), "^/my.project/");
    }

    #[test]
    fn empty_suffix_leaves_trailing_slash() {
        let url = SplitUrl::new("^", "/", "my.project", "trunk", "", None);
        assert_eq!(unsplit(&url), "^/my.project/trunk/");
    }
}
