//! Splitting a URL into its six fields.

use crate::check::{self, Keyword};
use crate::constants::{PEG_SEPARATOR, REPO_ROOT};
use crate::edit::EditValue;
use crate::error::{FormatError, FormatErrorKind};
use crate::split_url::SplitUrl;

/// Options controlling how the repository root is found.
///
/// # Examples
///
/// ```
/// use svn_urls::{split_with, SplitOptions};
///
/// let options = SplitOptions::new().baseurl("svn+ssh://svn.mycompany/repo1/");
/// let split = split_with("svn+ssh://svn.mycompany/repo1/my.project/trunk", &options).unwrap();
/// assert_eq!(split.repo(), "svn+ssh://svn.mycompany/repo1");
/// assert_eq!(split.prefix(), "/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SplitOptions {
    baseurl: Option<String>,
    assume_relative: bool,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            baseurl: None,
            assume_relative: true,
        }
    }
}

impl SplitOptions {
    /// Creates the default options: no base URL, leading `/` is repository-relative.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the repository root to strip from full URLs.
    ///
    /// Trailing slashes are ignored; an empty base URL means none.
    #[must_use]
    pub fn baseurl(mut self, baseurl: impl Into<String>) -> Self {
        self.baseurl = Some(baseurl.into());
        self
    }

    /// Sets whether a leading `/` means "relative to the current repository".
    #[must_use]
    pub const fn assume_relative(mut self, assume_relative: bool) -> Self {
        self.assume_relative = assume_relative;
        self
    }

    /// Returns the configured base URL, if any.
    #[must_use]
    pub fn baseurl_str(&self) -> Option<&str> {
        self.baseurl.as_deref().filter(|b| !b.is_empty())
    }

    /// Returns true if a leading `/` is treated as repository-relative.
    #[must_use]
    pub const fn is_assume_relative(&self) -> bool {
        self.assume_relative
    }
}

/// Splits a URL using the default options.
///
/// # Errors
///
/// See [`split_with`].
///
/// # Examples
///
/// ```
/// use svn_urls::split;
///
/// let split = split("svn+ssh://svn.mycompany/my.project/trunk/setup.py").unwrap();
/// assert_eq!(split.repo(), "svn+ssh://svn.mycompany");
/// assert_eq!(split.prefix(), "/");
/// assert_eq!(split.project(), "my.project");
/// assert_eq!(split.branch(), "trunk");
/// assert_eq!(split.suffix(), "setup.py");
/// assert_eq!(split.peg(), None);
/// ```
pub fn split(url: &str) -> Result<SplitUrl, FormatError> {
    split_with(url, &SplitOptions::default())
}

/// Splits a URL into `repo, prefix, project, branch, suffix, peg`.
///
/// The repository root is `^` for `^/...` URLs (and for `/...` URLs unless
/// `assume_relative` is off), the configured base URL if one is given, or
/// else the `scheme://host` part of a full URL. Full URLs are sliced as
/// written: case, ports, escapes and dot segments are kept. The branch part is the first
/// `trunk`, else the first `branches/<name>`, else the first `tags/<name>`
/// segment of the path.
///
/// # Errors
///
/// Returns `FormatError` if:
/// - The URL doesn't start with the configured base URL
/// - A full URL has no scheme, or carries a query string or fragment
/// - The text after the first `@` is not a valid peg revision
pub fn split_with(url: &str, options: &SplitOptions) -> Result<SplitUrl, FormatError> {
    let (repo, path) = resolve_repo(url, options)?;

    let (path, peg) = match path.split_once(PEG_SEPARATOR) {
        Some((path, peg)) => (path, check::peg_value(&EditValue::from(peg))?),
        None => (path.as_str(), None),
    };

    let segments: Vec<&str> = path.split('/').collect();
    let (prefix, project, branch, suffix) = match locate_branch(&segments) {
        Some((start, end)) => {
            let before = start.saturating_sub(1);
            let project = if start > 0 { segments[before] } else { "" };
            (
                segments[..before].join("/"),
                project.to_string(),
                segments[start..end].join("/"),
                segments[end..].join("/").trim_start_matches('/').to_string(),
            )
        }
        None => {
            // "^/repo1/my.project/" names the project, not an empty one below it
            let mut segments = &segments[..];
            if segments.len() > 2 && segments.last() == Some(&"") {
                segments = &segments[..segments.len() - 1];
            }
            let (prefix, last) = segments.split_at(segments.len().saturating_sub(1));
            (prefix.join("/"), last.concat(), String::new(), String::new())
        }
    };

    let prefix = if project.is_empty() && branch.is_empty() && suffix.is_empty() {
        prefix
    } else {
        let stripped = prefix.trim_matches('/');
        if stripped.is_empty() {
            "/".to_string()
        } else {
            format!("/{stripped}/")
        }
    };

    Ok(SplitUrl::new(repo, prefix, project, branch, suffix, peg))
}

fn resolve_repo(url: &str, options: &SplitOptions) -> Result<(String, String), FormatError> {
    if let Some(rest) = url.strip_prefix(REPO_ROOT).filter(|r| r.starts_with('/')) {
        return Ok((REPO_ROOT.to_string(), rest.to_string()));
    }
    if url.starts_with('/') && options.assume_relative {
        return Ok((REPO_ROOT.to_string(), url.to_string()));
    }
    if let Some(baseurl) = options.baseurl_str() {
        let baseurl = baseurl.trim_end_matches('/');
        let mismatch = || {
            FormatError::new(url, FormatErrorKind::BaseUrlMismatch {
                baseurl: baseurl.to_string(),
            })
        };
        let rest = url.strip_prefix(baseurl).ok_or_else(mismatch)?;
        if !rest.is_empty() && !rest.starts_with('/') {
            return Err(mismatch());
        }
        return Ok((baseurl.to_string(), rest.to_string()));
    }

    let (root, rest) = check::split_root(url)?;
    let (path, query, fragment) = check::split_query(rest);
    let query = query.filter(|q| !q.is_empty());
    if query.is_some() || fragment.is_some() {
        return Err(FormatError::new(url, FormatErrorKind::QueryOrFragment {
            query: query.map(str::to_string),
            fragment: fragment.map(str::to_string),
        }));
    }
    Ok((root.to_string(), path.to_string()))
}

/// Finds the segment span of the branch part, scanning keywords by priority.
///
/// A `branches` or `tags` keyword not followed by a non-empty name spans a
/// single segment, so `tags/` splits into the bare `tags` collection. Empty
/// segments after the span are dropped from the suffix.
fn locate_branch(segments: &[&str]) -> Option<(usize, usize)> {
    Keyword::ALL.into_iter().find_map(|kw| {
        let start = segments.iter().position(|s| *s == kw.as_str())?;
        let named = segments.get(start + 1).is_some_and(|s| !s.is_empty());
        let span = if named { kw.span() } else { 1 };
        Some((start, start + span))
    })
}
