//! Field checkers.
//!
//! One validating and normalizing function per field, plus the convenience
//! checkers behind the `branch`, `tag` and switch-style edit keys. Each is
//! total over its input: valid values come back normalized, everything else
//! yields a [`FormatError`]. All checkers are idempotent.

use std::fmt;
use std::path::MAIN_SEPARATOR;

use url::Url;

use crate::constants::{BRANCHES, FORBIDDEN_CHARS, REPO_ROOT, TAGS, TRUNK};
use crate::edit::EditValue;
use crate::error::{FormatError, FormatErrorKind};
use crate::peg::Peg;

/// A reserved path keyword of the trunk/branches/tags layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `trunk`
    Trunk,
    /// `branches`
    Branches,
    /// `tags`
    Tags,
}

impl Keyword {
    /// All keywords in branch-part scan priority.
    pub const ALL: [Self; 3] = [Self::Trunk, Self::Branches, Self::Tags];

    /// Returns the keyword as it appears in a path.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trunk => TRUNK,
            Self::Branches => BRANCHES,
            Self::Tags => TAGS,
        }
    }

    /// Returns the number of path segments the branch part spans.
    #[must_use]
    pub const fn span(self) -> usize {
        match self {
            Self::Trunk => 1,
            Self::Branches | Self::Tags => 2,
        }
    }

    /// Looks up a keyword by its path form.
    #[must_use]
    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kw| kw.as_str() == segment)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn reject_forbidden(s: &str) -> Result<(), FormatError> {
    let mut found: Vec<char> = s.chars().filter(|c| FORBIDDEN_CHARS.contains(c)).collect();
    if found.is_empty() {
        return Ok(());
    }
    found.sort_unstable();
    found.dedup();
    Err(FormatError::new(s, FormatErrorKind::ForbiddenChars {
        chars: found.into_iter().collect(),
    }))
}

/// Splits a URL into its raw `scheme://authority` root and the rest.
///
/// The input text is sliced, never re-encoded. `Url` only validates the
/// scheme; a scheme-less `//authority` root is accepted as-is.
pub(crate) fn split_root(url: &str) -> Result<(&str, &str), FormatError> {
    let missing = || FormatError::new(url, FormatErrorKind::MissingSchemeAndHost);
    let after_scheme = if url.starts_with("//") {
        0
    } else {
        Url::parse(url).map_err(|_| missing())?;
        url.find(':').ok_or_else(missing)? + 1
    };
    let authority_len = url[after_scheme..]
        .strip_prefix("//")
        .map_or(0, |rest| 2 + rest.find(['/', '?', '#']).unwrap_or(rest.len()));
    let (root, rest) = url.split_at(after_scheme + authority_len);
    if root == "//" {
        return Err(missing());
    }
    Ok((root, rest))
}

/// Separates the path from a trailing `?query` and `#fragment`.
pub(crate) fn split_query(rest: &str) -> (&str, Option<&str>, Option<&str>) {
    let (path, extra) = rest.split_at(rest.find(['?', '#']).unwrap_or(rest.len()));
    let (before, fragment) = match extra.split_once('#') {
        Some((before, fragment)) => (before, Some(fragment)),
        None => (extra, None),
    };
    (path, before.strip_prefix('?'), fragment)
}

/// Checks a repository root.
///
/// The sentinel `^` is returned unchanged; anything else must be an absolute
/// URL or a `//authority` root and is reduced to that root, exactly as
/// written.
///
/// # Errors
///
/// Returns `FormatError` with `MissingSchemeAndHost` if `s` has neither a
/// scheme nor a host.
///
/// # Examples
///
/// ```
/// use svn_urls::check::repo_value;
///
/// assert_eq!(repo_value("^").unwrap(), "^");
/// assert_eq!(repo_value("svn://svn.example.org/repo?x#y").unwrap(), "svn://svn.example.org");
/// assert_eq!(repo_value("//svn.example.org/repo").unwrap(), "//svn.example.org");
/// assert!(repo_value("my.project/trunk").is_err());
/// ```
pub fn repo_value(s: &str) -> Result<String, FormatError> {
    if s == REPO_ROOT {
        return Ok(s.to_string());
    }
    let (root, _) = split_root(s)?;
    Ok(root.to_string())
}

/// Checks a prefix: the result starts and ends with exactly one slash.
///
/// # Errors
///
/// Returns `FormatError` if `s` contains forbidden characters.
///
/// # Examples
///
/// ```
/// use svn_urls::check::prefix_value;
///
/// assert_eq!(prefix_value("repo1").unwrap(), "/repo1/");
/// assert_eq!(prefix_value("//a/b//").unwrap(), "/a/b/");
/// assert_eq!(prefix_value("").unwrap(), "/");
/// ```
pub fn prefix_value(s: &str) -> Result<String, FormatError> {
    reject_forbidden(s)?;
    let stripped = s.trim_matches('/');
    if stripped.is_empty() {
        Ok("/".to_string())
    } else {
        Ok(format!("/{stripped}/"))
    }
}

/// Checks a dotted name, as used for projects, branches and tags.
///
/// Trailing slashes, which shell tab completion tends to add, are stripped.
/// The empty string is accepted and means "no name".
///
/// # Errors
///
/// Returns `FormatError` if:
/// - `s` contains forbidden characters
/// - The name contains a slash
/// - A dot-delimited component is empty (`.a`, `a.`, `a..b`)
/// - The name is one of `trunk`, `branches`, `tags`
///
/// # Examples
///
/// ```
/// use svn_urls::check::dotted_name;
///
/// assert_eq!(dotted_name("my.project/").unwrap(), "my.project");
/// assert!(dotted_name("my..project").is_err());
/// assert!(dotted_name("trunk").is_err());
/// ```
pub fn dotted_name(s: &str) -> Result<String, FormatError> {
    reject_forbidden(s)?;
    if s.is_empty() {
        return Ok(String::new());
    }
    let stripped = s.trim_end_matches('/');
    if stripped.contains('/') {
        return Err(FormatError::new(stripped, FormatErrorKind::SlashInName));
    }
    if stripped.split('.').any(str::is_empty) {
        return Err(FormatError::new(stripped, FormatErrorKind::BadlyDotted));
    }
    if let Some(kw) = Keyword::from_segment(stripped) {
        return Err(FormatError::new(stripped, FormatErrorKind::ReservedKeyword {
            keyword: kw.as_str(),
        }));
    }
    Ok(stripped.to_string())
}

/// Checks a complete branch part.
///
/// Accepts `""`, `trunk`, bare `branches` or `tags`, and
/// `branches/<name>` or `tags/<name>` with a valid dotted name.
///
/// # Errors
///
/// Returns `FormatError` if the first segment is not a keyword, or the name
/// is not a valid dotted name.
///
/// # Examples
///
/// ```
/// use svn_urls::check::branch_part;
///
/// assert_eq!(branch_part("tags/v1.0/").unwrap(), "tags/v1.0");
/// assert_eq!(branch_part("branches").unwrap(), "branches");
/// assert!(branch_part("feature1").is_err());
/// ```
pub fn branch_part(s: &str) -> Result<String, FormatError> {
    if s.is_empty() {
        return Ok(String::new());
    }
    let (head, tail) = s.split_once('/').unwrap_or((s, ""));
    match Keyword::from_segment(head) {
        Some(Keyword::Trunk) if tail.is_empty() => Ok(TRUNK.to_string()),
        Some(kw @ (Keyword::Branches | Keyword::Tags)) => {
            if tail.is_empty() {
                Ok(kw.as_str().to_string())
            } else {
                Ok(format!("{kw}/{}", dotted_name(tail)?))
            }
        }
        _ => Err(FormatError::new(s, FormatErrorKind::InvalidBranchPart)),
    }
}

fn named_branch(kw: Keyword, s: &str) -> Result<String, FormatError> {
    let name = s
        .strip_prefix(kw.as_str())
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(s);
    let name = dotted_name(name)?;
    if name.is_empty() {
        return Ok(name);
    }
    Ok(format!("{kw}/{name}"))
}

/// Checks a branch name; the result is `branches/<name>`.
///
/// # Errors
///
/// Returns `FormatError` if the name is not a valid dotted name.
///
/// # Examples
///
/// ```
/// use svn_urls::check::branch_value;
///
/// assert_eq!(branch_value("feature1").unwrap(), "branches/feature1");
/// assert_eq!(branch_value("branches/feature1").unwrap(), "branches/feature1");
/// assert_eq!(branch_value("").unwrap(), "");
/// ```
pub fn branch_value(s: &str) -> Result<String, FormatError> {
    named_branch(Keyword::Branches, s)
}

/// Checks a tag name; the result is `tags/<name>`.
///
/// # Errors
///
/// Returns `FormatError` if the name is not a valid dotted name.
///
/// # Examples
///
/// ```
/// use svn_urls::check::tag_value;
///
/// assert_eq!(tag_value("v1.0").unwrap(), "tags/v1.0");
/// assert_eq!(tag_value("tags/v1.0/").unwrap(), "tags/v1.0");
/// ```
pub fn tag_value(s: &str) -> Result<String, FormatError> {
    named_branch(Keyword::Tags, s)
}

/// Checks a boolean-style switch selecting `trunk`, `branches` or `tags`.
///
/// Falsy values (`None`, `false`, `0`, `""`) give `""`; `true`, `1`, the
/// keyword itself, or the keyword with one trailing separator give the keyword.
///
/// # Errors
///
/// Returns `FormatError` with `InvalidSwitch` for any other value.
///
/// # Examples
///
/// ```
/// use svn_urls::check::{switch_value, Keyword};
/// use svn_urls::EditValue;
///
/// assert_eq!(switch_value(Keyword::Trunk, &EditValue::from(true)).unwrap(), "trunk");
/// assert_eq!(switch_value(Keyword::Tags, &EditValue::from("tags/")).unwrap(), "tags");
/// assert_eq!(switch_value(Keyword::Trunk, &EditValue::from(0)).unwrap(), "");
/// assert!(switch_value(Keyword::Trunk, &EditValue::from("branches")).is_err());
/// ```
pub fn switch_value(kw: Keyword, value: &EditValue) -> Result<String, FormatError> {
    let on = match value {
        EditValue::None | EditValue::Bool(false) | EditValue::Int(0) => return Ok(String::new()),
        EditValue::Text(s) if s.is_empty() => return Ok(String::new()),
        EditValue::Bool(true) | EditValue::Int(1) => true,
        EditValue::Text(s) => {
            let bare = s
                .strip_suffix('/')
                .or_else(|| s.strip_suffix(MAIN_SEPARATOR))
                .unwrap_or(s);
            bare == kw.as_str()
        }
        EditValue::Int(_) => false,
    };
    if on {
        Ok(kw.as_str().to_string())
    } else {
        Err(FormatError::new(value.to_string(), FormatErrorKind::InvalidSwitch {
            keyword: kw.as_str(),
        }))
    }
}

/// Lexically normalizes a `/`-separated path, like `os.path.normpath`.
fn normalize_path(path: &str) -> String {
    let absolute = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                _ if absolute => {}
                _ => parts.push(".."),
            },
            _ => parts.push(part),
        }
    }
    let joined = parts.join("/");
    if absolute {
        format!("/{joined}")
    } else {
        joined
    }
}

/// Checks a subpath below the branch part.
///
/// The path is normalized (`.` and `..` resolved, repeated separators
/// collapsed, platform separators converted to `/`) and leading slashes are
/// removed, so the result never starts with `/`. The current directory
/// collapses to `""`.
///
/// # Errors
///
/// Returns `FormatError` if `s` contains forbidden characters.
///
/// # Examples
///
/// ```
/// use svn_urls::check::url_subpath;
///
/// assert_eq!(url_subpath("/src//pkg/./mod.py").unwrap(), "src/pkg/mod.py");
/// assert_eq!(url_subpath("docs/../setup.py").unwrap(), "setup.py");
/// assert_eq!(url_subpath(".").unwrap(), "");
/// ```
pub fn url_subpath(s: &str) -> Result<String, FormatError> {
    reject_forbidden(s)?;
    let normalized = if MAIN_SEPARATOR == '/' {
        normalize_path(s)
    } else {
        normalize_path(&s.replace(MAIN_SEPARATOR, "/"))
    };
    Ok(normalized.trim_start_matches('/').to_string())
}

/// Checks a peg revision.
///
/// `None` and the empty string mean "no peg"; strings are parsed as decimal
/// integers.
///
/// # Errors
///
/// Returns `FormatError` if the value is not a number (booleans included)
/// or is not positive.
///
/// # Examples
///
/// ```
/// use svn_urls::check::peg_value;
/// use svn_urls::EditValue;
///
/// assert_eq!(peg_value(&EditValue::from("42")).unwrap().map(|p| p.get()), Some(42));
/// assert_eq!(peg_value(&EditValue::from("")).unwrap(), None);
/// assert_eq!(peg_value(&EditValue::None).unwrap(), None);
/// assert!(peg_value(&EditValue::from(0)).is_err());
/// assert!(peg_value(&EditValue::from("PREV")).is_err());
/// ```
pub fn peg_value(value: &EditValue) -> Result<Option<Peg>, FormatError> {
    match value {
        EditValue::None => Ok(None),
        EditValue::Text(s) if s.is_empty() => Ok(None),
        EditValue::Text(s) => Peg::parse(s).map(Some),
        EditValue::Int(i) => Peg::from_signed(*i).map(Some),
        EditValue::Bool(b) => Err(FormatError::new(b.to_string(), FormatErrorKind::PegNotNumber)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(result: Result<String, FormatError>) -> FormatErrorKind {
        result.unwrap_err().kind
    }

    #[test]
    fn repo_keeps_sentinel() {
        assert_eq!(repo_value("^").unwrap(), "^");
    }

    #[test]
    fn repo_drops_path_query_and_fragment() {
        assert_eq!(
            repo_value("svn+ssh://user@svn.mycompany/repo1/x?q=1#frag").unwrap(),
            "svn+ssh://user@svn.mycompany"
        );
    }

    #[test]
    fn repo_without_scheme_fails() {
        assert_eq!(kind(repo_value("svn.mycompany/repo")), FormatErrorKind::MissingSchemeAndHost);
        assert_eq!(kind(repo_value("")), FormatErrorKind::MissingSchemeAndHost);
        assert_eq!(kind(repo_value("///x")), FormatErrorKind::MissingSchemeAndHost);
    }

    #[test]
    fn repo_host_without_scheme() {
        assert_eq!(repo_value("//host/x").unwrap(), "//host");
        assert_eq!(repo_value("//host").unwrap(), "//host");
    }

    #[test]
    fn repo_keeps_text_as_written() {
        assert_eq!(
            repo_value("HTTP://Svn.Example.org:80/p/trunk").unwrap(),
            "HTTP://Svn.Example.org:80"
        );
        assert_eq!(repo_value("file:///srv/repo").unwrap(), "file://");
    }

    #[test]
    fn query_and_fragment_are_separated() {
        assert_eq!(split_query("/p/trunk"), ("/p/trunk", None, None));
        assert_eq!(split_query("/p?"), ("/p", Some(""), None));
        assert_eq!(split_query("/p?a=1#top"), ("/p", Some("a=1"), Some("top")));
        assert_eq!(split_query("/p#a?b"), ("/p", None, Some("a?b")));
    }

    #[test]
    fn prefix_is_wrapped_in_slashes() {
        assert_eq!(prefix_value("/").unwrap(), "/");
        assert_eq!(prefix_value("a/b").unwrap(), "/a/b/");
        assert_eq!(prefix_value("/a/b/").unwrap(), "/a/b/");
    }

    #[test]
    fn prefix_forbidden_chars_fail() {
        assert_eq!(
            kind(prefix_value("a|b*c|")),
            FormatErrorKind::ForbiddenChars {
                chars: "*|".to_string()
            }
        );
    }

    #[test]
    fn dotted_name_strips_trailing_slashes() {
        assert_eq!(dotted_name("other.project/").unwrap(), "other.project");
        assert_eq!(dotted_name("v1_0//").unwrap(), "v1_0");
    }

    #[test]
    fn dotted_name_empty_is_empty() {
        assert_eq!(dotted_name("").unwrap(), "");
    }

    #[test]
    fn dotted_name_rejects_slash() {
        assert_eq!(kind(dotted_name("a/b")), FormatErrorKind::SlashInName);
    }

    #[test]
    fn dotted_name_rejects_empty_components() {
        for bad in [".a", "a.", "a..b", ".", "/"] {
            assert_eq!(kind(dotted_name(bad)), FormatErrorKind::BadlyDotted, "{bad}");
        }
    }

    #[test]
    fn dotted_name_rejects_keywords() {
        assert_eq!(
            kind(dotted_name("branches/")),
            FormatErrorKind::ReservedKeyword { keyword: "branches" }
        );
        assert!(dotted_name("trunk.old").is_ok());
    }

    #[test]
    fn dotted_name_rejects_peg_marker() {
        assert!(matches!(
            kind(dotted_name("v1@12")),
            FormatErrorKind::ForbiddenChars { .. }
        ));
    }

    #[test]
    fn branch_part_variants() {
        assert_eq!(branch_part("").unwrap(), "");
        assert_eq!(branch_part("trunk").unwrap(), "trunk");
        assert_eq!(branch_part("trunk/").unwrap(), "trunk");
        assert_eq!(branch_part("tags").unwrap(), "tags");
        assert_eq!(branch_part("tags/").unwrap(), "tags");
        assert_eq!(branch_part("branches/feature1").unwrap(), "branches/feature1");
    }

    #[test]
    fn branch_part_rejects_other_heads() {
        assert_eq!(kind(branch_part("feature1")), FormatErrorKind::InvalidBranchPart);
        assert_eq!(kind(branch_part("trunk/x")), FormatErrorKind::InvalidBranchPart);
    }

    #[test]
    fn branch_part_revalidates_name() {
        assert_eq!(kind(branch_part("tags/v1/x")), FormatErrorKind::SlashInName);
        assert_eq!(
            kind(branch_part("branches/trunk")),
            FormatErrorKind::ReservedKeyword { keyword: "trunk" }
        );
    }

    #[test]
    fn branch_and_tag_prefix_names() {
        assert_eq!(branch_value("feature1/").unwrap(), "branches/feature1");
        assert_eq!(tag_value("v1.0").unwrap(), "tags/v1.0");
        assert_eq!(tag_value("").unwrap(), "");
    }

    #[test]
    fn branch_rejects_tag_path() {
        assert_eq!(kind(branch_value("tags/v1.0")), FormatErrorKind::SlashInName);
    }

    #[test]
    fn switch_accepts_truthy_forms() {
        for value in [
            EditValue::Bool(true),
            EditValue::Int(1),
            EditValue::from("branches"),
            EditValue::from("branches/"),
        ] {
            assert_eq!(switch_value(Keyword::Branches, &value).unwrap(), "branches");
        }
    }

    #[test]
    fn switch_accepts_falsy_forms() {
        for value in [
            EditValue::None,
            EditValue::Bool(false),
            EditValue::Int(0),
            EditValue::from(""),
        ] {
            assert_eq!(switch_value(Keyword::Trunk, &value).unwrap(), "");
        }
    }

    #[test]
    fn switch_rejects_other_values() {
        for value in [EditValue::Int(2), EditValue::from("trunk//"), EditValue::from("tags")] {
            assert_eq!(
                kind(switch_value(Keyword::Trunk, &value)),
                FormatErrorKind::InvalidSwitch { keyword: "trunk" }
            );
        }
    }

    #[test]
    fn subpath_normalization() {
        assert_eq!(url_subpath("setup.py").unwrap(), "setup.py");
        assert_eq!(url_subpath("").unwrap(), "");
        assert_eq!(url_subpath("./").unwrap(), "");
        assert_eq!(url_subpath("a/b/../c/").unwrap(), "a/c");
        assert_eq!(url_subpath("../x").unwrap(), "../x");
        assert_eq!(url_subpath("/../x").unwrap(), "x");
        assert_eq!(url_subpath("///src").unwrap(), "src");
    }

    #[test]
    fn subpath_forbidden_chars_fail() {
        assert!(matches!(
            kind(url_subpath("a/b?.py")),
            FormatErrorKind::ForbiddenChars { .. }
        ));
    }

    #[test]
    fn peg_boundaries() {
        assert_eq!(peg_value(&EditValue::from("42")).unwrap(), Some(Peg::new(42).unwrap()));
        assert_eq!(peg_value(&EditValue::Int(7)).unwrap(), Some(Peg::new(7).unwrap()));
        assert_eq!(peg_value(&EditValue::from("")).unwrap(), None);
        assert_eq!(peg_value(&EditValue::None).unwrap(), None);
        assert!(peg_value(&EditValue::Int(0)).is_err());
        assert!(peg_value(&EditValue::Int(-5)).is_err());
        assert!(peg_value(&EditValue::from("PREV")).is_err());
        assert!(peg_value(&EditValue::Bool(true)).is_err());
    }
}
