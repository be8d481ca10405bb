//! Split, change and unsplit Subversion URLs.
//!
//! This crate parses URLs of repositories that follow the conventional
//! Subversion layout, where each project has a `trunk`, a `branches`
//! collection and a `tags` collection:
//!
//! ```text
//! ^/
//!  |- my.project
//!  |  |- trunk
//!  |  |- branches
//!  |  |  |- feature1
//!  |  |  `- v1_0
//!  |  `- tags
//!  |     `- v1.0
//! ```
//!
//! # Overview
//!
//! A URL is split into six fields:
//!
//! ```text
//! <repo><prefix><project>/<branch>/<suffix>@<peg>
//! svn+ssh://svn.mycompany /repo1/ my.project / trunk / setup.py @ 123
//! ```
//!
//! The branch part is found by scanning the path for `trunk`, then
//! `branches`, then `tags`; the project precedes it, the prefix precedes the
//! project, and the suffix follows it. Everything is a pure string
//! transformation; no Subversion server is ever contacted.
//!
//! # Quick Start
//!
//! ```rust
//! use svn_urls::{change, split, Edits};
//!
//! let url = split("^/my.project/trunk/setup.py@123").unwrap();
//! assert_eq!(url.project(), "my.project");
//! assert_eq!(url.branch(), "trunk");
//! assert_eq!(url.peg().map(|p| p.get()), Some(123));
//!
//! // Switch to a branch, keeping everything else
//! let url1 = "svn+ssh://svn.mycompany/repo1/my.project/trunk/setup.py";
//! let changed = change(url1, &Edits::new().branch("feature1")).unwrap();
//! assert_eq!(
//!     changed,
//!     "svn+ssh://svn.mycompany/repo1/my.project/branches/feature1/setup.py"
//! );
//! ```
//!
//! # Conflicting edits
//!
//! Several edit keys target the branch field (`branch_part`, `branch`,
//! `tag`, `trunk`, `branches`, `tags`). Only one of them may carry a
//! non-empty value in a single change:
//!
//! ```rust
//! use svn_urls::{change, ChangeError, Edits};
//!
//! let url1 = "^/my.project/trunk/setup.py";
//! let result = change(url1, &Edits::new().branch("feature1").trunk(true));
//! assert!(matches!(result, Err(ChangeError::Conflict(_))));
//!
//! // Empty values don't compete
//! let changed = change(url1, &Edits::new().branch("v2").trunk(0).tags(false)).unwrap();
//! assert_eq!(changed, "^/my.project/branches/v2/setup.py");
//! ```
//!
//! # Field grammar
//!
//! | Field | Form |
//! |-------|------|
//! | repo | `^` or `scheme://host` |
//! | prefix | `/` or `/seg/.../` |
//! | project | dotted name, not `trunk`/`branches`/`tags` |
//! | branch | `trunk`, `branches[/<name>]`, `tags[/<name>]` |
//! | suffix | relative path |
//! | peg | integer >= 1 |
//!
//! The characters `< > | @ ? *` are rejected in all free-text values.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod check;
mod constants;
mod edit;
mod error;
mod field;
#[cfg(kani)]
mod kani_proofs;
mod merge;
mod peg;
pub mod prelude;
mod split;
mod split_url;
mod unsplit;

pub use check::Keyword;
pub use constants::{BRANCHES, FORBIDDEN_CHARS, PEG_SEPARATOR, REPO_ROOT, TAGS, TRUNK};
pub use edit::{EditKey, EditValue, Edits};
pub use error::{ChangeError, ConflictError, FormatError, FormatErrorKind};
pub use field::{Field, FieldValue};
pub use merge::change;
pub use peg::Peg;
pub use split::{SplitOptions, split, split_with};
pub use split_url::{BranchKind, SplitUrl};
pub use unsplit::unsplit;
