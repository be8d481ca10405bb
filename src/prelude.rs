//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use svn_urls::prelude::*;
//!
//! let url = split("^/my.project/trunk/setup.py").unwrap();
//! let tagged = url.apply(&Edits::new().tag("v1.0")).unwrap();
//! assert_eq!(unsplit(&tagged), "^/my.project/tags/v1.0/setup.py");
//! ```
//!
//! The individual checkers stay in [`check`](crate::check).

pub use crate::{
    // Core types
    BranchKind, EditKey, EditValue, Edits, Field, FieldValue, Keyword, Peg, SplitOptions,
    SplitUrl,
    // Operations
    change, split, split_with, unsplit,
    // Errors
    ChangeError, ConflictError, FormatError, FormatErrorKind,
};
