//! Constants for Subversion URL splitting and validation.

/// Sentinel repository value meaning "root of the current repository".
pub const REPO_ROOT: &str = "^";

/// Keyword naming the main line of development.
pub const TRUNK: &str = "trunk";

/// Keyword naming the collection of branches.
pub const BRANCHES: &str = "branches";

/// Keyword naming the collection of tags.
pub const TAGS: &str = "tags";

/// Separator between the path and a peg revision.
pub const PEG_SEPARATOR: char = '@';

/// Characters rejected in every free-text field.
pub const FORBIDDEN_CHARS: [char; 6] = ['<', '>', '|', '@', '?', '*'];
