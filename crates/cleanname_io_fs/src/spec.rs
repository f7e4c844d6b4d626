//! Rename specification models and top-level error types.

use std::fmt;
use std::path::PathBuf;

////////////////////////////////////////////////////////////////////////////////
// #region EnumsInit

/// Kind of directory entry a rename applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumEntryKind {
    /// Directory, or a symbolic link pointing at one.
    Directory,
    /// Anything that is not a directory.
    File,
}

impl EnumEntryKind {
    /// Short label used in failure notices.
    pub fn label(self) -> &'static str {
        match self {
            Self::Directory => "dir",
            Self::File => "file",
        }
    }
}

/// Pattern matching mode for exclude lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumRenamePatternMode {
    /// Shell-like wildcards (`*`, `?`, character classes).
    Glob,
    /// Regular expression pattern.
    Regex,
    /// Substring match.
    Literal,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region StructsAndErrors

/// Input options for `rename_tree`.
#[derive(Debug, Clone)]
pub struct SpecRenameOptions {
    /// Exclude patterns applied to file basename.
    pub patterns_exclude_files: Option<Vec<String>>,
    /// Exclude patterns applied to directory basename.
    pub patterns_exclude_dirs: Option<Vec<String>>,
    /// Pattern interpretation mode.
    pub rule_pattern: EnumRenamePatternMode,
    /// Maximum entry depth to process; root children have depth 1.
    pub depth_limit: Option<usize>,
}

impl Default for SpecRenameOptions {
    fn default() -> Self {
        Self {
            patterns_exclude_files: None,
            patterns_exclude_dirs: None,
            rule_pattern: EnumRenamePatternMode::Glob,
            depth_limit: None,
        }
    }
}

/// One completed rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecRenameRecord {
    /// Entry kind at the time of the rename.
    pub kind: EnumEntryKind,
    /// Path before the rename.
    pub path_src: PathBuf,
    /// Path after the rename.
    pub path_dst: PathBuf,
}

impl fmt::Display for SpecRenameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}",
            self.path_src.display(),
            self.path_dst.display()
        )
    }
}

/// One rename that was attempted and did not happen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecRenameFailure {
    /// Entry kind of the source.
    pub kind: EnumEntryKind,
    /// Path that was left in place.
    pub path_src: PathBuf,
    /// Intended destination.
    pub path_dst: PathBuf,
    /// User-facing error text.
    pub exception: String,
}

impl fmt::Display for SpecRenameFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed rename {}: {} -> {} : {}",
            self.kind.label(),
            self.path_src.display(),
            self.path_dst.display(),
            self.exception
        )
    }
}

/// "Top-level call failed" errors (input validation stage).
#[derive(Debug)]
pub enum RenameTreeError {
    /// Invalid depth value.
    InvalidDepthLimit(String),
    /// Invalid exclude pattern.
    InvalidPattern(String),
    /// Root path is not a directory.
    RootNotDirectory(PathBuf),
}

impl fmt::Display for RenameTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDepthLimit(msg) => write!(f, "{msg}"),
            Self::InvalidPattern(msg) => write!(f, "{msg}"),
            Self::RootNotDirectory(path) => {
                write!(f, "Root is not a directory: {}", path.display())
            }
        }
    }
}

impl std::error::Error for RenameTreeError {}

// #endregion
////////////////////////////////////////////////////////////////////////////////
