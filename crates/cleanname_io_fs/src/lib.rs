//! `cleanname_io_fs` v1:
//! Filesystem name-hygiene engine.
//!
//! - `sanitize` : single path-segment cleaning rule
//! - `rename`   : traversal and in-place rename orchestration
//! - `spec`     : enums/options/errors
//! - `report`   : run-time report model
//! - `util`     : shared helper functions

pub mod rename;
pub mod report;
pub mod sanitize;
pub mod spec;
mod util;

pub use rename::{rename_tree, rename_tree_with};
pub use report::{ReportRename, ReportRenameBuilder};
pub use sanitize::{clean_name, is_clean_name};
pub use spec::{
    EnumEntryKind, EnumRenamePatternMode, RenameTreeError, SpecRenameFailure, SpecRenameOptions,
    SpecRenameRecord,
};
