use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};
use regex::Regex;

use crate::spec::{
    EnumEntryKind, EnumRenamePatternMode, RenameTreeError, SpecRenameFailure, SpecRenameRecord,
};

////////////////////////////////////////////////////////////////////////////////
// #region PatternMatching

#[derive(Debug, Clone)]
pub(crate) enum TypeRenamePatternSeq {
    Literal(Vec<String>),
    Glob(Vec<GlobMatcher>),
    Regex(Vec<Regex>),
}

impl TypeRenamePatternSeq {
    fn is_match(&self, value: &str) -> bool {
        match self {
            Self::Literal(v) => v.iter().any(|p| value.contains(p.as_str())),
            Self::Glob(v) => v.iter().any(|p| p.is_match(value)),
            Self::Regex(v) => v.iter().any(|p| p.is_match(value)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct SpecRenamePatterns {
    pub(crate) patterns_exclude_files: Option<TypeRenamePatternSeq>,
    pub(crate) patterns_exclude_dirs: Option<TypeRenamePatternSeq>,
}

impl SpecRenamePatterns {
    pub(crate) fn from_raw(
        patterns_exclude_files: Option<&[String]>,
        patterns_exclude_dirs: Option<&[String]>,
        rule_pattern: EnumRenamePatternMode,
    ) -> Result<Self, RenameTreeError> {
        Ok(Self {
            patterns_exclude_files: _compile(patterns_exclude_files, rule_pattern)?,
            patterns_exclude_dirs: _compile(patterns_exclude_dirs, rule_pattern)?,
        })
    }

    pub(crate) fn should_exclude(&self, name: &str, kind: EnumEntryKind) -> bool {
        let patterns = match kind {
            EnumEntryKind::Directory => self.patterns_exclude_dirs.as_ref(),
            EnumEntryKind::File => self.patterns_exclude_files.as_ref(),
        };
        patterns.is_some_and(|p| p.is_match(name))
    }
}

fn _compile(
    patterns: Option<&[String]>,
    rule_pattern: EnumRenamePatternMode,
) -> Result<Option<TypeRenamePatternSeq>, RenameTreeError> {
    let Some(patterns) = patterns.filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    let seq_patterns = match rule_pattern {
        EnumRenamePatternMode::Literal => TypeRenamePatternSeq::Literal(patterns.to_vec()),
        EnumRenamePatternMode::Glob => TypeRenamePatternSeq::Glob(_compile_each(patterns, |p| {
            Glob::new(p).map(|g| g.compile_matcher())
        })?),
        EnumRenamePatternMode::Regex => {
            TypeRenamePatternSeq::Regex(_compile_each(patterns, Regex::new)?)
        }
    };
    Ok(Some(seq_patterns))
}

/// Compile every pattern, naming the first one that is rejected.
fn _compile_each<T, E>(
    patterns: &[String],
    compile: impl Fn(&str) -> Result<T, E>,
) -> Result<Vec<T>, RenameTreeError>
where
    E: std::fmt::Display,
{
    patterns
        .iter()
        .map(|pattern| {
            compile(pattern.as_str()).map_err(|e| {
                RenameTreeError::InvalidPattern(format!("Invalid exclude pattern `{pattern}`: {e}"))
            })
        })
        .collect()
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region RenameUtilities

pub(crate) fn is_depth_within_limit(depth_value: usize, depth_limit: Option<usize>) -> bool {
    depth_limit.is_none_or(|limit| depth_value <= limit)
}

/// Inspect the destination without following links.
///
/// `Ok(true)` means an entry other than `name_src` already lives at `name_dst`.
fn is_destination_taken(
    path_dir_parent: &Path,
    name_src: &str,
    name_dst: &str,
) -> Result<bool, io::Error> {
    let path_dst = path_dir_parent.join(name_dst);
    let meta_dst = match fs::symlink_metadata(&path_dst) {
        Ok(v) => v,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };

    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;

        // Same inode: either a normalization-insensitive lookup of the source
        // itself, or a hard link stored under the exact destination name.
        let meta_src = fs::symlink_metadata(path_dir_parent.join(name_src))?;
        if (meta_src.dev(), meta_src.ino()) == (meta_dst.dev(), meta_dst.ino()) {
            return has_entry_named(path_dir_parent, name_dst);
        }
    }
    #[cfg(not(unix))]
    {
        let _ = (name_src, meta_dst);
    }
    Ok(true)
}

#[cfg(unix)]
fn has_entry_named(path_dir_parent: &Path, name: &str) -> Result<bool, io::Error> {
    for entry_res in fs::read_dir(path_dir_parent)? {
        if entry_res?.file_name() == name {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Rename `name_src` to `name_dst` inside `path_dir_parent` exactly once,
/// never overwriting an existing entry.
pub(crate) fn attempt_rename(
    kind: EnumEntryKind,
    path_dir_parent: &Path,
    name_src: &str,
    name_dst: &str,
) -> Result<SpecRenameRecord, SpecRenameFailure> {
    let path_src = path_dir_parent.join(name_src);
    let path_dst = path_dir_parent.join(name_dst);
    let fail = |path_src: PathBuf, path_dst: PathBuf, exception: String| SpecRenameFailure {
        kind,
        path_src,
        path_dst,
        exception,
    };

    // An empty leaf joins to the parent itself; leave the verdict to the rename call.
    if !name_dst.is_empty() {
        match is_destination_taken(path_dir_parent, name_src, name_dst) {
            Ok(false) => {}
            Ok(true) => {
                return Err(fail(path_src, path_dst, "Destination exists".to_string()));
            }
            Err(e) => {
                let exception = format!("Failed to inspect destination ({e})");
                return Err(fail(path_src, path_dst, exception));
            }
        }
    }

    match fs::rename(&path_src, &path_dst) {
        Ok(()) => Ok(SpecRenameRecord {
            kind,
            path_src,
            path_dst,
        }),
        Err(e) => Err(fail(path_src, path_dst, e.to_string())),
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
