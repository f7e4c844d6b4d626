//! Filesystem tree traversal and in-place rename orchestration.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::report::{ReportRename, ReportRenameBuilder};
use crate::sanitize::clean_name;
use crate::spec::{EnumEntryKind, RenameTreeError, SpecRenameFailure, SpecRenameOptions};
use crate::util::{SpecRenamePatterns, attempt_rename, is_depth_within_limit};

#[derive(Debug, Clone)]
struct SpecWalkEntry {
    path_entry: PathBuf,
    /// `None` when the on-disk name is not valid UTF-8.
    name_entry: Option<String>,
    if_is_symlink: bool,
}

struct SpecRenameContext<'a> {
    spec_rn_options: SpecRenameOptions,
    spec_rn_pats: SpecRenamePatterns,
    builder_rn_report: ReportRenameBuilder,
    on_failure: &'a mut dyn FnMut(&SpecRenameFailure),
}

/// Clean every directory and file name below `dir_root`, renaming in place.
///
/// See [`rename_tree_with`]; failures are only collected into the report.
pub fn rename_tree<P>(
    dir_root: P,
    spec_rn_options: SpecRenameOptions,
) -> Result<ReportRename, RenameTreeError>
where
    P: AsRef<Path>,
{
    rename_tree_with(dir_root, spec_rn_options, |_| {})
}

/// Clean every directory and file name below `dir_root`, renaming in place.
///
/// The walk is depth-first and top-down. In each directory the
/// subdirectories are renamed first, then the files, then the walk descends
/// into the subdirectories under their post-rename paths. The root itself is
/// never renamed and symbolic links are never followed.
///
/// `on_failure` is called as soon as a rename attempt fails, before the walk
/// moves on. Per-entry failures never abort the walk.
///
/// Returns [`RenameTreeError`] only for setup and validation failures.
pub fn rename_tree_with<P, F>(
    dir_root: P,
    spec_rn_options: SpecRenameOptions,
    mut on_failure: F,
) -> Result<ReportRename, RenameTreeError>
where
    P: AsRef<Path>,
    F: FnMut(&SpecRenameFailure),
{
    if spec_rn_options.depth_limit == Some(0) {
        return Err(RenameTreeError::InvalidDepthLimit(
            "Arg `depth_limit` must be >= 1 or None.".to_string(),
        ));
    }

    let path_dir_root = dir_root.as_ref().to_path_buf();
    if !path_dir_root.is_dir() {
        return Err(RenameTreeError::RootNotDirectory(path_dir_root));
    }

    let spec_rn_pats = SpecRenamePatterns::from_raw(
        spec_rn_options.patterns_exclude_files.as_deref(),
        spec_rn_options.patterns_exclude_dirs.as_deref(),
        spec_rn_options.rule_pattern,
    )?;

    let mut spec_rn_ctx = SpecRenameContext {
        spec_rn_options,
        spec_rn_pats,
        builder_rn_report: ReportRenameBuilder::default(),
        on_failure: &mut on_failure,
    };

    walk_directory(&path_dir_root, 0, &mut spec_rn_ctx);
    Ok(spec_rn_ctx.builder_rn_report.build())
}

fn walk_directory(path_dir: &Path, n_depth: usize, spec_rn_ctx: &mut SpecRenameContext<'_>) {
    debug!(path = %path_dir.display(), depth = n_depth, "visiting directory");

    let Some((l_dirs, l_files)) = list_directory(path_dir, spec_rn_ctx) else {
        return;
    };

    let n_depth_entry = n_depth + 1;
    let mut l_dirs_next: Vec<PathBuf> = Vec::with_capacity(l_dirs.len());

    for spec_dir_entry in l_dirs {
        let if_is_symlink = spec_dir_entry.if_is_symlink;
        let Some(path_current) = handle_entry(
            spec_dir_entry,
            EnumEntryKind::Directory,
            path_dir,
            spec_rn_ctx,
        ) else {
            continue;
        };
        if !if_is_symlink {
            l_dirs_next.push(path_current);
        }
    }

    for spec_file_entry in l_files {
        handle_entry(spec_file_entry, EnumEntryKind::File, path_dir, spec_rn_ctx);
    }

    if !is_depth_within_limit(n_depth_entry + 1, spec_rn_ctx.spec_rn_options.depth_limit) {
        return;
    }
    for path_dir_next in l_dirs_next {
        walk_directory(&path_dir_next, n_depth_entry, spec_rn_ctx);
    }
}

/// One `read_dir` pass, split into directories and files, each sorted by name.
///
/// Returns `None` (after recording a warning) when the directory cannot be listed.
fn list_directory(
    path_dir: &Path,
    spec_rn_ctx: &mut SpecRenameContext<'_>,
) -> Option<(Vec<SpecWalkEntry>, Vec<SpecWalkEntry>)> {
    let iter_entries = match fs::read_dir(path_dir) {
        Ok(iter) => iter,
        Err(e) => {
            record_warning(
                spec_rn_ctx,
                format!("Failed to read directory {} ({e})", path_dir.display()),
            );
            return None;
        }
    };

    let mut l_dirs: Vec<SpecWalkEntry> = Vec::new();
    let mut l_files: Vec<SpecWalkEntry> = Vec::new();

    for entry_res in iter_entries {
        let entry = match entry_res {
            Ok(v) => v,
            Err(e) => {
                record_warning(
                    spec_rn_ctx,
                    format!(
                        "Failed to read directory entry under {} ({e})",
                        path_dir.display()
                    ),
                );
                continue;
            }
        };

        let path_entry = entry.path();
        let cfg_file_type = match entry.file_type() {
            Ok(v) => v,
            Err(e) => {
                record_warning(
                    spec_rn_ctx,
                    format!("Failed to inspect {} ({e})", path_entry.display()),
                );
                continue;
            }
        };

        let b_is_symlink = cfg_file_type.is_symlink();
        let b_is_dir = cfg_file_type.is_dir() || (b_is_symlink && path_entry.is_dir());
        let spec_entry = SpecWalkEntry {
            name_entry: entry.file_name().into_string().ok(),
            path_entry,
            if_is_symlink: b_is_symlink,
        };
        if b_is_dir {
            l_dirs.push(spec_entry);
        } else {
            l_files.push(spec_entry);
        }
    }

    l_dirs.sort_by(|a, b| a.path_entry.file_name().cmp(&b.path_entry.file_name()));
    l_files.sort_by(|a, b| a.path_entry.file_name().cmp(&b.path_entry.file_name()));
    Some((l_dirs, l_files))
}

/// Clean and, if needed, rename one entry of `path_dir_parent`.
///
/// Returns the entry's path after this step, or `None` when it is excluded.
fn handle_entry(
    spec_entry: SpecWalkEntry,
    kind: EnumEntryKind,
    path_dir_parent: &Path,
    spec_rn_ctx: &mut SpecRenameContext<'_>,
) -> Option<PathBuf> {
    spec_rn_ctx.builder_rn_report.add_scanned();

    let Some(name_entry) = spec_entry.name_entry else {
        record_warning(
            spec_rn_ctx,
            format!(
                "Non-UTF-8 name skipped: {}",
                spec_entry.path_entry.display()
            ),
        );
        return Some(spec_entry.path_entry);
    };

    if spec_rn_ctx.spec_rn_pats.should_exclude(&name_entry, kind) {
        debug!(path = %spec_entry.path_entry.display(), "excluded by pattern");
        spec_rn_ctx.builder_rn_report.add_excluded();
        return None;
    }

    let name_clean = clean_name(&name_entry);
    if name_clean == name_entry {
        return Some(spec_entry.path_entry);
    }

    match attempt_rename(kind, path_dir_parent, &name_entry, &name_clean) {
        Ok(spec_record) => {
            info!(
                kind = kind.label(),
                src = %spec_record.path_src.display(),
                dst = %spec_record.path_dst.display(),
                "renamed"
            );
            let path_next = spec_record.path_dst.clone();
            spec_rn_ctx.builder_rn_report.add_record(spec_record);
            Some(path_next)
        }
        Err(spec_failure) => {
            // Surfaced to the user through `on_failure`; keep the log quieter.
            info!(
                kind = kind.label(),
                src = %spec_failure.path_src.display(),
                dst = %spec_failure.path_dst.display(),
                cause = %spec_failure.exception,
                "rename failed"
            );
            (spec_rn_ctx.on_failure)(&spec_failure);
            spec_rn_ctx.builder_rn_report.add_failure(spec_failure);
            Some(spec_entry.path_entry)
        }
    }
}

fn record_warning(spec_rn_ctx: &mut SpecRenameContext<'_>, warning: String) {
    warn!("{warning}");
    spec_rn_ctx.builder_rn_report.add_warning(warning);
}
