use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use cleanname_io_fs::{EnumRenamePatternMode, SpecRenameOptions};
use cleanname_log::{EnumLogFormat, SpecLogOptions};

/// Rename files and directories whose names carry byte-order marks, control
/// characters or non-NFC Unicode into a clean form.
#[derive(Debug, Parser)]
#[command(name = "cleanname", version)]
pub struct Cli {
    /// Directory to clean, recursively.
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Skip directories whose name matches; they are not descended into.
    #[arg(long = "exclude-dir", value_name = "PATTERN")]
    pub exclude_dirs: Vec<String>,

    /// Skip files whose name matches.
    #[arg(long = "exclude-file", value_name = "PATTERN")]
    pub exclude_files: Vec<String>,

    /// How exclude patterns are interpreted.
    #[arg(long, value_enum, default_value_t = ArgPatternMode::Glob)]
    pub pattern_mode: ArgPatternMode,

    /// Deepest entry level to process (children of ROOT are level 1).
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Log more to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long)]
    pub log_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ArgPatternMode {
    Glob,
    Regex,
    Literal,
}

impl From<ArgPatternMode> for EnumRenamePatternMode {
    fn from(mode: ArgPatternMode) -> Self {
        match mode {
            ArgPatternMode::Glob => Self::Glob,
            ArgPatternMode::Regex => Self::Regex,
            ArgPatternMode::Literal => Self::Literal,
        }
    }
}

impl Cli {
    pub fn rename_options(&self) -> SpecRenameOptions {
        let non_empty = |l_patterns: &Vec<String>| {
            (!l_patterns.is_empty()).then(|| l_patterns.clone())
        };
        SpecRenameOptions {
            patterns_exclude_files: non_empty(&self.exclude_files),
            patterns_exclude_dirs: non_empty(&self.exclude_dirs),
            rule_pattern: self.pattern_mode.into(),
            depth_limit: self.max_depth,
        }
    }

    pub fn log_options(&self) -> SpecLogOptions {
        SpecLogOptions {
            n_verbosity: self.verbose,
            rule_format: if self.log_json {
                EnumLogFormat::Json
            } else {
                EnumLogFormat::Text
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;
    use cleanname_io_fs::EnumRenamePatternMode;
    use cleanname_log::EnumLogFormat;

    use super::Cli;

    #[test]
    fn no_arguments_targets_current_directory() {
        let cli = Cli::try_parse_from(["cleanname"]).expect("parse");
        assert_eq!(cli.root, PathBuf::from("."));

        let spec_rn_options = cli.rename_options();
        assert!(spec_rn_options.patterns_exclude_dirs.is_none());
        assert!(spec_rn_options.patterns_exclude_files.is_none());
        assert_eq!(spec_rn_options.depth_limit, None);
        assert_eq!(spec_rn_options.rule_pattern, EnumRenamePatternMode::Glob);
        assert_eq!(cli.log_options().n_verbosity, 0);
        assert_eq!(cli.log_options().rule_format, EnumLogFormat::Text);
    }

    #[test]
    fn options_are_forwarded() {
        let cli = Cli::try_parse_from([
            "cleanname",
            "some/dir",
            "--exclude-dir",
            "^\\.git$",
            "--exclude-dir",
            "^target$",
            "--exclude-file",
            "\\.lock$",
            "--pattern-mode",
            "regex",
            "--max-depth",
            "3",
            "-vv",
            "--log-json",
        ])
        .expect("parse");

        assert_eq!(cli.root, PathBuf::from("some/dir"));
        let spec_rn_options = cli.rename_options();
        assert_eq!(
            spec_rn_options.patterns_exclude_dirs,
            Some(vec!["^\\.git$".to_string(), "^target$".to_string()])
        );
        assert_eq!(
            spec_rn_options.patterns_exclude_files,
            Some(vec!["\\.lock$".to_string()])
        );
        assert_eq!(spec_rn_options.rule_pattern, EnumRenamePatternMode::Regex);
        assert_eq!(spec_rn_options.depth_limit, Some(3));

        let spec_log_options = cli.log_options();
        assert_eq!(spec_log_options.n_verbosity, 2);
        assert_eq!(spec_log_options.rule_format, EnumLogFormat::Json);
    }

    #[test]
    fn unknown_pattern_mode_is_rejected() {
        assert!(Cli::try_parse_from(["cleanname", "--pattern-mode", "fuzzy"]).is_err());
    }
}
