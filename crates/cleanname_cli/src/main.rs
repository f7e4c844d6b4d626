mod cli;

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use cleanname_io_fs::rename_tree_with;
use tracing::{info, warn};

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cleanname_log::init_logging(&cli.log_options()).context("Failed to initialize logging")?;

    let stdout = io::stdout();
    let report = rename_tree_with(&cli.root, cli.rename_options(), |failure| {
        // A closed stdout must not stop the walk; the failure stays in the report.
        if let Err(e) = writeln!(stdout.lock(), "{failure}") {
            warn!(error = %e, "failed to write rename failure notice");
        }
    })
    .with_context(|| format!("Cannot clean names under {}", cli.root.display()))?;

    info!("{report}");

    let mut out = stdout.lock();
    for line in report.render_lines() {
        writeln!(out, "{line}").context("Failed to write report")?;
    }
    Ok(())
}
