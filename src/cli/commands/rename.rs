use std::path::PathBuf;

use anyhow::Result;

use super::{CommandResult, CommandSummary, RenameSummary};
use crate::cli::args::RenameCommand;
use crate::config::Config;
use crate::extract::Extractor;
use crate::rename::{OsFileSystem, RenameMode, RenameOutcome, Renamer};
use crate::scanner;

pub fn rename(cmd: RenameCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let config = Config::load_or_default()?;

    let scan = if cmd.paths.is_empty() {
        let source_root = args
            .common
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.source_root));
        scanner::scan_root(&source_root, &config, args.common.verbose)
    } else {
        scanner::expand_paths(&cmd.paths, &config, args.common.verbose)
    };

    let mode = if args.apply {
        RenameMode::Apply
    } else {
        RenameMode::DryRun
    };

    let mut extractor = Extractor::new()?;
    let renamer = Renamer::new(OsFileSystem);
    let reports = renamer.rename_all(&mut extractor, &scan.files, mode);

    let mut renamed_count = 0;
    let mut pending_count = 0;
    let mut failure_count = 0;
    for report in &reports {
        match &report.outcome {
            Ok(RenameOutcome::Renamed { .. }) => renamed_count += 1,
            Ok(RenameOutcome::Pending { .. }) => pending_count += 1,
            Ok(RenameOutcome::Skipped(_)) => {}
            Err(_) => failure_count += 1,
        }
    }

    Ok(CommandResult {
        summary: CommandSummary::Rename(RenameSummary {
            is_apply: args.apply,
            files_scanned: scan.files.len(),
            scan_skipped_count: scan.skipped_count,
        }),
        reports,
        renamed_count,
        pending_count,
        failure_count,
        exit_on_pending: !args.apply,
    })
}
