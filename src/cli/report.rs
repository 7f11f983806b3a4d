//! Report formatting and printing for rename runs.
//!
//! Separate from the engine so typenamer can be used as a library without
//! printing side effects. All printers take a writer for testability.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary, RenameSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::rename::{FileReport, RenameOutcome};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());

    if let CommandSummary::Rename(summary) = &result.summary {
        print_scan_warning(summary.scan_skipped_count, verbose);
    }
}

/// Warn about paths the scanner could not access. Shown at the end of a run;
/// the per-path details are only printed under `--verbose`.
fn print_scan_warning(count: usize, verbose: bool) {
    if count > 0 && !verbose {
        eprintln!(
            "{} {} path(s) could not be accessed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Rename(summary) => print_rename(result, summary, verbose, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn print_rename<W: Write>(
    result: &CommandResult,
    summary: &RenameSummary,
    verbose: bool,
    writer: &mut W,
) {
    for report in &result.reports {
        print_file_report(report, verbose, writer);
    }

    print_rename_summary(result, summary, writer);
}

fn print_file_report<W: Write>(report: &FileReport, verbose: bool, writer: &mut W) {
    match &report.outcome {
        Ok(RenameOutcome::Renamed { from, to }) => {
            let _ = writeln!(
                writer,
                "{} {} -> {}",
                "renamed:".green().bold(),
                from.display(),
                to.display()
            );
        }
        Ok(RenameOutcome::Pending { from, to }) => {
            let _ = writeln!(
                writer,
                "{} {} -> {}",
                "would rename:".yellow().bold(),
                from.display(),
                to.display()
            );
        }
        Ok(RenameOutcome::Skipped(reason)) => {
            if verbose {
                let _ = writeln!(
                    writer,
                    "{} {} ({})",
                    "skipped:".dimmed(),
                    report.path.display(),
                    reason
                );
            }
        }
        Err(err) => {
            let _ = writeln!(
                writer,
                "{} {}: {:#}",
                "error:".bold().red(),
                report.path.display(),
                err
            );
        }
    }
}

fn print_rename_summary<W: Write>(
    result: &CommandResult,
    summary: &RenameSummary,
    writer: &mut W,
) {
    if summary.is_apply {
        if result.renamed_count > 0 {
            let _ = writeln!(
                writer,
                "\n{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Renamed {} of {} file(s)",
                    result.renamed_count, summary.files_scanned
                )
                .green()
            );
        } else if result.failure_count == 0 {
            print_clean(summary.files_scanned, writer);
        }

        if result.failure_count > 0 {
            let _ = writeln!(
                writer,
                "{} {} file(s) could not be renamed",
                FAILURE_MARK.red(),
                result.failure_count
            );
        }
    } else if result.pending_count > 0 {
        let _ = writeln!(
            writer,
            "\n{} {} of {} file(s).",
            "Would rename".yellow().bold(),
            result.pending_count,
            summary.files_scanned
        );
        let _ = writeln!(
            writer,
            "Run with {} to rename these files.",
            "--apply".cyan()
        );
    } else {
        print_clean(summary.files_scanned, writer);
    }
}

fn print_clean<W: Write>(files_scanned: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} source {} - all file names match their types",
            files_scanned,
            if files_scanned == 1 { "file" } else { "files" }
        )
        .green()
    );
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}
