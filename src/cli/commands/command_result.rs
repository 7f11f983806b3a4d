use crate::rename::FileReport;

#[derive(Debug)]
pub enum CommandSummary {
    Rename(RenameSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct RenameSummary {
    pub is_apply: bool,
    pub files_scanned: usize,
    /// Paths the scanner could not access.
    pub scan_skipped_count: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a typenamer command.
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Per-file outcomes. Empty for non-rename commands.
    pub reports: Vec<FileReport>,
    pub renamed_count: usize,
    pub pending_count: usize,
    pub failure_count: usize,
    /// If true, exit code 1 should be returned when pending_count > 0
    /// (dry-run commands reporting work to do).
    pub exit_on_pending: bool,
}
