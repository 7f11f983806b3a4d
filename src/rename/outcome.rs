use std::fmt;
use std::path::PathBuf;

/// Why a file was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No type declaration was found. Also covers content that could not
    /// be parsed or read as text.
    NoType,
    /// More than one type declaration was found; there is no single type
    /// to name the file after.
    MultipleTypes,
    /// The file's base name already matches the declared type.
    AlreadyNamed,
    /// The file no longer exists at processing time.
    MissingFile,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoType => write!(f, "no type declared"),
            SkipReason::MultipleTypes => write!(f, "multiple types declared"),
            SkipReason::AlreadyNamed => write!(f, "already named after its type"),
            SkipReason::MissingFile => write!(f, "file does not exist"),
        }
    }
}

/// The result of processing one candidate file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The file was moved to `to`.
    Renamed { from: PathBuf, to: PathBuf },
    /// Dry run: the file would be moved to `to`.
    Pending { from: PathBuf, to: PathBuf },
    Skipped(SkipReason),
}

/// Per-file entry of a batch run. A failed file never aborts the batch;
/// its error is carried here for the caller to report.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: anyhow::Result<RenameOutcome>,
}
