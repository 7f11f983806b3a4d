//! Candidate-file discovery.
//!
//! The rename engine takes a flat list of file paths; this module produces
//! that list. Directories are expanded recursively, filtered down to C#
//! sources and through the configured ignore rules. Explicitly supplied
//! file paths pass through untouched - the engine itself reports missing
//! or ineligible entries.

use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::config::{Config, GENERATED_FILE_PATTERNS};

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of expanding the candidate set.
pub struct ScanResult {
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

struct Filters {
    literal_ignore_paths: Vec<PathBuf>,
    glob_patterns: Vec<Pattern>,
}

impl Filters {
    fn from_config(base_dir: &Path, config: &Config, verbose: bool) -> Self {
        let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
        let mut glob_patterns: Vec<Pattern> = Vec::new();

        for p in &config.ignores {
            if is_glob_pattern(p) {
                match Pattern::new(p) {
                    Ok(pattern) => glob_patterns.push(pattern),
                    Err(e) => {
                        if verbose {
                            eprintln!(
                                "{} Invalid ignore pattern '{}': {}",
                                "warning:".bold().yellow(),
                                p,
                                e
                            );
                        }
                    }
                }
            } else {
                // Literal path mode: anchor to the base dir for prefix matching
                literal_ignore_paths.push(base_dir.join(p));
            }
        }

        if config.ignore_generated_files {
            for p in GENERATED_FILE_PATTERNS {
                if let Ok(pattern) = Pattern::new(p) {
                    glob_patterns.push(pattern);
                }
            }
        }

        Self {
            literal_ignore_paths,
            glob_patterns,
        }
    }

    fn ignores(&self, path: &Path) -> bool {
        if self
            .literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            return true;
        }

        let path_str = path.to_string_lossy();
        self.glob_patterns.iter().any(|p| p.matches(&path_str))
    }
}

/// Scan the configured source root for candidate files.
pub fn scan_root(base_dir: &Path, config: &Config, verbose: bool) -> ScanResult {
    let filters = Filters::from_config(base_dir, config, verbose);

    let dirs_to_scan: Vec<PathBuf> = if config.includes.is_empty() {
        vec![base_dir.to_path_buf()]
    } else {
        let mut paths = Vec::new();
        for inc in &config.includes {
            if is_glob_pattern(inc) {
                // Glob mode: expand pattern to matching directories
                let full_pattern = base_dir.join(inc);
                let pattern_str = full_pattern.to_string_lossy();
                match glob(&pattern_str) {
                    Ok(entries) => {
                        for entry in entries.flatten() {
                            if entry.is_dir() {
                                paths.push(entry);
                            }
                        }
                    }
                    Err(e) => {
                        if verbose {
                            eprintln!(
                                "{} Invalid include pattern '{}': {}",
                                "warning:".bold().yellow(),
                                inc,
                                e
                            );
                        }
                    }
                }
            } else {
                let path = base_dir.join(inc);
                if path.exists() {
                    paths.push(path);
                } else if verbose {
                    eprintln!(
                        "{} Include path does not exist: {}",
                        "warning:".bold().yellow(),
                        path.display()
                    );
                }
            }
        }
        paths
    };

    let mut files = Vec::new();
    let mut skipped_count = 0;
    for dir in dirs_to_scan {
        walk_dir(&dir, &filters, verbose, &mut files, &mut skipped_count);
    }

    files.sort();
    files.dedup();
    ScanResult {
        files,
        skipped_count,
    }
}

/// Expand explicitly supplied paths into a candidate list.
pub fn expand_paths(paths: &[PathBuf], config: &Config, verbose: bool) -> ScanResult {
    let filters = Filters::from_config(Path::new("."), config, verbose);

    let mut files = Vec::new();
    let mut skipped_count = 0;
    for path in paths {
        if path.is_dir() {
            walk_dir(path, &filters, verbose, &mut files, &mut skipped_count);
        } else {
            files.push(path.clone());
        }
    }

    files.sort();
    files.dedup();
    ScanResult {
        files,
        skipped_count,
    }
}

fn walk_dir(
    dir: &Path,
    filters: &Filters,
    verbose: bool,
    files: &mut Vec<PathBuf>,
    skipped_count: &mut usize,
) {
    for entry in WalkDir::new(dir) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                *skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();

        if filters.ignores(path) {
            continue;
        }

        if path.is_file() && is_renamable_file(path) {
            files.push(path.to_path_buf());
        }
    }
}

fn is_renamable_file(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("cs"))
}
