use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use uuid::Uuid;

use super::filesystem::FileSystem;
use super::outcome::{FileReport, RenameOutcome, SkipReason};
use crate::extract::{Extractor, TypeDeclaration};

/// Whether a batch performs the moves or only previews them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameMode {
    DryRun,
    Apply,
}

/// A candidate file's name, split the way the naming rules need it: the
/// base name is everything before the first dot, the extension everything
/// from the last dot, and the middle segments whatever sits between the two
/// (`Form1.Designer.cs` -> base `Form1`, middle `Designer`, extension `.cs`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTarget {
    path: PathBuf,
    base_name: String,
    middle: Option<String>,
    extension: String,
}

impl FileTarget {
    pub fn new(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let parts: Vec<&str> = file_name.split('.').collect();

        let base_name = parts.first().copied().unwrap_or_default().to_string();
        // Middle segments are concatenated without separators; the rename
        // rules only ever re-emit them as a single unit.
        let middle = if parts.len() > 2 {
            Some(parts[1..parts.len() - 1].concat())
        } else {
            None
        };
        let extension = if parts.len() >= 2 {
            format!(".{}", parts[parts.len() - 1])
        } else {
            String::new()
        };

        Self {
            path: path.to_path_buf(),
            base_name,
            middle,
            extension,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// File name the single declaration asks for. Partial classes keep the
    /// middle segments (a `Form1.Designer.cs` split stays a `.Designer`
    /// file); everything else drops them.
    fn candidate_name(&self, declaration: &TypeDeclaration) -> String {
        if declaration.is_partial {
            match &self.middle {
                Some(middle) => format!("{}.{}{}", declaration.name, middle, self.extension),
                None => format!("{}{}", declaration.name, self.extension),
            }
        } else {
            format!("{}{}", declaration.name, self.extension)
        }
    }

    /// Sibling path carrying `file_name` in the same directory.
    fn sibling(&self, file_name: &str) -> PathBuf {
        match self.path.parent() {
            Some(parent) => parent.join(file_name),
            None => PathBuf::from(file_name),
        }
    }
}

/// Decision computed from a file's declarations, before touching the disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Skip(SkipReason),
    Rename {
        /// The file name the file should carry.
        to_name: String,
        /// The declared type name, kept for the collision fallback.
        type_name: String,
    },
}

/// Decide what should happen to `target` given its declarations.
///
/// The rename only fires when exactly one type is declared: with none there
/// is nothing to name the file after, with several there is no way to pick.
/// The already-named check compares against the base name only, so
/// `Foo.Designer.cs` declaring `Foo` counts as correctly named.
pub fn resolve(target: &FileTarget, declarations: &[TypeDeclaration]) -> Resolution {
    let [declaration] = declarations else {
        return if declarations.is_empty() {
            Resolution::Skip(SkipReason::NoType)
        } else {
            Resolution::Skip(SkipReason::MultipleTypes)
        };
    };

    if declaration.name == target.base_name {
        return Resolution::Skip(SkipReason::AlreadyNamed);
    }

    Resolution::Rename {
        to_name: target.candidate_name(declaration),
        type_name: declaration.name.clone(),
    }
}

/// Applies rename decisions through an injected filesystem boundary.
pub struct Renamer<F: FileSystem> {
    fs: F,
}

impl<F: FileSystem> Renamer<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Process a batch of candidate paths, one at a time, in the supplied
    /// order. Files are independent: a skip or failure never blocks the
    /// rest of the batch.
    pub fn rename_all(
        &self,
        extractor: &mut Extractor,
        paths: &[PathBuf],
        mode: RenameMode,
    ) -> Vec<FileReport> {
        paths
            .iter()
            .map(|path| FileReport {
                path: path.clone(),
                outcome: self.rename_file(extractor, path, mode),
            })
            .collect()
    }

    /// Process one candidate path end to end: read, parse, resolve, apply.
    pub fn rename_file(
        &self,
        extractor: &mut Extractor,
        path: &Path,
        mode: RenameMode,
    ) -> Result<RenameOutcome> {
        let source = match self.fs.read_to_string(path) {
            Ok(source) => source,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(RenameOutcome::Skipped(SkipReason::MissingFile));
            }
            // Binary or otherwise unreadable content parses to nothing.
            Err(_) => return Ok(RenameOutcome::Skipped(SkipReason::NoType)),
        };

        let declarations = extractor.extract_types(&source);
        self.apply(&FileTarget::new(path), &declarations, mode)
    }

    /// Apply the rename decision for a file whose declarations are already
    /// known. Never modifies file content; the original file survives any
    /// failed attempt intact.
    pub fn apply(
        &self,
        target: &FileTarget,
        declarations: &[TypeDeclaration],
        mode: RenameMode,
    ) -> Result<RenameOutcome> {
        if !self.fs.exists(&target.path) {
            return Ok(RenameOutcome::Skipped(SkipReason::MissingFile));
        }

        let (to_name, type_name) = match resolve(target, declarations) {
            Resolution::Skip(reason) => return Ok(RenameOutcome::Skipped(reason)),
            Resolution::Rename { to_name, type_name } => (to_name, type_name),
        };

        let destination = target.sibling(&to_name);
        if mode == RenameMode::DryRun {
            return Ok(RenameOutcome::Pending {
                from: target.path.clone(),
                to: destination,
            });
        }

        // Only an occupied destination triggers the fallback; other I/O
        // failures surface as this file's error. The exists probe also keeps
        // the platform rename from replacing the occupant.
        let destination = if self.fs.exists(&destination) {
            let fallback = target.sibling(&collision_name(&type_name, &target.extension));
            if self.fs.exists(&fallback) {
                anyhow::bail!(
                    "collision fallback target {} already exists",
                    fallback.display()
                );
            }
            fallback
        } else {
            destination
        };

        self.fs
            .rename(&target.path, &destination)
            .with_context(|| {
                format!(
                    "cannot move {} to {}",
                    target.path.display(),
                    destination.display()
                )
            })?;

        Ok(RenameOutcome::Renamed {
            from: target.path.clone(),
            to: destination,
        })
    }
}

/// Randomized file name used when the computed destination is occupied:
/// `TypeName.1a2b3.cs`. Two files may legitimately both want to become
/// `TypeName.cs`; the random token keeps the batch moving instead of
/// failing the second one.
fn collision_name(type_name: &str, extension: &str) -> String {
    let token = Uuid::new_v4().simple().to_string();
    format!("{}.{}{}", type_name, &token[..5], extension)
}
