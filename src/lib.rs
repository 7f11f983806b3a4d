//! Typenamer - rename C# source files after the type they declare
//!
//! Typenamer is a CLI tool and library that inspects C# source files,
//! determines the single type each file declares, and renames the file to
//! match that type's name. Files declaring zero or several types, and files
//! already named after their type, are left untouched.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `extract`: Type extraction from C# source text (tree-sitter based)
//! - `rename`: Rename resolution and application
//! - `scanner`: Candidate-file discovery (directory expansion, ignore rules)

pub mod cli;
pub mod config;
pub mod extract;
pub mod rename;
pub mod scanner;
