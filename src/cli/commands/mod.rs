mod command_result;

pub mod rename;

pub use command_result::{CommandResult, CommandSummary, InitSummary, RenameSummary};
