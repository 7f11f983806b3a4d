use super::commands::CommandResult;
use super::exit_status::ExitStatus;

pub fn exit_status_from_result(result: &CommandResult) -> ExitStatus {
    if result.failure_count > 0 {
        ExitStatus::Failure
    } else if result.exit_on_pending && result.pending_count > 0 {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    }
}
