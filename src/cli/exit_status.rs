use std::process::ExitCode;

/// Process exit status of an `acrolint` run.
///
/// - `Success` (0): no errors; warnings and notes alone do not fail a run
/// - `Failure` (1): acronym errors were found, or `init` found an existing config
/// - `Error` (2): the run could not complete (bad config, missing include, unwritable report)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
