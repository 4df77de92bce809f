use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed and wrote its output
/// - `Error` (2): Command aborted (missing file, wrong file type, unreadable workbook, ...)
///
/// Argument errors such as an unknown `--lang` are reported by clap, which also exits with 2.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command failed before or while writing its output.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
