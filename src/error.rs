use thiserror::Error;
use tracing::warn;

const E2BIG: i32 = 7;
const EINVAL: i32 = 22;

/// Reasons a command line is rejected. Every variant is raised before any
/// counter is touched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    #[error("too many arguments given")]
    TooManyArguments,
    #[error("not enough arguments given")]
    NotEnoughArguments,
    #[error("no such device")]
    NoSuchDevice,
    #[error("invalid rx/tx flag")]
    InvalidDirection,
    #[error("invalid field argument")]
    InvalidField,
    #[error("invalid operation argument")]
    InvalidOperation,
}

impl CommandError {
    /// Negative errno handed back to whoever wrote the command.
    pub const fn status(self) -> i32 {
        match self {
            CommandError::TooManyArguments => -E2BIG,
            _ => -EINVAL,
        }
    }
}

/// Log a rejected command and return its caller-visible status.
pub fn report(err: CommandError) -> i32 {
    let status = err.status();
    warn!(%err, status, "command rejected");
    status
}
