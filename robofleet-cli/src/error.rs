//! CLI-specific error types with exit codes.
//!
//! Not-found-class conditions (unknown robot, no free robot, unknown
//! type) are never errors here; commands print a message for those and
//! exit zero. Only storage, format, and configuration failures terminate
//! the process abnormally.

use std::fmt;
use robofleet::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Could not determine the user's home directory.
    NoHomeDirectory,
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 3: No home directory and no storage file configured
    /// - 5: I/O error (storage unreadable or unwritable)
    /// - 6: Other library error (malformed fleet data lands here)
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(lib_err) => match lib_err {
                LibError::Io(_) => 5,
                LibError::Config(_) => 7,
                _ => 6,
            },
            CliError::NoHomeDirectory => 3,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::NoHomeDirectory => {
                write!(
                    f,
                    "Could not determine home directory (use --file or ROBOFLEET_FILE)"
                )
            }
        }
    }
}

impl From<LibError> for CliError {
    fn from(err: LibError) -> Self {
        CliError::Library(err)
    }
}
