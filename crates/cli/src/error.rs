//! CLI exit codes for scripting and automation.
//!
//! Invariants:
//! - 0 is success; every failure, whatever its cause, exits with 1.

/// Exit codes for configurator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - file not found, invalid syntax, key not found, fetch failure.
    GeneralError = 1,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}
