//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map decode failures from `layered_config` to their own exit code.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).

use layered_config::SettingsError;

/// Structured exit codes for layered-config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - invalid arguments or unexpected failure.
    GeneralError = 1,

    /// Decode failure - the value exists but does not decode.
    ///
    /// Scripts should fix the file or environment value, not retry.
    DecodeFailed = 3,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no SettingsError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        if self
            .chain()
            .any(|cause| cause.downcast_ref::<SettingsError>().is_some())
        {
            ExitCode::DecodeFailed
        } else {
            ExitCode::GeneralError
        }
    }
}
