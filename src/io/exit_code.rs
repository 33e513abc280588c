//! Process exit codes, one per failure class.
//!
//! The binary reports outcomes through these codes so callers can
//! distinguish failure classes without parsing stderr.

/// Exit codes reported by the `randsum` binary.
///
/// Cast to `i32` for `std::process::exit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Run completed and printed a total.
    Success = 0,
    /// Unexpected condition, including output write failures.
    GeneralError = 1,
    /// Requested sequence length outside the accepted range.
    InvalidArgument = 2,
    /// Operation invoked on an absent or empty sequence.
    MissingData = 3,
    /// Storage for the sequence could not be obtained.
    AllocationError = 4,
}
