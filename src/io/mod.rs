//! Output-side plumbing shared by the binary and the library.
//!
//! Currently this is only the exit-code taxonomy; the process always
//! terminates through one of these codes.

pub mod exit_code;

pub use exit_code::ExitCode;
