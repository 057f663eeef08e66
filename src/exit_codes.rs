//! Process exit codes.
//!
//! - 0: normal completion, including help and listings
//! - 1: option parse failure, missing git directory, or an unexpected error
//! - 128: a fatal fault raised on purpose by the dispatcher or a subcommand

/// Normal completion.
pub const SUCCESS: i32 = 0;

/// Usage or environment failure, and anything that is not a known fault.
pub const FAILURE: i32 = 1;

/// A known fault was reported as `fatal: ...`.
pub const FATAL: i32 = 128;
