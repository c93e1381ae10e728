//! Exit code constants for the CLI application.

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// Rejected build, failed check, or unusable input.
pub const ERROR: i32 = 2;
