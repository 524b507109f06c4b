//! Process exit codes.
//!
//! Scripted callers rely on these staying stable:
//!
//! | Code | Meaning                                  |
//! |------|------------------------------------------|
//! | 0    | Success                                  |
//! | 1    | The sign or derive attempt failed        |
//! | 2    | Setup failure (logging, configuration)   |

/// Exit code for successful execution.
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for a failed sign or derive attempt.
pub const EXIT_COMMAND_FAILED: i32 = 1;

/// Exit code for setup failures before the command runs.
pub const EXIT_SETUP_ERROR: i32 = 2;
