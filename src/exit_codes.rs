/// Exit codes for the blogmark CLI.
///
/// Conversions themselves never fail, so the only failure class is a tool
/// error: unreadable input, bad config, or an unwritable output path.
/// Success - conversion produced and written
pub const SUCCESS: i32 = 0;

/// Tool error - configuration error, file access error, or internal error
pub const TOOL_ERROR: i32 = 2;

/// Helper functions for consistent exit behavior
pub mod exit {
    use super::{SUCCESS, TOOL_ERROR};

    /// Exit with success code (0)
    pub fn success() -> ! {
        std::process::exit(SUCCESS);
    }

    /// Exit with tool error code (2)
    pub fn tool_error() -> ! {
        std::process::exit(TOOL_ERROR);
    }
}
