//! Logging macros gated by solver verbosity.
//!
//! Zero-cost when disabled (verbosity=0). Levels:
//! - 0: SILENT (only errors)
//! - 1: DECISIONS (committed and backtracked selections)
//! - 2: ATTEMPTS (per-option allocation attempts and conflicts)
//! - 3: TRACE (block-level grid internals)

/// Verbosity level constants.
pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_DECISIONS: u8 = 1;
pub const VERBOSITY_ATTEMPTS: u8 = 2;
pub const VERBOSITY_TRACE: u8 = 3;

/// Log at DECISIONS level (verbosity >= 1).
///
/// Used for: committed class selections, exhausted candidates.
#[macro_export]
macro_rules! log_decision {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_DECISIONS {
            eprintln!($($arg)*);
        }
    };
}

/// Log at ATTEMPTS level (verbosity >= 2).
///
/// Used for: option tries, clash rejections, rollbacks.
#[macro_export]
macro_rules! log_attempt {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_ATTEMPTS {
            eprintln!($($arg)*);
        }
    };
}

/// Log at TRACE level (verbosity >= 3).
///
/// Used for: grid occupancy dumps, block arithmetic detail.
#[macro_export]
macro_rules! log_trace {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_TRACE {
            eprintln!($($arg)*);
        }
    };
}
