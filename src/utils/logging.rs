//! Conditional logging macros gated on a module-level `ENABLE_LOGS` flag.
//!
//! The segmentation passes can be chatty on long videos, so each module
//! that logs declares its own switch:
//!
//! ```ignore
//! const ENABLE_LOGS: bool = true;
//!
//! use crate::{log_debug, log_info};
//!
//! log_info!("encoded {} segments", count);
//! ```

/// Conditional per-merge debug logging.
/// Compiles to nothing observable when the calling module sets
/// `ENABLE_LOGS` to false.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::debug!($($arg)*);
        }
    };
}

/// Conditional info logging, gated the same way as `log_debug!`.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::info!($($arg)*);
        }
    };
}
