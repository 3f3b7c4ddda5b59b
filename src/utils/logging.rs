//! Logging utilities for pysig.
//!
//! This module provides logging macros that respect a process-wide verbosity
//! level. If a tool embedding the library provides --verbose or --debug
//! flags, they can control the logging output.

use std::sync::RwLock;

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Derive a level from the usual CLI flag pair
    pub fn from_flags(verbose: bool, debug: bool) -> Self {
        if debug {
            Verbosity::Debug
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }

    pub fn is_debug(self) -> bool {
        self >= Verbosity::Debug
    }

    pub fn is_verbose(self) -> bool {
        self >= Verbosity::Verbose
    }
}

/// Global verbosity level
static VERBOSITY: RwLock<Verbosity> = RwLock::new(Verbosity::Normal);

/// Initialize the logging system with a verbosity level
pub fn init(verbosity: Verbosity) {
    if let Ok(mut level) = VERBOSITY.write() {
        *level = verbosity;
    }
}

/// Get the current verbosity level
pub fn get_verbosity() -> Verbosity {
    VERBOSITY.read().map(|level| *level).unwrap_or(Verbosity::Normal)
}

/// Log a debug message (only shown with --debug)
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if $crate::utils::logging::get_verbosity().is_debug() {
            println!("[DEBUG] {}", format!($($arg)*));
        }
    };
}

/// Log a verbose message (shown with --verbose or --debug)
#[macro_export]
macro_rules! log_verbose {
    ($($arg:tt)*) => {
        if $crate::utils::logging::get_verbosity().is_verbose() {
            println!("[VERBOSE] {}", format!($($arg)*));
        }
    };
}

/// Log a warning message (always shown)
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        eprintln!("Warning: {}", format!($($arg)*));
    }};
}

/// Log an error message (always shown)
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        eprintln!("Error: {}", format!($($arg)*));
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert!(Verbosity::Debug.is_debug());
        assert!(Verbosity::Debug.is_verbose());
        assert!(!Verbosity::Verbose.is_debug());
        assert!(Verbosity::Verbose.is_verbose());
        assert!(!Verbosity::Normal.is_debug());
        assert!(!Verbosity::Normal.is_verbose());
    }

    #[test]
    fn test_verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(true, false), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Debug);
    }
}
