//! Utility modules for pysig.

pub mod fs;
pub mod logging;
