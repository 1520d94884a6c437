//! Process exit codes
//!
//! A completed scan exits with the number of undocumented symbols, so CI can
//! treat anything non-zero as "documentation incomplete". The top of the byte
//! range is kept for failures that never produced a count.
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | every reportable symbol is documented |
//! | 1-253 | that many undocumented symbols (253 means "253 or more") |
//! | 254 | report could not be loaded or rendered |
//! | 255 | wrong arguments |

/// Exit code constants
pub mod codes {
    /// Nothing undocumented.
    pub const SUCCESS: u8 = 0;

    /// Largest count reported as-is; higher counts saturate here.
    pub const MAX_COUNT: u8 = 253;

    /// The report was missing, unreadable, malformed, or output failed.
    pub const LOAD_ERROR: u8 = 254;

    /// Argument count mismatch or unknown option (`-1` as a byte).
    pub const USAGE_ERROR: u8 = 255;
}

/// Exit code for a completed scan that found `count` undocumented symbols
#[must_use]
pub fn count_exit_code(count: usize) -> u8 {
    u8::try_from(count).map_or(codes::MAX_COUNT, |c| c.min(codes::MAX_COUNT))
}
