//! # Exit Codes
//!
//! Standard exit codes for the Campusbot CLI.
//!
//! These codes follow common Unix conventions and provide meaningful
//! feedback to scripts and CI/CD pipelines.

/// Successful execution
pub const EXIT_SUCCESS: i32 = 0;

/// General error (unspecified)
pub const EXIT_ERROR: i32 = 1;

/// Configuration error (missing or invalid credentials)
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Network error (embedding, index, or completion call failed)
pub const EXIT_NETWORK_ERROR: i32 = 4;

/// Index build finished but some records failed
pub const EXIT_PARTIAL_INDEX: i32 = 5;

/// Invalid input (bad arguments)
pub const EXIT_INVALID_INPUT: i32 = 6;
