//! # Campusbot CLI Library
//!
//! This crate provides the core functionality for the Campusbot CLI,
//! a retrieval-augmented assistant for university course, fee, job, and
//! location questions.
//!
//! ## Modules
//!
//! - [`commands`] - CLI command implementations
//! - [`config`] - Configuration management
//! - [`errors`] - Error handling and display
//! - [`exit_codes`] - Standard exit codes

pub mod commands;
pub mod config;
pub mod errors;
pub mod exit_codes;

// Re-export commonly used types
pub use config::Config;
