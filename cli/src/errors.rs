//! # Error Handling
//!
//! This module provides user-friendly error display functions for the
//! Campusbot CLI.

use colored::Colorize;

/// Display a network error with helpful suggestions
///
/// # Arguments
///
/// * `message` - The error message to display
pub fn display_network_error(message: &str) {
    eprintln!("{} Network error: {}", "✗".red().bold(), message);
    eprintln!();
    eprintln!("{}", "Possible causes:".yellow());
    eprintln!("  • No internet connection");
    eprintln!("  • OpenAI or Pinecone is unreachable");
    eprintln!("  • An API key was rejected");
    eprintln!();
    eprintln!(
        "{} Check your connection and credentials, then try again.",
        "Tip:".cyan().bold()
    );
}

/// Display a configuration error with helpful suggestions
///
/// # Arguments
///
/// * `message` - The error message to display
pub fn display_config_error(message: &str) {
    eprintln!("{} Configuration error: {}", "✗".red().bold(), message);
    eprintln!();
    eprintln!("{}", "Possible causes:".yellow());
    eprintln!("  • A required environment variable is missing");
    eprintln!("  • The .env file was not found or is incomplete");
    eprintln!();
    eprintln!(
        "{} Set OPENAI_API_KEY, PINECONE_API_KEY and CAMPUSBOT_PINECONE_HOST.",
        "Tip:".cyan().bold()
    );
}

/// Display a generic error
///
/// # Arguments
///
/// * `message` - The error message to display
pub fn display_error(message: &str) {
    eprintln!("{} Error: {}", "✗".red().bold(), message);
}

/// Display a warning
///
/// # Arguments
///
/// * `message` - The warning message to display
pub fn display_warning(message: &str) {
    eprintln!("{} Warning: {}", "⚠".yellow().bold(), message);
}

/// Display a success message
///
/// # Arguments
///
/// * `message` - The success message to display
pub fn display_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Display an info message
///
/// # Arguments
///
/// * `message` - The info message to display
pub fn display_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

#[cfg(test)]
mod tests {
    // Note: These tests just verify the functions don't panic.
    // Actual output testing would require capturing stderr/stdout.

    use super::*;

    #[test]
    fn test_display_network_error_does_not_panic() {
        display_network_error("Connection refused");
    }

    #[test]
    fn test_display_config_error_does_not_panic() {
        display_config_error("OPENAI_API_KEY is not set");
    }

    #[test]
    fn test_display_error_does_not_panic() {
        display_error("Something went wrong");
    }

    #[test]
    fn test_display_warning_does_not_panic() {
        display_warning("Skipped a record");
    }

    #[test]
    fn test_display_success_does_not_panic() {
        display_success("Index built");
    }

    #[test]
    fn test_display_info_does_not_panic() {
        display_info("Indexing records...");
    }
}
