//! # CLI Command Implementations
//!
//! This module contains the implementation of all CLI commands.
//! Each submodule represents a top-level command.
//!
//! ## Available Commands
//!
//! - [`ask`] - Answer a single question
//! - [`chat`] - Interactive conversation loop
//! - [`index`] - Embed the corpus and upsert it into the vector index

pub mod ask;
pub mod chat;
pub mod index;
