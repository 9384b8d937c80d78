//! Bordergraph CLI library.
//!
//! This crate provides command-line interface utilities for the bordergraph
//! explorer, including terminal styling and output formatting.

pub mod output;
pub mod terminal;
