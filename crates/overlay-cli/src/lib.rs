//! Command-line interface for Overlay
//!
//! The `overlay` binary lives in `main.rs`; argument definitions, the
//! commands and the batch job format live here so they can be tested.

pub mod cli;
pub mod commands;
pub mod jsonl;
