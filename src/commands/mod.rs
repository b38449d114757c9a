//! Command implementations for the envforge CLI

pub mod completions;
pub mod generate;
