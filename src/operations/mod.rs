//! High-level operations behind the CLI commands
//!
//! Commands parse arguments and wire up real value sources; operations hold
//! the workflow and take their sources as trait objects so they can be tested
//! without a network or an external status command.

pub mod generate;
