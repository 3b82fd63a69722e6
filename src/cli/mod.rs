//! CLI module for microdsi - command-line interface and subcommands.

pub mod commands;

pub use commands::Cli;
