//! CLI command definitions using clap.
//!
//! With no subcommand the TUI starts. Subcommands:
//! - serve: static front-end plus health endpoint
//! - export: render a Lab document to the markdown deliverable
//! - lessons: print the lesson cards for a track

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// MicroDSI - micro-learning for process identification
#[derive(Parser, Debug)]
#[command(name = "microdsi")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the static front-end and /api/health
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory with the static files (overrides config)
        #[arg(short, long)]
        root: Option<PathBuf>,
    },

    /// Export a Lab document (YAML) as the markdown deliverable
    Export {
        /// Track: itsm, hr or proc
        #[arg(short, long)]
        track: String,

        /// Lab document to read; an empty Lab when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file, or "-" for stdout (default: export dir from config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the lesson cards
    Lessons {
        /// Track for the examples (default: config)
        #[arg(short, long)]
        track: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_launches_tui() {
        let cli = Cli::parse_from(["microdsi"]);
        assert!(cli.command.is_none());
        assert!(!cli.is_verbose());
    }

    #[test]
    fn test_parse_serve() {
        let cli = Cli::parse_from(["microdsi", "serve", "--port", "8080", "--root", "dist"]);
        match cli.command {
            Some(Commands::Serve { port, root }) => {
                assert_eq!(port, Some(8080));
                assert_eq!(root, Some(PathBuf::from("dist")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_export() {
        let cli = Cli::parse_from(["microdsi", "-v", "export", "--track", "hr", "-i", "lab.yml", "-o", "-"]);
        assert!(cli.is_verbose());
        match cli.command {
            Some(Commands::Export { track, input, output }) => {
                assert_eq!(track, "hr");
                assert_eq!(input, Some(PathBuf::from("lab.yml")));
                assert_eq!(output, Some(PathBuf::from("-")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_export_requires_track() {
        assert!(Cli::try_parse_from(["microdsi", "export"]).is_err());
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::parse_from(["microdsi", "lessons", "--config", "my.yml"]);
        assert_eq!(cli.config, Some(PathBuf::from("my.yml")));
        assert!(matches!(cli.command, Some(Commands::Lessons { track: None })));
    }
}
