//! Command-line argument parsing and validation

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Component Packager - packages a component library into per-component npm packages
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "packager")]
pub struct Args {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Root directory of the library project
    #[arg(long, global = true, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the full packaging pipeline
    Build {
        /// Sync generated packages into end-to-end test fixtures
        #[arg(long)]
        e2e: bool,

        /// Do not regenerate the aggregation entry file before building
        #[arg(long)]
        skip_index: bool,
    },

    /// List discoverable component names
    Components,

    /// Print the relocation and scaffold plan without building anything
    Plan,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_args() {
        let args = Args::try_parse_from(["packager", "components"]).unwrap();
        assert!(!args.debug);
        assert_eq!(args.root, PathBuf::from("."));
        assert!(matches!(args.command, Command::Components));
    }

    #[test]
    fn test_parse_debug_flag() {
        let args = Args::try_parse_from(["packager", "--debug", "plan"]).unwrap();
        assert!(args.debug);
    }

    #[test]
    fn test_parse_build_with_options() {
        let args =
            Args::try_parse_from(["packager", "build", "--e2e", "--skip-index"]).unwrap();
        match args.command {
            Command::Build { e2e, skip_index } => {
                assert!(e2e);
                assert!(skip_index);
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_parse_root_after_subcommand() {
        let args = Args::try_parse_from(["packager", "build", "--root", "/tmp/lib"]).unwrap();
        assert_eq!(args.root, PathBuf::from("/tmp/lib"));
    }
}
