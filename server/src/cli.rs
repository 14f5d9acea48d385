//! Command-line interface
//!
//! `refeed` with no subcommand runs the server.

use clap::{Parser, Subcommand};

use crate::feed::FetchMode;

#[derive(Parser, Debug)]
#[command(
    name = "refeed",
    about = "Re-Feed - import a remote feed, tag entries, republish as RSS, Atom or JSON",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Run one fetch cycle against the configured remote feed and exit
    Fetch {
        /// Remote format to fetch (json or rss); defaults to FETCH_MODE
        mode: Option<FetchMode>,
    },
}

impl Cli {
    /// The subcommand to run, `serve` when none was given
    pub fn subcommand(&self) -> &Commands {
        self.command.as_ref().unwrap_or(&Commands::Serve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_serves() {
        let cli = Cli::try_parse_from(["refeed"]).unwrap();
        assert_eq!(cli.subcommand(), &Commands::Serve);
    }

    #[test]
    fn fetch_with_mode() {
        let cli = Cli::try_parse_from(["refeed", "fetch", "rss"]).unwrap();
        assert_eq!(
            cli.subcommand(),
            &Commands::Fetch {
                mode: Some(FetchMode::Rss)
            }
        );
    }

    #[test]
    fn fetch_without_mode() {
        let cli = Cli::try_parse_from(["refeed", "fetch"]).unwrap();
        assert_eq!(cli.subcommand(), &Commands::Fetch { mode: None });
    }

    #[test]
    fn fetch_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["refeed", "fetch", "atom"]).is_err());
    }
}
