//! Command-line argument definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use portal_desa::theme::ThemeMode;

/// Portal Desa - village information portal in the terminal
#[derive(Parser, Debug)]
#[command(name = "portal-desa")]
#[command(version)]
#[command(about = "Village information portal: news, profile, statistics and services", long_about = None)]
pub struct Args {
    /// Directory holding news.json and the other data documents
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Base URL serving the data documents (overrides --data-dir)
    #[arg(long, global = true)]
    pub data_url: Option<String>,

    /// Color mode for this session (light or dark); not persisted
    #[arg(long)]
    pub theme: Option<ThemeMode>,

    /// News cards per page
    #[arg(long, global = true)]
    pub page_size: Option<usize>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Non-interactive command; starts the TUI when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Non-interactive subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print one page of the news listing
    News {
        /// Category filter ("all" for every category)
        #[arg(long)]
        category: Option<String>,
        /// Case-insensitive search over title, excerpt and content
        #[arg(long)]
        search: Option<String>,
        /// Page to print, starting at 1; a page past the last prints "no results"
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Check a value against a service form rule
    Validate {
        /// Field key: fullName, nik, phone, email, serviceType or message
        #[arg(long)]
        field: String,
        /// Value to check
        #[arg(long)]
        value: String,
        /// Treat the field as required even if the form does not
        #[arg(long)]
        required: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Global flags parse before and after the subcommand.
    fn parses_news_subcommand_with_globals() {
        let args = Args::try_parse_from([
            "portal-desa",
            "--data-dir",
            "/srv/desa",
            "news",
            "--category",
            "kesehatan",
            "--page",
            "2",
            "-v",
        ])
        .expect("valid args");
        assert_eq!(args.data_dir, Some(PathBuf::from("/srv/desa")));
        assert!(args.verbose);
        assert_eq!(
            args.command,
            Some(Command::News {
                category: Some("kesehatan".into()),
                search: None,
                page: 2
            })
        );
    }

    #[test]
    fn parses_theme_and_rejects_unknown() {
        let args = Args::try_parse_from(["portal-desa", "--theme", "dark"]).expect("valid");
        assert_eq!(args.theme, Some(ThemeMode::Dark));
        assert!(args.command.is_none());
        assert!(Args::try_parse_from(["portal-desa", "--theme", "sepia"]).is_err());
    }
}
