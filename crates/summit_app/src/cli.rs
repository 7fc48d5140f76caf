use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use summit_logging::LogDestination;

const DEFAULT_TALKS: &str = "talks.json";
const DEFAULT_FEED: &str = "mws2025_podcast.xml";

/// summit_feed - turn a saved summit talk listing into a podcast feed
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// RON configuration with site origin and feed metadata
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Where log output goes
    #[arg(long, value_enum, default_value_t = LogTarget::Terminal, global = true)]
    pub log: LogTarget,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract talks from a rendered listing page and save them as JSON
    Extract {
        /// Saved HTML of the fully rendered listing page
        #[arg(long)]
        html: PathBuf,
        #[arg(long, default_value = DEFAULT_TALKS)]
        out: PathBuf,
    },
    /// Render a saved talk set into an RSS podcast feed
    Render {
        #[arg(long, default_value = DEFAULT_TALKS)]
        talks: PathBuf,
        #[arg(long, default_value = DEFAULT_FEED)]
        out: PathBuf,
    },
    /// Extract, save, then render
    Run {
        #[arg(long)]
        html: PathBuf,
        #[arg(long, default_value = DEFAULT_TALKS)]
        talks: PathBuf,
        #[arg(long, default_value = DEFAULT_FEED)]
        out: PathBuf,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Terminal,
    File,
    Both,
}

impl LogTarget {
    pub fn destination(self) -> LogDestination {
        match self {
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::File => LogDestination::default_file(),
            LogTarget::Both => {
                LogDestination::Both(PathBuf::from(summit_logging::DEFAULT_LOG_FILE))
            }
        }
    }
}
