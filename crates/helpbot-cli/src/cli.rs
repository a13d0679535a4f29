use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// HelpBot: terminal client for the customer-support assistant.
#[derive(Parser, Debug)]
#[command(name = "helpbot", version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL, e.g. http://localhost:8000/api/v1.
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    /// Log level override (debug, info, warn, error, or a full filter).
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive chat with the assistant (default).
    Chat,
    /// Print dashboard counters.
    Metrics,
    /// Add a knowledge-base article.
    Faq {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        /// Repeat for several tags.
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Rebuild the backend's search index.
    Reindex,
    /// Print the effective configuration with secrets masked.
    Config,
}

impl Args {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Chat)
    }
}

pub fn parse() -> Args {
    Args::parse()
}
