//! Qoogle CLI
//!
//! Terminal client for Qoogle: AI search, reels and streaks behind a
//! username/password sign-in.

mod commands;
mod config;
mod store;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "qoogle")]
#[command(author, version, about = "Qoogle - AI search, reels and streaks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Gemini API key (falls back to a mock response when unset)
    #[arg(long, global = true, env = "API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Account management
    #[command(name = "auth")]
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },

    /// Ask the AI search anything
    Search {
        /// Free-text prompt
        #[arg(required = true, trailing_var_arg = true)]
        prompt: Vec<String>,
    },

    /// Daily streaks with friends
    Streaks {
        #[command(subcommand)]
        action: StreaksAction,
    },

    /// Short video feed
    Reels {
        #[command(subcommand)]
        action: ReelsAction,
    },

    /// Configuration management
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Create an account and sign in
    Signup {
        /// Username (optional - will prompt if not provided)
        #[arg(short, long)]
        username: Option<String>,
        /// Password (optional - will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Sign in to an existing account
    Login {
        /// Username (optional - will prompt if not provided)
        #[arg(short, long)]
        username: Option<String>,
        /// Password (optional - will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Sign out
    Logout,
    /// Show current user
    Whoami,
}

#[derive(Subcommand)]
enum StreaksAction {
    /// List friends by streak
    List,
    /// Send a snap to a friend, extending the streak
    Send {
        /// Friend id as shown by `streaks list`
        id: u32,
    },
    /// Expire streaks older than 24 hours
    Sweep,
    /// Keep sweeping every minute until interrupted
    Watch,
}

#[derive(Subcommand)]
enum ReelsAction {
    /// List the feed
    List,
    /// Append a local video to the feed
    Upload {
        /// Path to a video file
        path: PathBuf,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set the Gemini model
    SetModel { model: String },
    /// Set the Gemini API base URL
    SetApiBase {
        /// Base URL (e.g., https://generativelanguage.googleapis.com)
        url: String,
    },
    /// Reset to default configuration
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(if cli.verbose {
            "qoogle_cli=debug,qoogle_core=debug"
        } else {
            "qoogle_cli=info,qoogle_core=warn"
        })
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    info!("Starting Qoogle CLI");

    let api_key = cli.api_key;
    let result = match cli.command {
        Commands::Auth { action } => match action {
            AuthAction::Signup { username, password } => {
                commands::auth::signup(username, password).await
            }
            AuthAction::Login { username, password } => {
                commands::auth::login(username, password).await
            }
            AuthAction::Logout => commands::auth::logout().await,
            AuthAction::Whoami => commands::auth::whoami().await,
        },
        Commands::Search { prompt } => commands::search::run(&prompt.join(" "), api_key).await,
        Commands::Streaks { action } => match action {
            StreaksAction::List => commands::streaks::list().await,
            StreaksAction::Send { id } => commands::streaks::send(id).await,
            StreaksAction::Sweep => commands::streaks::sweep().await,
            StreaksAction::Watch => commands::streaks::watch().await,
        },
        Commands::Reels { action } => match action {
            ReelsAction::List => commands::reels::list().await,
            ReelsAction::Upload { path } => commands::reels::upload(&path).await,
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(api_key).await,
            ConfigAction::SetModel { model } => commands::config::set_model(&model).await,
            ConfigAction::SetApiBase { url } => commands::config::set_api_base(&url).await,
            ConfigAction::Reset => commands::config::reset().await,
        },
    };

    if let Err(ref e) = result {
        error!("Command failed: {}", e);
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_search_joins_words() {
        let cli = Cli::try_parse_from(["qoogle", "search", "what", "is", "rust"]).unwrap();
        match cli.command {
            Commands::Search { prompt } => assert_eq!(prompt.join(" "), "what is rust"),
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn test_streak_send_parses_id() {
        let cli = Cli::try_parse_from(["qoogle", "streaks", "send", "4"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Streaks {
                action: StreaksAction::Send { id: 4 }
            }
        ));
    }
}
