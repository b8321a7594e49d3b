//! SSO Bank CLI - terminal front-end for the banking client
//!
//! Logs in against the identity service, keeps the access token in a
//! session file, and talks to the banking service with it.
//!
//! # Quick Start
//!
//! ```bash
//! ssobank signup --email a@b.com --name Kim
//! ssobank login --email a@b.com
//! ssobank dashboard
//! ssobank transfer --to 123-456-789 --amount 1000
//! ssobank logout
//! ```
//!
//! Endpoints come from `SSOBANK_AUTH_URL` / `SSOBANK_BANKING_URL` (a `.env`
//! file is honoured) or the `--auth-url` / `--banking-url` flags.

use clap::{Parser, Subcommand};
use ssobank_sdk::{BankingClient, ClientConfig};
use ssobank_session::{FileSessionStore, SessionConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod display;

/// SSO Bank CLI - log in once, then check balances and send transfers
#[derive(Parser)]
#[command(name = "ssobank")]
#[command(author = "SSO Bank Contributors")]
#[command(version)]
#[command(about = "Banking client with single sign-on", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Identity service URL
    #[arg(long, global = true)]
    auth_url: Option<String>,

    /// Banking service URL
    #[arg(long, global = true)]
    banking_url: Option<String>,

    /// Session file location
    #[arg(long, global = true, env = "SSOBANK_SESSION_FILE")]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new user
    Signup {
        #[arg(short, long)]
        email: Option<String>,

        /// Display name
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Log in and store the session
    Login {
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show session and endpoint configuration
    Status,

    /// Show balance and recent transfers
    #[command(alias = "account")]
    Dashboard {
        /// Look up this account number instead of your own
        #[arg(long)]
        account: Option<String>,
    },

    /// Send money to another account
    Transfer {
        /// Recipient account number
        #[arg(long)]
        to: String,

        /// Amount in whole units
        #[arg(long, allow_hyphen_values = true)]
        amount: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    // Load .env if present
    dotenvy::dotenv().ok();

    init_logging();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        display::error(&err.to_string());
        std::process::exit(1);
    }
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = ClientConfig::from_env()?;
    if let Some(url) = cli.auth_url {
        config.auth_base_url = url;
    }
    if let Some(url) = cli.banking_url {
        config.banking_base_url = url;
    }

    let session_config = match cli.session_file {
        Some(path) => SessionConfig::new(path),
        None => SessionConfig::from_env()?,
    };
    let session = Arc::new(FileSessionStore::from_config(&session_config));
    let bank = BankingClient::new(config, session)?;

    match cli.command {
        Commands::Signup { email, name } => commands::auth::signup(&bank, email, name).await,
        Commands::Login { email } => commands::auth::login(&bank, email).await,
        Commands::Logout => commands::auth::logout(&bank),
        Commands::Status => commands::auth::status(&bank, &session_config.path),
        Commands::Dashboard { account } => commands::account::dashboard(&bank, account).await,
        Commands::Transfer { to, amount, yes } => {
            commands::transfer::transfer(&bank, &to, &amount, yes).await
        }
    }
}
