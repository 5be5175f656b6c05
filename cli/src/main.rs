//! weft — command-line client for web-of-trust vouches.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use weft_client::{ClientConfig, WotApiClient};
use weft_types::{UserId, Username};
use weft_wot::{Session, ValidatedVouch, WotService};

#[derive(Parser)]
#[command(name = "weft", about = "weft web-of-trust client")]
struct Cli {
    /// Server base URL. When a config file is provided, the file's value wins.
    #[arg(long, default_value = "https://api.weft.example", env = "WEFT_SERVER")]
    server: String,

    /// Caller user id (hex).
    #[arg(long, env = "WEFT_UID")]
    uid: String,

    /// Bearer token for the API session.
    #[arg(long, env = "WEFT_TOKEN")]
    token: String,

    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[arg(long, default_value = "info", env = "WEFT_LOG_LEVEL")]
    log_level: String,

    /// Emit records as JSON instead of text.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch and verify the vouches addressed to you or to a named user.
    List {
        /// Username to fetch vouches for; defaults to yourself.
        #[arg(long)]
        username: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = match &cli.config {
        Some(path) => ClientConfig::from_toml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ClientConfig {
            server_url: cli.server.clone(),
            ..ClientConfig::default()
        },
    };

    let uid: UserId = cli.uid.parse().context("parsing --uid")?;
    let session = Session::new(uid, cli.token.clone());
    let service = WotService::new(WotApiClient::new(&config));

    match cli.command {
        Command::List { username } => {
            let vouches = match username {
                Some(name) => {
                    service
                        .fetch_for_user(&session, &Username::new(name))
                        .await?
                }
                None => service.fetch_for_self(&session).await?,
            };
            print_vouches(&vouches, cli.json)?;
        }
    }

    Ok(())
}

fn print_vouches(vouches: &[ValidatedVouch], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(vouches)?);
        return Ok(());
    }
    if vouches.is_empty() {
        println!("no vouches");
        return Ok(());
    }
    for vouch in vouches {
        println!(
            "[{}] by {} at {} (proof {})",
            vouch.status, vouch.voucher, vouch.vouched_at, vouch.proof
        );
        for text in &vouch.vouch_texts {
            println!("    {text}");
        }
    }
    Ok(())
}

/// Initialize the tracing subscriber with sensible defaults.
///
/// `RUST_LOG` wins over the `--log-level` flag when set.
fn init_tracing(level: &str) {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
