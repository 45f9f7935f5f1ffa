//! Bucket Guard CLI - detect and remediate S3 bucket misconfigurations

use clap::{Parser, Subcommand};
use guard_client::{Config, GuardClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "guard")]
#[command(about = "Client for the Bucket Guard misconfiguration backend")]
#[command(version)]
struct Args {
    /// Backend endpoint URL
    #[arg(long, default_value = "http://127.0.0.1:5000", env = "GUARD_ENDPOINT")]
    endpoint: String,

    /// Enable debug logging
    #[arg(short, long, env = "GUARD_DEBUG")]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all buckets known to the backend
    Buckets,
    /// Detect misconfigurations in a bucket
    Detect {
        /// Bucket to scan
        bucket: String,
    },
    /// Apply the remediation for a detected issue
    Remediate {
        /// Bucket the issue was detected in
        bucket: String,
        /// Issue description as reported by `detect`
        issue: String,
    },
    /// Register AWS credentials with the backend
    AddMachine {
        /// AWS access key ID
        #[arg(long, env = "AWS_ACCESS_KEY_ID")]
        access_key: String,
        /// AWS secret access key
        #[arg(long, env = "AWS_SECRET_ACCESS_KEY")]
        secret_key: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Setup logging
    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("guard_client={log_level},guard_cli={log_level}").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::debug!("Using backend at {}", args.endpoint);
    let client = GuardClient::new(Config::new(&args.endpoint))?;

    match args.command {
        Command::Buckets => {
            let listing = client.list_buckets().await?;
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
        Command::Detect { bucket } => {
            let report = client.detect_issues(&bucket).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Remediate { bucket, issue } => {
            let ack = client.remediate_issue(&bucket, &issue).await?;
            println!("{}", ack.message);
        }
        Command::AddMachine {
            access_key,
            secret_key,
        } => {
            let ack = client.add_machine(&access_key, &secret_key).await?;
            println!("{}", ack.message);
        }
    }

    Ok(())
}
