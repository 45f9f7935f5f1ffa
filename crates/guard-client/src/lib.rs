//! # Bucket Guard client SDK
//!
//! An async client for the Bucket Guard backend, a service that detects and
//! remediates misconfigurations in S3 buckets (public access policies, disabled
//! versioning, missing public access blocks).
//!
//! ## Example
//!
//! ```rust,ignore
//! use guard_client::{GuardClient, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = GuardClient::new(Config::new("http://127.0.0.1:5000"))?;
//!
//!     // List buckets known to the backend
//!     let listing = client.list_buckets().await?;
//!
//!     // Scan one of them
//!     for bucket in &listing.buckets {
//!         let report = client.detect_issues(bucket).await?;
//!         for issue in &report.issues {
//!             let ack = client.remediate_issue(bucket, &issue.issue).await?;
//!             println!("{}", ack.message);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod types;

pub use client::GuardClient;
pub use config::Config;
pub use error::{ClientError, Result};
pub use types::*;
