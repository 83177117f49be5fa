//! Job feed command-line client
//!
//! Fetches the job feed once, applies the title search and prints the
//! postings, either as a readable listing or as normalized JSON.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use common::filter_jobs;
use feed::{DEFAULT_FEED_URL, DEFAULT_TIMEOUT_SECS, FeedClient, FeedSource};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Fetch and search the public job feed
#[derive(Parser, Debug)]
#[command(name = "feed")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Job feed endpoint
    #[arg(long, env = "FEED_URL", default_value = DEFAULT_FEED_URL)]
    url: String,

    /// Request timeout in seconds
    #[arg(long, env = "FEED_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Only show jobs whose title contains this text (case-insensitive)
    #[arg(short, long, default_value = "")]
    query: String,

    /// Print normalized JSON instead of a listing
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let client = FeedClient::new(&cli.url, Duration::from_secs(cli.timeout_secs))?;

    let jobs = match client.fetch_jobs().await {
        Ok(jobs) => jobs,
        Err(e) => {
            tracing::error!(error = %e, "fetch failed");
            anyhow::bail!(e.user_message());
        }
    };
    let shown = filter_jobs(&jobs, &cli.query);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    if !cli.query.is_empty() {
        println!("🔍 \"{}\": {} of {} jobs\n", cli.query, shown.len(), jobs.len());
    } else {
        println!("📊 {} jobs from {}\n", jobs.len(), client.url());
    }

    for job in &shown {
        println!("📋 {} at {}", job.title, job.company_name);
        println!("   {} | Salary: {}", job.location, job.salary);
        if let Some(job_type) = &job.job_type {
            println!("   {}", job_type);
        }
        println!("   id: {}", job.id);
    }

    Ok(())
}
