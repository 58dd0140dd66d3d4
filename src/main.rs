use chrono::Datelike;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use gitwrapped::{calculate_insights, fetch_all_activity, report, Config, GitHubClient};

#[derive(Parser, Debug)]
#[command(name = "gitwrapped")]
#[command(version = "0.1.0")]
#[command(about = "Generate a GitHub year-in-review for any user")]
struct Args {
    /// GitHub username to wrap
    #[arg(short, long)]
    username: String,

    /// Year to review (defaults to the current year)
    #[arg(short, long)]
    year: Option<i32>,

    /// Output format (text, markdown, json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("gitwrapped=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env();
    let year = args.year.unwrap_or_else(|| chrono::Utc::now().year());

    if config.github_token.is_none() {
        tracing::info!(
            "No GITHUB_TOKEN set; the contribution summary will be unavailable and \
             totals will fall back to the public calendar and event log"
        );
    }

    let client = GitHubClient::new(config.github_token.as_deref())?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message(format!("Fetching activity for @{}...", args.username));
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let data = fetch_all_activity(&client, &config, &args.username, year).await?;
    spinner.finish_and_clear();

    let insights = calculate_insights(&data, year);

    let output = match args.format.as_str() {
        "json" => serde_json::to_string_pretty(&insights)?,
        "markdown" => report::format_markdown(&data.user, &insights, year),
        _ => report::format_text(&data.user, &insights, year),
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!("Report written to: {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}
