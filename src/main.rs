use anyhow::Context;
use clap::Parser;
use indeed_jobs_client::config::LoggingConfig;
use indeed_jobs_client::{
    Config, ConfigOverrides, HttpClientConfig, HttpTransport, IndeedProvider, Job, JobsClient,
    Result, SearchParams,
};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Search Indeed job listings from the command line
#[derive(Debug, Parser)]
#[command(name = "indeed-search", version, about)]
struct Cli {
    /// Keyword query
    #[arg(short, long)]
    keyword: Option<String>,

    #[arg(long)]
    city: Option<String>,

    #[arg(long)]
    state: Option<String>,

    /// Page of results to start from
    #[arg(short, long)]
    page: Option<u32>,

    /// Results per page
    #[arg(short = 'n', long)]
    count: Option<u32>,

    /// Publisher key, overrides the config file
    #[arg(long, env = "INDEED_PUBLISHER_ID")]
    publisher: Option<String>,

    /// Search endpoint, overrides the config file
    #[arg(long)]
    base_url: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,

    /// Print jobs as JSON
    #[arg(long)]
    json: bool,

    /// Print the JSON Schema of a job record and exit
    #[arg(long)]
    schema: bool,
}

fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .context("invalid log filter")?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if logging.format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

fn print_job(job: &Job) {
    println!("{}", job.title);
    if let Some(company) = job.company.as_deref().filter(|c| !c.is_empty()) {
        println!("  company:  {company}");
    }
    if !job.location.is_empty() {
        println!("  location: {}", job.location);
    }
    if let Some(posted) = job.date_posted_raw.as_deref().filter(|d| !d.is_empty()) {
        println!("  posted:   {posted}");
    }
    println!("  {}", job.url);
}

async fn run(cli: Cli, config: &Config) -> Result<()> {
    let params = SearchParams {
        keyword: cli.keyword,
        city: cli.city,
        state: cli.state,
        page: cli.page,
        count: cli.count,
    };

    let provider = IndeedProvider::from_config(&config.indeed).with_search(&params);
    let transport = HttpTransport::new(&HttpClientConfig::from(&config.indeed))?;
    let client = JobsClient::new(provider, transport);

    let result = client.search().await?;
    info!(
        "Fetched {} jobs from {} in {:?}",
        result.jobs.len(),
        result.source,
        result.search_time
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result.jobs)?);
    } else {
        for job in &result.jobs {
            print_job(job);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.schema {
        println!("{}", serde_json::to_string_pretty(&Job::json_schema()?)?);
        return Ok(());
    }

    let mut config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    config
        .apply_overrides(&ConfigOverrides {
            publisher_id: cli.publisher.clone(),
            base_url: cli.base_url.clone(),
            log_level: cli.log_level.clone(),
        })
        .context("invalid configuration override")?;

    init_tracing(&config.logging)?;
    debug!("Loaded configuration: {:?}", config);

    run(cli, &config).await.context("job search failed")
}
