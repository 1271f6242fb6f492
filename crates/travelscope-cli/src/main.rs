use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use travelscope_core::AppConfig;
use travelscope_scraper::{
    generate_variations, publisher_spelling, AdvisoryResolver, HealthResolution, HealthResolver,
    PageFetcher, Resolution,
};

#[derive(Debug, Parser)]
#[command(name = "travelscope-cli")]
#[command(about = "Resolve travel and health advisories from the command line")]
struct Cli {
    /// Print single-line JSON instead of pretty output
    #[arg(long, global = true)]
    compact: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve the travel advisory for a location slug
    Advisory {
        /// Location slug (e.g., south-korea)
        slug: String,
    },
    /// Resolve the health destination report for a location slug
    Health {
        /// Location slug (e.g., myanmar)
        slug: String,
    },
    /// Show the spellings tried for a location slug, without fetching
    Variations {
        /// Location slug (e.g., south-korea)
        slug: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = travelscope_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Advisory { slug } => {
            let resolver = AdvisoryResolver::new(build_fetcher(&config)?, config.advisory_base_url.clone());
            match resolver.resolve(&slug).await? {
                Resolution::Found(found) => print_json(&found, cli.compact)?,
                Resolution::NotFound { slug } => {
                    anyhow::bail!("no travel advisory found for {slug}")
                }
            }
        }
        Commands::Health { slug } => {
            let resolver = HealthResolver::new(build_fetcher(&config)?, config.health_base_url.clone());
            match resolver.resolve(&slug).await? {
                HealthResolution::Found(found) => print_json(&found, cli.compact)?,
                HealthResolution::NotFound { slug } => {
                    anyhow::bail!("no health information found for {slug}")
                }
            }
        }
        Commands::Variations { slug } => {
            print_json(&SpellingReport::for_slug(&slug), cli.compact)?;
        }
    }

    Ok(())
}

fn build_fetcher(config: &AppConfig) -> anyhow::Result<PageFetcher> {
    let fetcher = PageFetcher::new(config.request_timeout_secs, &config.user_agent)?;
    Ok(fetcher)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpellingReport {
    slug: String,
    publisher_spelling: String,
    variations: Vec<String>,
}

impl SpellingReport {
    fn for_slug(slug: &str) -> Self {
        Self {
            slug: slug.to_string(),
            publisher_spelling: publisher_spelling(slug),
            variations: generate_variations(slug),
        }
    }
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> anyhow::Result<()> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests;
