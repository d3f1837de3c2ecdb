use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use navhud::config::{
    GeocoderConfig, SuggestConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use navhud::location::{NominatimClient, SuggestResponse, SuggestionResolver};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// NavHUD — location suggestions backed by OpenStreetMap Nominatim
///
/// Examples:
///   navhud serve --port 5000
///   navhud suggest "Paris, France"
///   navhud suggest "123 Main Street Springfield" --fallback-threshold 5
#[derive(Parser)]
#[command(name = "navhud", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    geocoder: GeocoderArgs,

    /// Debug-level logging (RUST_LOG overrides).
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Run the web front end.
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(long, default_value_t = 5000)]
        port: u16,
    },
    /// Resolve one query and print the JSON response to stdout.
    Suggest {
        query: String,
    },
}

#[derive(Args)]
struct GeocoderArgs {
    /// Geocoding search endpoint.
    #[arg(long, global = true, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// User-Agent sent upstream (Nominatim requires an identifying one).
    #[arg(long, global = true, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Per-lookup timeout in seconds.
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Result limit for the primary lookup.
    #[arg(long, global = true, default_value_t = SuggestConfig::default().primary_limit)]
    primary_limit: usize,

    /// Result limit for the fallback lookup.
    #[arg(long, global = true, default_value_t = SuggestConfig::default().fallback_limit)]
    fallback_limit: usize,

    /// Run the fallback lookup when the primary returns fewer results than this.
    #[arg(long, global = true, default_value_t = SuggestConfig::default().fallback_threshold)]
    fallback_threshold: usize,

    /// Maximum number of merged suggestions.
    #[arg(long, global = true, default_value_t = SuggestConfig::default().max_results)]
    max_results: usize,
}

impl GeocoderArgs {
    fn geocoder_config(&self) -> GeocoderConfig {
        GeocoderConfig {
            endpoint: self.endpoint.clone(),
            user_agent: self.user_agent.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    fn suggest_config(&self) -> SuggestConfig {
        SuggestConfig {
            primary_limit: self.primary_limit,
            fallback_limit: self.fallback_limit,
            fallback_threshold: self.fallback_threshold,
            max_results: self.max_results,
        }
    }
}

fn init_logger(verbose: bool) {
    let default = if verbose { "navhud=debug,tower_http=debug,info" } else { "navhud=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let client = NominatimClient::new(&cli.geocoder.geocoder_config());
    let resolver = SuggestionResolver::with_config(Box::new(client), cli.geocoder.suggest_config());

    match cli.command {
        Command::Serve { host, port } => {
            navhud::server::start(&host, port, resolver)
                .await
                .context("server error")?;
        }
        Command::Suggest { query } => {
            let results = tokio::task::spawn_blocking(move || resolver.resolve(&query))
                .await
                .context("suggestion task failed")?;
            let body = serde_json::to_string_pretty(&SuggestResponse { results })?;
            println!("{}", body);
        }
    }

    Ok(())
}
