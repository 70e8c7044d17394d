use clap::Parser;
use std::path::PathBuf;
use streetguess::daily::{DailyCache, DailyLocationProvider};
use streetguess::server;

/// Street Guess — daily geography guessing game backend.
///
/// Serves one street-view location per calendar day and scores guesses
/// by great-circle distance.
///
/// Endpoints:
///   GET  /api/get-location    today's target location
///   POST /api/check-distance  distance between guess and target
///
/// Set GOOGLE_MAPS_API_KEY (env or .env) to get keyed image URLs.
#[derive(Parser)]
#[command(name = "streetguess", version, about, long_about = None)]
struct Cli {
    /// Interface to bind.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on.
    #[arg(long, short = 'p', default_value_t = 5000)]
    port: u16,

    /// Path to the daily location cache file.
    /// Defaults to ~/.streetguess/daily_location.json.
    #[arg(long)]
    cache_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let provider = match cli.cache_file {
        Some(path) => DailyLocationProvider::with_cache(DailyCache::load_from(path)),
        None => DailyLocationProvider::new(),
    };

    server::start(&cli.host, cli.port, provider).await;
}
