use coinbase_exchange::{
    config::CoinbaseConfig, error::ExchangeError, exchange::coinbase::CoinbaseClient,
};
use tracing::{error, info};

/*----- */
// Main
/*----- */
#[tokio::main]
async fn main() {
    // Init
    let _ = dotenvy::dotenv();
    init_logging();

    let resource_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("/accounts"));

    if let Err(error) = run(&resource_path).await {
        error!(%error, configuration = error.is_configuration(), "request failed");
        std::process::exit(1);
    }
}

async fn run(resource_path: &str) -> Result<(), ExchangeError> {
    // Misconfiguration fails here, before any request goes out
    let config = CoinbaseConfig::from_env()?;
    let client = CoinbaseClient::new(config)?;
    info!(base_url = client.base_url(), resource_path, "sending signed request");

    let response = client.get::<serde_json::Value>(resource_path).await?;
    let pretty = serde_json::to_string_pretty(&response).map_err(ExchangeError::Serialise)?;
    println!("{}", pretty);

    Ok(())
}

/*----- */
// Logging config
/*----- */
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::builder()
                .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        // Disable colours on release builds
        .with_ansi(cfg!(debug_assertions))
        // Enable Json formatting
        .json()
        // Install this Tracing subscriber as global default
        .init()
}
