use anyhow::Context;
use flutterwave_rust::{client::Config as ClientConfig, FlutterwaveClient, DEFAULT_API_URL};

#[derive(serde::Deserialize, Debug)]
struct Config {
    secret_key: String,
    api_url: Option<String>,
    transaction_id: i64,
}

impl Config {
    fn read() -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::with_name("config"))
            .build()?
            .try_deserialize()
            .context("Failed to assemble the required configuration")
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::read()?;

    // Setup Flutterwave client
    let fw = FlutterwaveClient::new(ClientConfig::with_default_client(
        config.secret_key,
        config.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
    )?)?;

    let res = fw.transactions.verify(config.transaction_id).await?;
    tracing::info!(
        "Transaction {} ({}): {} {:.2} {}",
        res.data.id,
        res.data.tx_ref,
        res.data.status,
        res.data.amount,
        res.data.currency
    );

    if res.is_tokenised() {
        let (expires, expiry) = res.card_will_expire_before(chrono::Utc::now());
        tracing::info!("Card is tokenised. Expiry: {} (expired: {})", expiry, expires);
    }

    // Other transactions created with the same reference
    for transaction in fw.transactions.list_by_reference(&res.data.tx_ref).await? {
        tracing::info!("- {}: {}", transaction.id, transaction.status);
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Setting default subscriber failed");

    if let Err(e) = run().await {
        tracing::error!("Fatal error: {:?}", e);
        std::process::exit(1);
    }
}
