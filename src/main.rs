use anyhow::Result;
use kisan_dost::{KisanConfig, KisanError, logging, web};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; API_KEY may come from the real environment
    let _ = dotenvy::dotenv();

    let config = KisanConfig::load().inspect_err(|e| {
        if let Some(err) = e.downcast_ref::<KisanError>() {
            eprintln!("{}", err.user_message());
        }
    })?;
    logging::init(&config.logging)?;

    tracing::info!("Starting Kisan Dost weather API v{}", kisan_dost::VERSION);
    web::run(config).await
}
