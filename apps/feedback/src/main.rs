use anyhow::Result;
use tracing::info;

use feedback::{flows, logging, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; a missing API_KEY stops us before any network call
    let config = Config::from_env()?;

    logging::init(env!("CARGO_CRATE_NAME"), &config.rust_log);

    info!("Starting feedback-questions v{}", env!("CARGO_PKG_VERSION"));

    for reply in flows::run_questions(&config).await? {
        println!("{reply}");
    }

    Ok(())
}
