use anyhow::Result;
use tracing::info;

use feedback::{flows, logging, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    logging::init(env!("CARGO_CRATE_NAME"), &config.rust_log);

    info!("Starting feedback-chat v{}", env!("CARGO_PKG_VERSION"));

    let reply = flows::run_chat(&config).await?;
    println!("{reply}");

    Ok(())
}
