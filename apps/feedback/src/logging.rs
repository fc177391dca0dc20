use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes structured logging on stderr, leaving stdout for model replies.
///
/// `RUST_LOG` wins when set; otherwise this library and the calling binary
/// (`bin_crate`, usually `env!("CARGO_CRATE_NAME")`) log at `default_level`.
pub fn init(bin_crate: &str, default_level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={default_level},{bin_crate}={default_level}",
                env!("CARGO_CRATE_NAME")
            ))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
