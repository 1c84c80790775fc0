//! Logging initialization

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging subsystem
///
/// `RUST_LOG` takes precedence when set. Key material is never logged.
pub fn init(verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        "kinetic_sdk=debug,info"
    } else {
        "kinetic_sdk=info,warn,error"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    Ok(())
}
