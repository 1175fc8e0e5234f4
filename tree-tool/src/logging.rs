use color_eyre::{Result, eyre::Context};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter used when neither a level nor `RUST_LOG` is given.
pub const DEFAULT_FILTER: &str = "info";

/// Install the global tracing subscriber, writing to stderr.
///
/// An explicit `filter` wins over `RUST_LOG`, which wins over
/// [`DEFAULT_FILTER`].
pub fn init(filter: Option<&str>) -> Result<()> {
    let env_filter = match filter {
        Some(filter) => {
            EnvFilter::try_new(filter).with_context(|| format!("Invalid log filter '{filter}'"))?
        }
        None => {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
        }
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(env_filter),
        )
        .try_init()
        .context("Could not set up logging")?;

    Ok(())
}
