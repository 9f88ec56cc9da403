use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Уровень логирования: `LOG_LEVEL`, затем `RUST_LOG`, иначе `warn`.
pub(crate) fn log_level_from_env() -> String {
    log_level_from_lookup(|key| std::env::var(key).ok())
}

fn log_level_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> String {
    ["LOG_LEVEL", "RUST_LOG"]
        .into_iter()
        .filter_map(lookup)
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}

/// Фильтр строится только из переданного уровня; `RUST_LOG` уже учтён в
/// [`log_level_from_env`].
pub(crate) fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(())
}
