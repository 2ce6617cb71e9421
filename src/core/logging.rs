use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "GRAMMARK_LOG";

/// Install a fmt subscriber filtered by `GRAMMARK_LOG` (falls back to
/// `default_directive`). Returns false when a global subscriber is already set.
pub fn init(default_directive: &str) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
