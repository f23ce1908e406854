use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Installs a global `tracing` fmt subscriber.
///
/// The maximum level is read from the `LOGLEVEL` environment variable
/// (`TRACE`, `DEBUG`, `INFO`, `WARN` or `ERROR`, case-insensitive) and
/// defaults to `INFO`. Only the first call has an effect.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = std::env::var("LOGLEVEL")
            .ok()
            .and_then(|value| parse_level(&value))
            .unwrap_or(Level::INFO);

        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!("Log level set to: {}", level);
        }
    });
}

fn parse_level(value: &str) -> Option<Level> {
    value.trim().parse::<Level>().ok()
}
