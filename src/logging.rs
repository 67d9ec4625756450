use tracing::trace;
use tracing_subscriber::{prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "hangman=warn";

/// Send diagnostics to stderr, stdout belongs to the game.
///
/// The filter comes from `RUST_LOG`, e.g. `RUST_LOG=hangman=debug`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    trace!("finished");
}
