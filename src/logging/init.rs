use anyhow::{Context, Result};

/// Default filter when `RUST_LOG` is unset. Diagnostics stay quiet so the
/// error stream only carries `error:` and `fatal:` lines.
const DEFAULT_FILTER: &str = "warn";

/// Initialize tracing on stderr. `RUST_LOG` (if set) takes precedence.
///
/// # Errors
/// Returns an error if the filter expression is invalid.
pub fn init_tracing() -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string());
    let filter_layer = EnvFilter::try_new(filter).context("invalid RUST_LOG / filter")?;
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    // Allow re-init to be a no-op in tests
    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();

    Ok(())
}
