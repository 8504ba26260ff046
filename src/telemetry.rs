//! Tracing setup for hosts driving a presentation.
//!
//! Nothing is installed implicitly. Hosts call one of the helpers below or
//! wire their own `tracing` subscriber.

/// Installs the default subscriber with an `info` fallback filter.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing("info")
}

/// Installs a compact stderr subscriber when the `telemetry` feature is enabled.
///
/// `RUST_LOG` wins over `fallback_filter` when it is set. Returns `false` when
/// the feature is disabled, the filter does not parse, or a global subscriber
/// is already installed.
#[must_use]
pub fn init_tracing(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => match tracing_subscriber::EnvFilter::try_new(fallback_filter) {
                Ok(filter) => filter,
                Err(_) => return false,
            },
        };

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
