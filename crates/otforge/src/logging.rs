//! Logging setup for binaries and tests that use OTForge.
//!
//! The library crates only emit `tracing` events:
//!
//! - **INFO**: end of an MRCD run (passes, added ERCs, consistency)
//! - **DEBUG**: pass boundaries, each added ERC, comparer construction
//! - **TRACE**: every comparison, every RCD stratum

use std::sync::OnceLock;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: OnceLock<()> = OnceLock::new();

/// Directive used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_DIRECTIVE: &str = "otforge_learner=info";

/// Installs a formatting subscriber filtered by `RUST_LOG`.
///
/// Safe to call multiple times - only the first call has effect. If another
/// global subscriber is already installed, it is left in place.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        assert!(INIT.get().is_some());
    }
}
