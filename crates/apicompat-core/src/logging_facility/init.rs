//! Subscriber installation

use std::sync::Once;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, EnvFilter};

/// Output profile for the global subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable lines on stderr
    Development,
    /// One flattened JSON object per event
    Production,
    /// Human-readable lines routed through the test harness writer, so
    /// output is shown only for failing tests
    Test,
}

impl Profile {
    /// Default filter directive when `RUST_LOG` is unset
    pub fn default_directive(&self) -> &'static str {
        match self {
            Profile::Development => "apicompat=debug",
            Profile::Production => "apicompat=info",
            Profile::Test => "apicompat=trace",
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Install the global subscriber for `profile`
///
/// Only the first call does anything. Returns `true` when that call
/// installed the subscriber; `false` on later calls, or when the host
/// process already set a global subscriber of its own. `RUST_LOG`
/// overrides the profile's default filter.
///
/// ```
/// use apicompat_core::logging_facility::{init, Profile};
///
/// init(Profile::Production);
/// // already initialized
/// assert!(!init(Profile::Development));
/// ```
pub fn init(profile: Profile) -> bool {
    let mut installed = false;
    INIT_ONCE.call_once(|| {
        installed = install(profile).is_ok();
    });
    installed
}

fn install(profile: Profile) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(profile.default_directive()));
    let registry = tracing_subscriber::registry().with(filter);

    match profile {
        Profile::Development => registry.with(fmt::layer().with_target(false)).try_init(),
        Profile::Production => registry
            .with(fmt::layer().json().flatten_event(true))
            .try_init(),
        Profile::Test => registry.with(fmt::layer().with_test_writer()).try_init(),
    }
}
