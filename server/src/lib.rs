mod config;
mod qr_api;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use types::SiteLinks;

pub use crate::config::{CONFIG, Config};
pub use crate::qr_api::{QR_API, QrApiClient};

/// Install the fmt subscriber. `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());

    // Ignore the error if a subscriber is already set (e.g. by the dioxus launcher).
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Resolve configuration up front so a bad environment fails at startup
/// rather than on the first request.
pub fn init() {
    let config = &*CONFIG;
    tracing::info!(
        api_base = %config.api_base,
        validation_base = %config.validation_base,
        "registration dashboard configured"
    );
}

pub fn site_links() -> SiteLinks {
    SiteLinks::new(CONFIG.validation_base.clone())
}
