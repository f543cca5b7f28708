//! Clinicore — core engine of a single-clinic dental practice manager.
//!
//! Three subsystems do the real work: the protocol resolver maps a
//! diagnosed condition and a treatment tier to its recommended medication
//! bundle; the prescription safety checker evaluates a candidate medication
//! list against a patient's medical profile; and the currency service keeps
//! the single USD→PKR rate every price derives from. Everything else
//! (forms, navigation, PDF output) lives in the surrounding application and
//! calls in through these APIs.

pub mod catalog;
pub mod config;
pub mod currency;
pub mod db;
pub mod models;
pub mod safety;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the host process. Call once at startup.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
}
