use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Clinicore";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Third-party exchange-rate endpoint. Unauthenticated, best-effort;
/// response shape is `{"rates": {"PKR": <number>, ...}}`.
pub const EXCHANGE_API_URL: &str = "https://api.exchangerate-api.com/v4/latest/USD";

/// PKR-per-USD fallback used before any fetch or persisted rate exists.
pub const DEFAULT_RATE_PKR: f64 = 278.0;

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "clinicore=info"
}

/// Get the application data directory
/// ~/Clinicore/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Clinicore")
}

/// Path of the clinic record database.
pub fn database_path() -> PathBuf {
    app_data_dir().join("clinic.db")
}
