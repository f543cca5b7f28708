use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Utc};
use rusqlite::Connection;
use serde::Serialize;
use thiserror::Error;

use crate::catalog::Treatment;
use crate::config::DEFAULT_RATE_PKR;
use crate::db::repository::settings::{get_setting, put_setting};
use crate::db::DatabaseError;
use crate::models::enums::RateProvenance;

use super::source::{RateSource, RateSourceError};

/// Settings-store keys for the persisted rate triple.
const KEY_RATE: &str = "exchangeRate";
const KEY_UPDATED: &str = "exchangeRateUpdated";
const KEY_MANUAL: &str = "exchangeRateManual";

/// A cached rate older than this is refetched on the next read.
const STALENESS_WINDOW_SECS: i64 = 60 * 60;

#[derive(Debug, Error)]
pub enum CurrencyError {
    #[error("Exchange rate must be a positive finite number, got {0}")]
    InvalidRate(f64),

    #[error("Settings store error: {0}")]
    Database(#[from] DatabaseError),
}

/// Point-in-time view of the rate state, for settings screens.
#[derive(Debug, Clone, Serialize)]
pub struct RateSnapshot {
    pub rate: f64,
    pub last_update: Option<DateTime<Utc>>,
    pub provenance: RateProvenance,
}

struct RateState {
    rate: f64,
    last_update: Option<DateTime<Utc>>,
    provenance: RateProvenance,
}

/// The single authoritative USD→PKR rate.
///
/// Every monetary figure in the application derives from this value at the
/// moment of computation; components must not cache their own copy beyond
/// one computation. The rate source is injected so tests never touch the
/// network, and persistence goes through the settings store.
pub struct CurrencyService {
    source: Box<dyn RateSource + Send + Sync>,
    state: RwLock<RateState>,
}

impl CurrencyService {
    pub fn new(source: Box<dyn RateSource + Send + Sync>) -> Self {
        Self {
            source,
            state: RwLock::new(RateState {
                rate: DEFAULT_RATE_PKR,
                last_update: None,
                provenance: RateProvenance::Auto,
            }),
        }
    }

    /// Service backed by the live exchange endpoint.
    pub fn with_live_source() -> Self {
        Self::new(Box::new(super::source::HttpRateSource::default_source()))
    }

    /// Load the persisted rate/timestamp/manual triple, then apply the
    /// staleness check once. Call at process start.
    pub fn initialize(&self, conn: &Connection) -> Result<f64, CurrencyError> {
        let persisted_rate = get_setting(conn, KEY_RATE)?
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|r| r.is_finite() && *r > 0.0);
        let persisted_update = get_setting(conn, KEY_UPDATED)?
            .and_then(|v| DateTime::parse_from_rfc3339(&v).ok())
            .map(|t| t.with_timezone(&Utc));
        let manual = get_setting(conn, KEY_MANUAL)?.as_deref() == Some("true");

        {
            let mut state = self.write_state();
            if let Some(rate) = persisted_rate {
                state.rate = rate;
            }
            state.last_update = persisted_update;
            state.provenance = if manual {
                RateProvenance::Manual
            } else {
                RateProvenance::Auto
            };
        }

        Ok(self.get_rate(conn, false))
    }

    /// Fetch from the live source. On success the in-memory rate and
    /// timestamp are updated and persisted. On any failure the last value
    /// stands (reloading the persisted rate if one exists); this never
    /// fails and always returns a usable positive rate.
    pub fn fetch_live_rate(&self, conn: &Connection) -> f64 {
        match self.source.fetch_usd_to_pkr() {
            Ok(rate) => {
                let now = Utc::now();
                {
                    let mut state = self.write_state();
                    state.rate = rate;
                    state.last_update = Some(now);
                }
                self.persist_rate(conn, rate, now);
                tracing::info!(rate, "Exchange rate updated: $1 = Rs. {rate}");
                rate
            }
            Err(e) => {
                tracing::warn!(error = %e, "Exchange rate fetch failed, using cached rate");
                self.reload_persisted_rate(conn);
                self.read_state().rate
            }
        }
    }

    /// Current rate, refreshing first when forced, never fetched, or stale.
    /// Manual rates are pinned: the staleness check never refetches over a
    /// manual override. `reset_to_auto` resumes live fetching.
    pub fn get_rate(&self, conn: &Connection, force_refresh: bool) -> f64 {
        let (rate, last_update, provenance) = {
            let state = self.read_state();
            (state.rate, state.last_update, state.provenance.clone())
        };

        if provenance == RateProvenance::Manual {
            return rate;
        }

        let stale = match last_update {
            None => true,
            Some(t) => (Utc::now() - t).num_seconds() > STALENESS_WINDOW_SECS,
        };

        if force_refresh || stale {
            return self.fetch_live_rate(conn);
        }
        rate
    }

    /// USD → whole-rupee amount.
    pub fn convert_to_pkr(&self, conn: &Connection, usd: f64) -> i64 {
        (usd * self.get_rate(conn, false)).round() as i64
    }

    /// PKR → USD, rounded to 2 decimals.
    pub fn convert_to_usd(&self, conn: &Connection, pkr: f64) -> f64 {
        let rate = self.get_rate(conn, false);
        (pkr / rate * 100.0).round() / 100.0
    }

    /// Rupee price of a catalog treatment at the current rate.
    pub fn price_treatment(&self, conn: &Connection, treatment: &Treatment) -> i64 {
        self.convert_to_pkr(conn, treatment.price_usd)
    }

    /// Override the rate by hand. Manual rates persist with a manual flag
    /// and are exempt from staleness refresh until `reset_to_auto`.
    pub fn set_manual_rate(&self, conn: &Connection, rate: f64) -> Result<f64, CurrencyError> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(CurrencyError::InvalidRate(rate));
        }

        let now = Utc::now();
        {
            let mut state = self.write_state();
            state.rate = rate;
            state.last_update = Some(now);
            state.provenance = RateProvenance::Manual;
        }

        put_setting(conn, KEY_RATE, &rate.to_string())?;
        put_setting(conn, KEY_UPDATED, &now.to_rfc3339())?;
        put_setting(conn, KEY_MANUAL, "true")?;

        tracing::info!(rate, "Manual exchange rate set: $1 = Rs. {rate}");
        Ok(rate)
    }

    /// Clear the manual override and fetch a fresh live rate.
    pub fn reset_to_auto(&self, conn: &Connection) -> Result<f64, CurrencyError> {
        self.write_state().provenance = RateProvenance::Auto;
        put_setting(conn, KEY_MANUAL, "false")?;
        Ok(self.fetch_live_rate(conn))
    }

    /// Current state for display.
    pub fn snapshot(&self) -> RateSnapshot {
        let state = self.read_state();
        RateSnapshot {
            rate: state.rate,
            last_update: state.last_update,
            provenance: state.provenance.clone(),
        }
    }

    // ── Internal ────────────────────────────────────────────

    fn persist_rate(&self, conn: &Connection, rate: f64, updated: DateTime<Utc>) {
        // Persistence failures downgrade to a warning: the in-memory rate
        // is already correct, and pricing must not fail over bookkeeping.
        if let Err(e) = put_setting(conn, KEY_RATE, &rate.to_string())
            .and_then(|_| put_setting(conn, KEY_UPDATED, &updated.to_rfc3339()))
        {
            tracing::warn!(error = %e, "Failed to persist exchange rate");
        }
    }

    fn reload_persisted_rate(&self, conn: &Connection) {
        let cached = match get_setting(conn, KEY_RATE) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read cached exchange rate");
                return;
            }
        };
        if let Some(rate) = cached
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|r| r.is_finite() && *r > 0.0)
        {
            self.write_state().rate = rate;
        }
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, RateState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, RateState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
