//! USD→PKR exchange-rate service.
//!
//! One process-wide rate prices every treatment, invoice, and catalog
//! display. The rate is fetched from a third-party endpoint, cached with a
//! one-hour staleness window, persisted through the settings store, and can
//! be pinned by a manual override. Fetch failures always fall back to the
//! last known good rate, so pricing never hard-fails.

pub mod service;
pub mod source;

pub use service::{CurrencyError, CurrencyService, RateSnapshot};
pub use source::{HttpRateSource, RateSource, RateSourceError};
