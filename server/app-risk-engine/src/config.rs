//! Engine configuration with sane defaults.
//!
//! Rule thresholds are fixed in `rules`; only boundary and batch settings live here.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
  /// Max reviews kept in a record's review sample.
  pub review_sample_limit: usize,
  /// Listings analyzed per scan when the request gives no limit.
  pub scan_default_limit: usize,
  /// Upper clamp for a scan's requested limit.
  pub scan_max_limit: usize,
  /// Scan apps at or above this score count as flagged.
  pub flagged_threshold: u8,
  /// Fallback tracing filter when RUST_LOG is unset.
  pub log_level: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      review_sample_limit: 5,
      scan_default_limit: 20,
      scan_max_limit: 100,
      flagged_threshold: 40,
      log_level: "warn".into(),
    }
  }
}

impl Config {
  /// Defaults overridden by `APP_RISK_*` variables; bad values keep the default.
  pub fn from_env() -> Self {
    let mut cfg = Self::default();
    if let Some(v) = parse_var("APP_RISK_REVIEW_SAMPLE") {
      cfg.review_sample_limit = v;
    }
    if let Some(v) = parse_var("APP_RISK_SCAN_LIMIT") {
      cfg.scan_default_limit = v;
    }
    if let Some(v) = parse_var("APP_RISK_FLAGGED_AT") {
      cfg.flagged_threshold = v;
    }
    if let Ok(v) = env::var("APP_RISK_LOG") {
      if !v.trim().is_empty() {
        cfg.log_level = v;
      }
    }
    cfg.scan_default_limit = cfg.scan_default_limit.clamp(1, cfg.scan_max_limit);
    cfg
  }

  /// Clamp a requested scan size to `1..=scan_max_limit`.
  pub fn scan_limit(&self, requested: Option<i64>) -> usize {
    match requested {
      Some(n) => n.clamp(1, self.scan_max_limit as i64) as usize,
      None => self.scan_default_limit,
    }
  }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
  env::var(name).ok()?.trim().parse().ok()
}
