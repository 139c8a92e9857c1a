//! Bulk scan: analyze every listing returned for one search and rank by risk.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{info, warn};

use crate::config::Config;
use crate::engine;
use crate::error::EngineError;
use crate::normalize;
use crate::types::{RawListing, ScanReport, ScanRequest, StoreKind};

pub fn scan(request: &ScanRequest, config: &Config) -> Result<ScanReport, EngineError> {
  scan_at(request, config, Utc::now())
}

/// Listings that fail normalization or belong to another store are skipped, never fatal.
pub fn scan_at(
  request: &ScanRequest,
  config: &Config,
  now: DateTime<Utc>,
) -> Result<ScanReport, EngineError> {
  let term = request.term.trim();
  if term.is_empty() {
    return Err(EngineError::validation("term", "must not be empty"));
  }
  let store = StoreKind::from_str_loose(&request.store)
    .ok_or_else(|| EngineError::validation("store", "expected google|apple"))?;
  let limit = config.scan_limit(request.limit);

  let mut apps = Vec::new();
  let mut skipped = 0;
  for (idx, value) in request.listings.iter().take(limit).enumerate() {
    let parsed = RawListing::deserialize(value)
      .map_err(EngineError::from)
      .and_then(|raw| normalize::normalize_at(&raw, config, now));
    let record = match parsed {
      Ok(r) => r,
      Err(e) => {
        warn!(term, index = idx, error = %e, "skipping listing");
        skipped += 1;
        continue;
      }
    };
    if record.store_kind != store {
      warn!(
        term,
        index = idx,
        store = record.store_kind.as_str(),
        "skipping listing from other store"
      );
      skipped += 1;
      continue;
    }
    apps.push(engine::analyze_at(record, now));
  }

  // Highest risk first; stable so equal scores keep search order.
  apps.sort_by(|a, b| b.risk_score.cmp(&a.risk_score));

  let count = apps
    .iter()
    .filter(|a| a.risk_score >= config.flagged_threshold)
    .count();

  info!(
    term,
    store = store.as_str(),
    analyzed = apps.len(),
    flagged = count,
    skipped,
    "scan complete"
  );

  Ok(ScanReport {
    term: term.to_string(),
    store,
    count,
    analyzed: apps.len(),
    skipped,
    apps,
  })
}
