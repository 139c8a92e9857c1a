//! Analysis entry points: record in, assessment out. Stateless and total.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::rules::{self, RuleContext};
use crate::score;
use crate::types::{AnalysisResult, AppRecord, RiskLevel};

/// Analyze a record against the current instant.
pub fn analyze(record: AppRecord) -> AnalysisResult {
  analyze_at(record, Utc::now())
}

/// Analyze a record as of `now`. Identical inputs give identical results.
pub fn analyze_at(record: AppRecord, now: DateTime<Utc>) -> AnalysisResult {
  let ctx = RuleContext::at(now);
  let mut flags = rules::evaluate(&record, &ctx);

  let risk_score = score::compute_risk_score(&flags);
  let risk_level = RiskLevel::from_score(risk_score);
  score::sort_by_severity(&mut flags);

  debug!(
    title = %record.title,
    store = record.store_kind.as_str(),
    risk_score,
    risk_level = risk_level.as_str(),
    flags = ?flags.iter().map(|f| f.id).collect::<Vec<_>>(),
    "analyzed app"
  );

  AnalysisResult {
    app_info: record,
    risk_score,
    risk_level,
    flags,
    recommendation: score::recommendation(risk_level).to_string(),
    analyzed_at: now,
  }
}
