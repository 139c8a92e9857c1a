//! Risk score, tier, flag ordering, and the per-tier recommendation.

use crate::types::{RiskFlag, RiskLevel};

pub const MAX_RISK_SCORE: u8 = 100;

/// Risk 0–100: sum of every fired flag's points (no dedup), capped.
pub fn compute_risk_score(flags: &[RiskFlag]) -> u8 {
  let total: u32 = flags.iter().map(|f| u32::from(f.points)).sum();
  total.min(u32::from(MAX_RISK_SCORE)) as u8
}

/// Stable sort: critical, high, medium, low; ties keep rule order.
pub fn sort_by_severity(flags: &mut [RiskFlag]) {
  flags.sort_by_key(|f| f.severity);
}

/// Fixed advice per tier; flags are not summarized into the text.
pub fn recommendation(level: RiskLevel) -> &'static str {
  match level {
    RiskLevel::Safe => "This app appears legitimate based on our analysis. It passed most of our security checks and shows signs of being a well-maintained application. You can proceed with installation with confidence.",
    RiskLevel::Low => "This app has a few minor concerns but is likely safe. We recommend reviewing the flagged items below before installing. Overall, the app appears to be legitimate.",
    RiskLevel::Medium => "This app has raised several concerns during our analysis. We recommend proceeding with caution. Review the detailed flags below carefully and consider if you really need this app before installing.",
    RiskLevel::High => "This app shows strong indicators of being potentially fraudulent or unsafe. We strongly recommend NOT installing this app. The multiple red flags suggest it may be a scam, contain malware, or misrepresent its functionality.",
    RiskLevel::Critical => "⚠️ This app is almost certainly fake or malicious. DO NOT install this app. It has failed nearly all of our security checks and shows overwhelming signs of fraud. Report this app to the store if possible.",
  }
}
