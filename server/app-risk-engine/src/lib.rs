//! App Risk Engine — rule-based fraud scoring for app store listings.
//!
//! A fixed battery of independent heuristics inspects a normalized app record;
//! fired flags are summed into a capped 0–100 score, mapped to a risk tier and
//! returned with a fixed recommendation. No DB, no network; pure computation.

pub mod config;
pub mod engine;
pub mod error;
pub mod keywords;
pub mod logging;
pub mod normalize;
pub mod rules;
pub mod scan;
pub mod score;
pub mod types;

pub use config::Config;
pub use engine::{analyze, analyze_at};
pub use error::EngineError;
pub use normalize::normalize;
pub use scan::scan;
pub use types::{
  AnalysisResult, AppRecord, RawListing, RiskFlag, RiskLevel, ScanReport, ScanRequest, Severity,
  StoreKind,
};
