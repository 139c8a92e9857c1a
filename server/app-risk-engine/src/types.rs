//! Core types for the risk engine (JSON contracts + internal models).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Store kind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoreKind {
  #[serde(rename = "google")]
  GooglePlay,
  #[serde(rename = "apple")]
  AppleAppStore,
}

impl StoreKind {
  pub fn from_str_loose(s: &str) -> Option<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "google" | "google_play" | "googleplay" | "play" => Some(Self::GooglePlay),
      "apple" | "apple_app_store" | "appstore" | "ios" => Some(Self::AppleAppStore),
      _ => None,
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::GooglePlay => "google",
      Self::AppleAppStore => "apple",
    }
  }
}

// ---------------------------------------------------------------------------
// Inbound types (JSON contract — what the scraper sends)
// ---------------------------------------------------------------------------

/// One storefront listing as scraped. Unknown fields are silently ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawListing {
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub summary: Option<String>,
  #[serde(default)]
  pub developer: String,
  #[serde(default)]
  pub developer_id: Option<serde_json::Value>,
  #[serde(default)]
  pub icon: Option<String>,
  #[serde(default, deserialize_with = "lenient")]
  pub score: Option<f64>,
  #[serde(default, deserialize_with = "lenient")]
  pub ratings: Option<u64>,
  #[serde(default, deserialize_with = "lenient")]
  pub reviews: Option<u64>,
  #[serde(default)]
  pub installs: Option<String>,
  #[serde(default, deserialize_with = "lenient")]
  pub min_installs: Option<u64>,
  #[serde(default, deserialize_with = "lenient")]
  pub max_installs: Option<u64>,
  #[serde(default, deserialize_with = "lenient")]
  pub price: Option<f64>,
  #[serde(default, deserialize_with = "lenient")]
  pub free: Option<bool>,
  #[serde(default)]
  pub genre: Option<String>,
  #[serde(default)]
  pub primary_genre: Option<String>,
  #[serde(default)]
  pub url: String,
  #[serde(default, deserialize_with = "lenient")]
  pub released: Option<RawDate>,
  #[serde(default, deserialize_with = "lenient")]
  pub updated: Option<RawDate>,
  #[serde(default)]
  pub privacy_policy: Option<String>,
  #[serde(default)]
  pub developer_website: Option<String>,
  #[serde(default)]
  pub developer_email: Option<String>,
  #[serde(default)]
  pub content_rating: Option<String>,
  #[serde(default, deserialize_with = "lenient")]
  pub ad_supported: Option<bool>,
  #[serde(default, rename = "offersIAP", deserialize_with = "lenient")]
  pub offers_iap: Option<bool>,
  #[serde(default)]
  pub store: String,
  #[serde(default)]
  pub screenshots: Vec<String>,
  #[serde(default)]
  pub reviews_list: Vec<RawReview>,
  #[serde(default)]
  pub reviews_text: Option<Vec<String>>,
  #[serde(default, deserialize_with = "lenient")]
  pub developer_app_count: Option<u32>,
  #[serde(default, deserialize_with = "lenient")]
  pub developer_account_age_days: Option<i64>,
}

/// Scrapers hand dates over either as display strings or epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawDate {
  Millis(i64),
  Float(f64),
  Text(String),
}

/// Optional scraped value whose type may be off (`"score": "4.5"`): a value
/// that does not fit the field's type is absorbed as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
  D: serde::Deserializer<'de>,
  T: serde::de::DeserializeOwned,
{
  let value = serde_json::Value::deserialize(deserializer)?;
  Ok(serde_json::from_value(value).ok())
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReview {
  #[serde(default)]
  pub id: Option<serde_json::Value>,
  #[serde(default)]
  pub user_name: Option<String>,
  #[serde(default, deserialize_with = "lenient")]
  pub score: Option<f64>,
  #[serde(default)]
  pub title: Option<String>,
  #[serde(default)]
  pub text: Option<String>,
  #[serde(default, deserialize_with = "lenient")]
  pub date: Option<RawDate>,
}

// ---------------------------------------------------------------------------
// Normalized record (engine input)
// ---------------------------------------------------------------------------

/// One sampled user review, most-recent first in `AppRecord::review_sample`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSample {
  #[serde(default)]
  pub author: Option<String>,
  #[serde(default)]
  pub score: u8,
  pub text: String,
  #[serde(default)]
  pub posted_at: Option<DateTime<Utc>>,
}

/// Canonical app record after normalization. Absent optional fields stay `None`
/// so "unknown" is never read as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppRecord {
  pub title: String,
  pub developer: String,
  pub url: String,
  pub store_kind: StoreKind,

  #[serde(default)]
  pub score: Option<f64>,
  #[serde(default)]
  pub ratings_count: u64,
  #[serde(default)]
  pub reviews_count: u64,
  #[serde(default)]
  pub min_installs: Option<u64>,
  #[serde(default)]
  pub max_installs: Option<u64>,
  #[serde(default)]
  pub installs_label: Option<String>,

  #[serde(default)]
  pub price: f64,
  #[serde(default)]
  pub is_free: bool,
  #[serde(default)]
  pub has_ads: bool,
  #[serde(default)]
  pub offers_in_app_purchases: bool,

  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub short_summary: Option<String>,
  #[serde(default)]
  pub genre: Option<String>,

  #[serde(default)]
  pub privacy_policy_url: Option<String>,
  #[serde(default)]
  pub developer_website: Option<String>,
  #[serde(default)]
  pub developer_email: Option<String>,
  #[serde(default)]
  pub content_rating: Option<String>,

  #[serde(default)]
  pub released_at: Option<DateTime<Utc>>,
  #[serde(default)]
  pub last_updated_at: Option<DateTime<Utc>>,

  #[serde(default)]
  pub developer_app_count: Option<u32>,
  #[serde(default)]
  pub developer_account_age_days: Option<i64>,

  #[serde(default)]
  pub review_sample: Vec<ReviewSample>,

  #[serde(default)]
  pub icon_url: Option<String>,
  #[serde(default)]
  pub screenshot_urls: Vec<String>,
}

impl AppRecord {
  /// Minimal record with only the required identity fields set.
  pub fn new(
    title: impl Into<String>,
    developer: impl Into<String>,
    url: impl Into<String>,
    store_kind: StoreKind,
  ) -> Self {
    Self {
      title: title.into(),
      developer: developer.into(),
      url: url.into(),
      store_kind,
      score: None,
      ratings_count: 0,
      reviews_count: 0,
      min_installs: None,
      max_installs: None,
      installs_label: None,
      price: 0.0,
      is_free: true,
      has_ads: false,
      offers_in_app_purchases: false,
      description: String::new(),
      short_summary: None,
      genre: None,
      privacy_policy_url: None,
      developer_website: None,
      developer_email: None,
      content_rating: None,
      released_at: None,
      last_updated_at: None,
      developer_app_count: None,
      developer_account_age_days: None,
      review_sample: Vec::new(),
      icon_url: None,
      screenshot_urls: Vec::new(),
    }
  }

  pub fn is_google(&self) -> bool {
    self.store_kind == StoreKind::GooglePlay
  }

  pub fn is_apple(&self) -> bool {
    self.store_kind == StoreKind::AppleAppStore
  }
}

// ---------------------------------------------------------------------------
// Severity + risk level
// ---------------------------------------------------------------------------

/// Flag severity. Declaration order is the sort order: critical first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
  Critical,
  High,
  Medium,
  Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
  Safe,
  Low,
  Medium,
  High,
  Critical,
}

impl RiskLevel {
  /// Bands are inclusive on their upper bound: 20 is safe, 21 is low.
  pub fn from_score(score: u8) -> Self {
    match score {
      0..=20 => Self::Safe,
      21..=40 => Self::Low,
      41..=60 => Self::Medium,
      61..=80 => Self::High,
      _ => Self::Critical,
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Safe => "safe",
      Self::Low => "low",
      Self::Medium => "medium",
      Self::High => "high",
      Self::Critical => "critical",
    }
  }
}

// ---------------------------------------------------------------------------
// Output types (JSON contract — what we emit)
// ---------------------------------------------------------------------------

/// One triggered heuristic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskFlag {
  pub id: &'static str,
  pub label: &'static str,
  pub description: String,
  pub severity: Severity,
  pub points: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
  pub app_info: AppRecord,
  pub risk_score: u8,
  pub risk_level: RiskLevel,
  pub flags: Vec<RiskFlag>,
  pub recommendation: String,
  pub analyzed_at: DateTime<Utc>,
}

impl AnalysisResult {
  pub fn has_flag(&self, id: &str) -> bool {
    self.flags.iter().any(|f| f.id == id)
  }

  pub fn flag(&self, id: &str) -> Option<&RiskFlag> {
    self.flags.iter().find(|f| f.id == id)
  }
}

// ---------------------------------------------------------------------------
// Bulk scan
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRequest {
  #[serde(default)]
  pub term: String,
  #[serde(default)]
  pub store: String,
  #[serde(default)]
  pub limit: Option<i64>,
  /// Kept untyped so one malformed listing cannot fail the whole request.
  #[serde(default)]
  pub listings: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
  pub term: String,
  pub store: StoreKind,
  /// Apps at or above the flagged threshold.
  pub count: usize,
  pub analyzed: usize,
  pub skipped: usize,
  pub apps: Vec<AnalysisResult>,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for invalid input lines.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}
