//! Normalize scraped storefront listings into canonical `AppRecord`s.
//!
//! This is where required fields are enforced; the analysis core assumes a
//! record that passed through here. Malformed optional data is absorbed
//! (dropped to absent) rather than rejected.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::warn;

use crate::config::Config;
use crate::error::EngineError;
use crate::types::*;

/// Normalize against the current instant (used to fill undated reviews).
pub fn normalize(raw: &RawListing, config: &Config) -> Result<AppRecord, EngineError> {
  normalize_at(raw, config, Utc::now())
}

pub fn normalize_at(
  raw: &RawListing,
  config: &Config,
  now: DateTime<Utc>,
) -> Result<AppRecord, EngineError> {
  // Validate required identity fields
  let title = required("title", &raw.title)?;
  let developer = required("developer", &raw.developer)?;
  let url = required("url", &raw.url)?;
  let store_kind = StoreKind::from_str_loose(&raw.store)
    .ok_or_else(|| EngineError::validation("store", "expected google|apple"))?;

  let score = match raw.score {
    Some(s) if s.is_finite() && (0.0..=5.0).contains(&s) => Some(s),
    Some(s) => {
      warn!(%title, score = s, "score outside 0..=5, treating as absent");
      None
    }
    None => None,
  };

  // The Apple scraper often reports 0 ratings; the review count is the better signal there.
  let ratings = raw.ratings.unwrap_or(0);
  let reviews = raw.reviews.unwrap_or(0);
  let ratings_count = match store_kind {
    StoreKind::AppleAppStore => ratings.max(reviews),
    StoreKind::GooglePlay => ratings,
  };

  let price = raw.price.filter(|p| p.is_finite() && *p >= 0.0).unwrap_or(0.0);

  Ok(AppRecord {
    title,
    developer,
    url,
    store_kind,
    score,
    ratings_count,
    reviews_count: reviews,
    min_installs: raw.min_installs,
    max_installs: raw.max_installs,
    installs_label: non_empty(&raw.installs),
    price,
    is_free: raw.free.unwrap_or(price == 0.0),
    has_ads: raw.ad_supported.unwrap_or(false),
    offers_in_app_purchases: raw.offers_iap.unwrap_or(false),
    description: raw.description.clone().unwrap_or_default(),
    short_summary: non_empty(&raw.summary),
    genre: non_empty(&raw.genre).or_else(|| non_empty(&raw.primary_genre)),
    privacy_policy_url: non_empty(&raw.privacy_policy),
    developer_website: non_empty(&raw.developer_website),
    developer_email: non_empty(&raw.developer_email),
    content_rating: non_empty(&raw.content_rating),
    released_at: app_date("released", raw.released.as_ref()),
    last_updated_at: app_date("updated", raw.updated.as_ref()),
    developer_app_count: raw.developer_app_count,
    developer_account_age_days: raw.developer_account_age_days,
    review_sample: review_sample(raw, config.review_sample_limit, now),
    icon_url: non_empty(&raw.icon),
    screenshot_urls: raw
      .screenshots
      .iter()
      .filter(|s| !s.trim().is_empty())
      .cloned()
      .collect(),
  })
}

fn required(field: &str, value: &str) -> Result<String, EngineError> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    return Err(EngineError::validation(field, "must not be empty"));
  }
  Ok(trimmed.to_string())
}

fn non_empty(value: &Option<String>) -> Option<String> {
  value
    .as_deref()
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .map(str::to_string)
}

/// App-level dates: unparseable means absent so date rules stay silent.
fn app_date(field: &str, raw: Option<&RawDate>) -> Option<DateTime<Utc>> {
  let raw = raw?;
  let parsed = parse_date(raw);
  if parsed.is_none() {
    warn!(field, value = ?raw, "unparseable date, treating as absent");
  }
  parsed
}

/// Accepts epoch millis, RFC 3339, naive ISO datetimes, `YYYY-MM-DD`, and
/// storefront display dates such as `Mar 5, 2019` / `March 5, 2019`.
pub fn parse_date(raw: &RawDate) -> Option<DateTime<Utc>> {
  match raw {
    RawDate::Millis(ms) => DateTime::from_timestamp_millis(*ms),
    RawDate::Float(ms) if ms.is_finite() => DateTime::from_timestamp_millis(ms.trunc() as i64),
    RawDate::Float(_) => None,
    RawDate::Text(text) => parse_date_text(text.trim()),
  }
}

fn parse_date_text(s: &str) -> Option<DateTime<Utc>> {
  if s.is_empty() {
    return None;
  }
  if let Ok(ms) = s.parse::<i64>() {
    return DateTime::from_timestamp_millis(ms);
  }
  if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
    return Some(dt.with_timezone(&Utc));
  }
  for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
      return Some(dt.and_utc());
    }
  }
  for fmt in ["%Y-%m-%d", "%b %d, %Y", "%B %d, %Y", "%d %b %Y", "%d %B %Y"] {
    if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
      return d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
  }
  None
}

/// Plain review texts win over structured reviews; undated reviews get `now`.
fn review_sample(raw: &RawListing, limit: usize, now: DateTime<Utc>) -> Vec<ReviewSample> {
  match &raw.reviews_text {
    Some(texts) => texts
      .iter()
      .take(limit)
      .map(|text| ReviewSample {
        author: None,
        score: 0,
        text: text.clone(),
        posted_at: None,
      })
      .collect(),
    None => raw
      .reviews_list
      .iter()
      .take(limit)
      .map(|r| ReviewSample {
        author: non_empty(&r.user_name),
        score: r
          .score
          .filter(|s| s.is_finite())
          .map(|s| s.round().clamp(0.0, 5.0) as u8)
          .unwrap_or(0),
        text: r.text.clone().unwrap_or_default(),
        posted_at: Some(r.date.as_ref().and_then(parse_date).unwrap_or(now)),
      })
      .collect(),
  }
}
