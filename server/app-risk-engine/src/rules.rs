//! Heuristic rule catalogue.
//!
//! Each rule is a pure function of the record and the evaluation instant. Rules
//! never see each other's output, so evaluation order only affects the initial
//! flag order (the aggregator re-sorts by severity).

use chrono::{DateTime, Utc};

use crate::keywords::{self, *};
use crate::types::{AppRecord, RiskFlag, Severity};

/// Per-call evaluation context.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext {
  pub now: DateTime<Utc>,
}

impl RuleContext {
  pub fn at(now: DateTime<Utc>) -> Self {
    Self { now }
  }

  /// Whole days elapsed since `then` (floored; negative for future dates).
  fn days_since(&self, then: DateTime<Utc>) -> i64 {
    (self.now - then).num_milliseconds().div_euclid(86_400_000)
  }
}

pub type RuleFn = fn(&AppRecord, &RuleContext) -> Option<RiskFlag>;

#[derive(Clone, Copy)]
pub struct Rule {
  pub name: &'static str,
  pub check: RuleFn,
}

impl std::fmt::Debug for Rule {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Rule").field("name", &self.name).finish()
  }
}

/// Every rule, in evaluation order.
pub const RULES: &[Rule] = &[
  Rule { name: "low_rating", check: low_rating },
  Rule { name: "few_ratings", check: few_ratings },
  Rule { name: "very_few_ratings", check: very_few_ratings },
  Rule { name: "very_new", check: very_new },
  Rule { name: "no_dev_website", check: no_dev_website },
  Rule { name: "short_description", check: short_description },
  Rule { name: "no_privacy_policy", check: no_privacy_policy },
  Rule { name: "suspicious_title", check: suspicious_title },
  Rule { name: "suspicious_description", check: suspicious_description },
  Rule { name: "aggressive_monetization", check: aggressive_monetization },
  Rule { name: "no_dev_email", check: no_dev_email },
  Rule { name: "clone_indicator", check: clone_indicator },
  Rule { name: "very_low_installs", check: very_low_installs },
  Rule { name: "fake_high_rating", check: fake_high_rating },
  Rule { name: "suspicious_developer", check: suspicious_developer },
  Rule { name: "not_updated_recently", check: not_updated_recently },
  Rule { name: "fake_install_inflation", check: fake_install_inflation },
  Rule { name: "impersonation", check: impersonation },
  Rule { name: "brand_impersonation", check: brand_impersonation },
  Rule { name: "rating_manipulation", check: rating_manipulation },
  Rule { name: "loan_fraud", check: loan_fraud },
  Rule { name: "low_dev_reputation", check: low_dev_reputation },
  Rule { name: "fraud_reviews_detected", check: fraud_reviews },
  Rule { name: "update_age", check: update_age },
];

/// Run every rule against the record; no short-circuiting.
pub fn evaluate(record: &AppRecord, ctx: &RuleContext) -> Vec<RiskFlag> {
  RULES.iter().filter_map(|rule| (rule.check)(record, ctx)).collect()
}

fn flag(
  id: &'static str,
  label: &'static str,
  severity: Severity,
  points: u8,
  description: String,
) -> Option<RiskFlag> {
  Some(RiskFlag {
    id,
    label,
    description,
    severity,
    points,
  })
}

/// Optional text counts as present only when non-empty.
fn present(field: &Option<String>) -> bool {
  field.as_deref().is_some_and(|s| !s.is_empty())
}

/// `1234567` -> `"1,234,567"`.
fn group_thousands(n: u64) -> String {
  let digits = n.to_string();
  let mut out = String::with_capacity(digits.len() + digits.len() / 3);
  for (i, ch) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      out.push(',');
    }
    out.push(ch);
  }
  out
}

fn quoted(words: &[&str]) -> String {
  words.join("\", \"")
}

fn installs_display(record: &AppRecord, min_installs: u64) -> String {
  match record.installs_label.as_deref() {
    Some(label) if !label.is_empty() => label.to_string(),
    _ => group_thousands(min_installs),
  }
}

// ---------------------------------------------------------------------------
// Reputation
// ---------------------------------------------------------------------------

pub fn low_rating(record: &AppRecord, _ctx: &RuleContext) -> Option<RiskFlag> {
  let score = record.score?;
  if score >= 3.0 {
    return None;
  }
  let (severity, points) = if score < 2.0 {
    (Severity::High, 20)
  } else {
    (Severity::Medium, 15)
  };
  flag(
    "low_rating",
    "Very Low Rating",
    severity,
    points,
    format!(
      "The app is rated {:.1}/5.0, well below average. Legitimate apps usually hold ratings above 3.5.",
      score
    ),
  )
}

pub fn few_ratings(record: &AppRecord, _ctx: &RuleContext) -> Option<RiskFlag> {
  if !record.is_google() {
    return None;
  }
  let min_installs = record.min_installs?;
  if min_installs <= 10_000 {
    return None;
  }
  let ratio = record.ratings_count as f64 / min_installs as f64;
  if ratio >= 0.01 {
    return None;
  }
  flag(
    "few_ratings",
    "Suspiciously Few Ratings",
    Severity::Medium,
    10,
    format!(
      "With {} installs but only {} ratings, engagement is unusually low (<1%). This can point to fake or incentivized installs.",
      installs_display(record, min_installs),
      group_thousands(record.ratings_count)
    ),
  )
}

pub fn very_few_ratings(record: &AppRecord, _ctx: &RuleContext) -> Option<RiskFlag> {
  if record.score.is_none() || record.ratings_count >= 10 {
    return None;
  }
  flag(
    "very_few_ratings",
    "Very Few Ratings",
    Severity::Low,
    5,
    format!(
      "The app has only {} ratings, too few to judge its real quality. Be careful with apps that have almost no user feedback.",
      record.ratings_count
    ),
  )
}

pub fn very_low_installs(record: &AppRecord, _ctx: &RuleContext) -> Option<RiskFlag> {
  let min_installs = record.min_installs?;
  if min_installs >= 1_000 {
    return None;
  }
  flag(
    "very_low_installs",
    "Very Low Install Count",
    Severity::Medium,
    10,
    format!(
      "This app has fewer than 1,000 installs ({}). Apps this small lack community validation and are harder to vet.",
      group_thousands(min_installs)
    ),
  )
}

pub fn fake_high_rating(record: &AppRecord, _ctx: &RuleContext) -> Option<RiskFlag> {
  let score = record.score?;
  if score < 4.8 || record.ratings_count >= 50 {
    return None;
  }
  flag(
    "fake_high_rating",
    "Suspiciously High Rating with Few Ratings",
    Severity::High,
    15,
    format!(
      "This app has a near-perfect rating of {:.1} from only {} ratings. Apps with so few ratings rarely hold scores above 4.8 without manipulation.",
      score, record.ratings_count
    ),
  )
}

pub fn fake_install_inflation(record: &AppRecord, _ctx: &RuleContext) -> Option<RiskFlag> {
  let min_installs = record.min_installs?;
  if min_installs < 100_000 || record.ratings_count >= 100 {
    return None;
  }
  flag(
    "fake_install_inflation",
    "Extremely Low Ratings for High Installs",
    Severity::High,
    15,
    format!(
      "This app claims {} installs but has only {} ratings. Organic apps with 100K+ installs do not show engagement this low; the install count is likely inflated.",
      installs_display(record, min_installs),
      record.ratings_count
    ),
  )
}

pub fn rating_manipulation(record: &AppRecord, _ctx: &RuleContext) -> Option<RiskFlag> {
  let score = record.score?;
  let ratings = record.ratings_count;
  let installs = record.min_installs;

  let mut reasons = Vec::new();
  if score >= 4.8 && ratings < 50 {
    reasons.push(format!(
      "near-perfect rating ({:.1}) with only {} ratings",
      score, ratings
    ));
  }
  if installs.is_some_and(|m| m >= 100_000) && ratings < 100 {
    reasons.push(format!("100K+ installs but only {} ratings", ratings));
  }
  if installs.is_some_and(|m| m >= 1_000_000) && ratings < 500 {
    reasons.push(format!("1M+ installs but only {} ratings", ratings));
  }
  if reasons.is_empty() {
    return None;
  }
  flag(
    "rating_manipulation",
    "Rating Manipulation Suspected",
    Severity::High,
    20,
    format!(
      "Signals of rating manipulation: {}. These patterns are statistically improbable for organic growth.",
      reasons.join("; ")
    ),
  )
}

// ---------------------------------------------------------------------------
// Trust + content
// ---------------------------------------------------------------------------

pub fn no_dev_website(record: &AppRecord, _ctx: &RuleContext) -> Option<RiskFlag> {
  if !record.is_google() || present(&record.developer_website) {
    return None;
  }
  flag(
    "no_dev_website",
    "No Developer Website",
    Severity::Medium,
    10,
    "The developer lists no website. Established developers normally have a verifiable online presence.".into(),
  )
}

pub fn no_dev_email(record: &AppRecord, _ctx: &RuleContext) -> Option<RiskFlag> {
  if !record.is_google() || present(&record.developer_email) {
    return None;
  }
  flag(
    "no_dev_email",
    "No Developer Contact Email",
    Severity::Low,
    5,
    "The developer lists no contact email, so there is no way to reach them for support or to report problems.".into(),
  )
}

/// Apple listings never expose a policy URL through the scraper, so they are exempt.
pub fn no_privacy_policy(record: &AppRecord, _ctx: &RuleContext) -> Option<RiskFlag> {
  if record.is_apple() || present(&record.privacy_policy_url) {
    return None;
  }
  flag(
    "no_privacy_policy",
    "No Privacy Policy",
    Severity::High,
    15,
    "This app links to no privacy policy although the store requires one. Its absence is a significant red flag for data handling.".into(),
  )
}

pub fn short_description(record: &AppRecord, _ctx: &RuleContext) -> Option<RiskFlag> {
  let len = record.description.chars().count();
  if len >= 100 {
    return None;
  }
  flag(
    "short_description",
    "Generic/Short Description",
    Severity::Medium,
    10,
    format!(
      "The description is unusually short ({} characters). Legitimate apps usually explain their features in detail.",
      len
    ),
  )
}

pub fn suspicious_title(record: &AppRecord, _ctx: &RuleContext) -> Option<RiskFlag> {
  let found = keywords::matches_in(&record.title.to_lowercase(), SUSPICIOUS_KEYWORDS);
  if found.is_empty() {
    return None;
  }
  flag(
    "suspicious_title",
    "Suspicious Keywords in Title",
    Severity::High,
    15,
    format!(
      "The title contains suspicious keywords: \"{}\". Apps using these terms often distribute fraudulent or malicious content.",
      quoted(&found)
    ),
  )
}

pub fn suspicious_description(record: &AppRecord, _ctx: &RuleContext) -> Option<RiskFlag> {
  let found = keywords::matches_in(&record.description.to_lowercase(), SUSPICIOUS_KEYWORDS);
  if found.len() < 2 {
    return None;
  }
  let shown = &found[..found.len().min(3)];
  flag(
    "suspicious_description",
    "Suspicious Claims in Description",
    Severity::High,
    10,
    format!(
      "The description contains several suspicious keywords: \"{}\". Claims like these are typical of fraudulent apps.",
      quoted(shown)
    ),
  )
}

pub fn aggressive_monetization(record: &AppRecord, _ctx: &RuleContext) -> Option<RiskFlag> {
  if !(record.is_free && record.has_ads && record.offers_in_app_purchases) {
    return None;
  }
  flag(
    "aggressive_monetization",
    "Aggressive Monetization",
    Severity::Low,
    5,
    "This free app shows ads AND sells in-app purchases. Not malicious by itself, but the pattern is common among low-quality and scam apps.".into(),
  )
}

pub fn clone_indicator(record: &AppRecord, _ctx: &RuleContext) -> Option<RiskFlag> {
  let title = record.title.to_lowercase();
  if !CLONE_PATTERNS.iter().any(|re| re.is_match(&title)) {
    return None;
  }
  flag(
    "clone_indicator",
    "Potential Clone/Copycat App",
    Severity::High,
    15,
    "The title suggests an unofficial copycat or companion for a popular game or service. Such apps often carry ads or malware, or simply do not work.".into(),
  )
}

pub fn suspicious_developer(record: &AppRecord, _ctx: &RuleContext) -> Option<RiskFlag> {
  let found = keywords::matches_in(&record.developer.to_lowercase(), SUSPICIOUS_DEV_KEYWORDS);
  if found.is_empty() {
    return None;
  }
  flag(
    "suspicious_developer",
    "Suspicious Developer Name",
    Severity::High,
    15,
    format!(
      "The developer name \"{}\" contains suspicious keywords: \"{}\". Scam publishers often pick generic or misleading names.",
      record.developer,
      quoted(&found)
    ),
  )
}

// ---------------------------------------------------------------------------
// Impersonation
// ---------------------------------------------------------------------------

pub fn impersonation(record: &AppRecord, _ctx: &RuleContext) -> Option<RiskFlag> {
  let title = record.title.to_lowercase();
  let brand = IMPERSONATION_TARGETS.iter().find(|b| title.contains(*b))?;
  if keywords::contains_any(&title, COMPANION_KEYWORDS) {
    return None;
  }
  if record.min_installs.is_some_and(|m| m >= 100_000) {
    return None;
  }
  if !keywords::contains_any(&title, DANGEROUS_MODIFIERS) {
    return None;
  }
  flag(
    "impersonation",
    "Potential Brand Impersonation",
    Severity::Critical,
    20,
    format!(
      "The title references \"{}\" together with hack/mod style modifiers, a common way to pass off malware or adware as a well-known brand.",
      brand
    ),
  )
}

pub fn brand_impersonation(record: &AppRecord, _ctx: &RuleContext) -> Option<RiskFlag> {
  let title = record.title.to_lowercase();
  let developer = record.developer.to_lowercase();

  // Exclusions that hold for every brand.
  if keywords::contains_any(&title, COMPANION_KEYWORDS) {
    return None;
  }
  if record.min_installs.is_some_and(|m| m >= 100_000) {
    return None;
  }
  let has_keyword = keywords::contains_any(&title, IMPERSONATION_KEYWORDS);

  let brand = TRUSTED_BRANDS
    .iter()
    .filter(|b| title.contains(b.name))
    .find(|b| !developer.contains(b.developer) && has_keyword)?;

  flag(
    "brand_impersonation",
    "Brand Impersonation Detected",
    Severity::Critical,
    25,
    format!(
      "The title references the trusted brand \"{}\" but the developer (\"{}\") is not the expected \"{}\", and the title carries impersonation keywords. This is a common way to steal credentials or spread malware.",
      brand.name, record.developer, brand.developer
    ),
  )
}

// ---------------------------------------------------------------------------
// Fraud categories
// ---------------------------------------------------------------------------

/// Fires as `loan_fraud_critical` (3+ keywords) or `loan_fraud_warning` (1-2), never both.
pub fn loan_fraud(record: &AppRecord, _ctx: &RuleContext) -> Option<RiskFlag> {
  let text = format!("{} {}", record.title, record.description).to_lowercase();
  let found = keywords::matches_in(&text, LOAN_FRAUD_KEYWORDS);
  match found.len() {
    0 => None,
    1 | 2 => flag(
      "loan_fraud_warning",
      "Potential Loan Scam Keywords",
      Severity::Critical,
      25,
      format!(
        "This app uses loan fraud keywords: \"{}\". Apps promising instant cash with minimal checks are a major fraud category, often ending in data theft or hidden charges.",
        quoted(&found)
      ),
    ),
    n => flag(
      "loan_fraud_critical",
      "High-Risk Loan Scam Pattern",
      Severity::Critical,
      35,
      format!(
        "This app uses {} loan fraud keywords: \"{}\". Loan scam apps lure victims with instant cash, then harvest personal data or charge hidden fees.",
        n,
        quoted(&found[..n.min(4)])
      ),
    ),
  }
}

pub fn low_dev_reputation(record: &AppRecord, _ctx: &RuleContext) -> Option<RiskFlag> {
  let mut reasons = Vec::new();
  if let Some(count) = record.developer_app_count.filter(|&c| c <= 2) {
    reasons.push(format!("developer has only {} app(s) published", count));
  }
  if let Some(days) = record.developer_account_age_days.filter(|&d| d < 30) {
    reasons.push(format!("developer account is only {} days old", days));
  }
  if reasons.is_empty() {
    return None;
  }
  flag(
    "low_dev_reputation",
    "Low Developer Reputation",
    Severity::High,
    20,
    format!(
      "The developer shows signs of low credibility: {}. Scam publishers often use throwaway accounts with little history.",
      reasons.join("; ")
    ),
  )
}

pub fn fraud_reviews(record: &AppRecord, _ctx: &RuleContext) -> Option<RiskFlag> {
  let sampled = record.review_sample.len();
  let reported = record
    .review_sample
    .iter()
    .filter(|r| keywords::contains_any(&r.text.to_lowercase(), FRAUD_REVIEW_KEYWORDS))
    .count();
  if reported < 2 {
    return None;
  }
  flag(
    "fraud_reviews_detected",
    "Users Report Fraud or Abuse",
    Severity::Critical,
    40,
    format!(
      "{} of {} sampled reviews mention fraud (scam, fraud, harassment, ...). Independent reports of the same problem strongly indicate a deceptive or dangerous app.",
      reported, sampled
    ),
  )
}

// ---------------------------------------------------------------------------
// Update age
// ---------------------------------------------------------------------------

/// Older >365-day check; overlaps `update_age` on purpose.
pub fn not_updated_recently(record: &AppRecord, ctx: &RuleContext) -> Option<RiskFlag> {
  let updated = record.last_updated_at?;
  let days = ctx.days_since(updated);
  if days <= 365 {
    return None;
  }
  flag(
    "not_updated_recently",
    "App Not Updated Recently",
    Severity::Medium,
    10,
    format!(
      "No update in over {} months (last update: {}). Abandoned apps may carry unpatched vulnerabilities and are more often low-effort scams.",
      days / 30,
      updated.format("%Y-%m-%d")
    ),
  )
}

/// Fires as `severely_outdated` (>730 days) or `outdated_app` (366-730 days).
pub fn update_age(record: &AppRecord, ctx: &RuleContext) -> Option<RiskFlag> {
  let updated = record.last_updated_at?;
  let days = ctx.days_since(updated);
  if days > 730 {
    flag(
      "severely_outdated",
      "App Severely Outdated",
      Severity::High,
      20,
      format!(
        "No update in over {} years (last update: {}). Severely outdated apps are prime exploit targets and very likely abandoned or fraudulent.",
        days / 365,
        updated.format("%Y-%m-%d")
      ),
    )
  } else if days > 365 {
    flag(
      "outdated_app",
      "App Not Updated in Over a Year",
      Severity::Medium,
      15,
      format!(
        "No update in over {} months (last update: {}). Long gaps between updates leave vulnerabilities unpatched.",
        days / 30,
        updated.format("%Y-%m-%d")
      ),
    )
  } else {
    None
  }
}

pub fn very_new(record: &AppRecord, ctx: &RuleContext) -> Option<RiskFlag> {
  let released = record.released_at?;
  let days = ctx.days_since(released);
  if days >= 30 {
    return None;
  }
  flag(
    "very_new",
    "Very New App",
    Severity::Medium,
    10,
    format!(
      "This app was released only {} days ago. New apps making bold claims have not been vetted by time.",
      days
    ),
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::{ReviewSample, StoreKind};
  use chrono::{Duration, TimeZone};

  fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
  }

  fn ctx() -> RuleContext {
    RuleContext::at(now())
  }

  fn review(text: &str) -> ReviewSample {
    ReviewSample {
      author: None,
      score: 3,
      text: text.into(),
      posted_at: None,
    }
  }

  /// A record no rule fires on.
  fn clean() -> AppRecord {
    let mut r = AppRecord::new(
      "Pocket Notes",
      "Acme Labs",
      "https://play.google.com/store/apps/details?id=com.acme.notes",
      StoreKind::GooglePlay,
    );
    r.score = Some(4.2);
    r.ratings_count = 50_000;
    r.reviews_count = 12_000;
    r.min_installs = Some(1_000_000);
    r.installs_label = Some("1,000,000+".into());
    r.description = "Pocket Notes keeps your lists and ideas organised. ".repeat(10);
    r.privacy_policy_url = Some("https://acme.example/privacy".into());
    r.developer_website = Some("https://acme.example".into());
    r.developer_email = Some("support@acme.example".into());
    r.released_at = Some(now() - Duration::days(400));
    r.last_updated_at = Some(now() - Duration::days(30));
    r.has_ads = true;
    r.developer_app_count = Some(12);
    r.developer_account_age_days = Some(2_000);
    r.review_sample = vec![review("Works well"), review("Simple and fast")];
    r
  }

  fn ids(record: &AppRecord) -> Vec<&'static str> {
    evaluate(record, &ctx()).into_iter().map(|f| f.id).collect()
  }

  #[test]
  fn clean_record_fires_nothing() {
    assert!(ids(&clean()).is_empty());
  }

  #[test]
  fn group_thousands_formats() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1_000), "1,000");
    assert_eq!(group_thousands(1_234_567), "1,234,567");
  }

  #[test]
  fn low_rating_bands() {
    let mut r = clean();
    r.score = Some(3.0);
    assert!(low_rating(&r, &ctx()).is_none());

    r.score = Some(2.99);
    let f = low_rating(&r, &ctx()).unwrap();
    assert_eq!((f.severity, f.points), (Severity::Medium, 15));

    r.score = Some(2.0);
    let f = low_rating(&r, &ctx()).unwrap();
    assert_eq!((f.severity, f.points), (Severity::Medium, 15));

    r.score = Some(1.99);
    let f = low_rating(&r, &ctx()).unwrap();
    assert_eq!((f.severity, f.points), (Severity::High, 20));
    assert!(f.description.contains("2.0/5.0"));

    r.score = None;
    assert!(low_rating(&r, &ctx()).is_none());
  }

  #[test]
  fn few_ratings_thresholds() {
    let mut r = clean();
    r.min_installs = Some(10_000);
    r.ratings_count = 0;
    assert!(few_ratings(&r, &ctx()).is_none());

    r.min_installs = Some(10_001);
    r.ratings_count = 100;
    assert!(few_ratings(&r, &ctx()).is_some());

    r.min_installs = Some(100_000);
    r.ratings_count = 1_000;
    assert!(few_ratings(&r, &ctx()).is_none());

    r.ratings_count = 999;
    assert!(few_ratings(&r, &ctx()).is_some());

    r.store_kind = StoreKind::AppleAppStore;
    assert!(few_ratings(&r, &ctx()).is_none());
  }

  #[test]
  fn very_few_ratings_needs_score() {
    let mut r = clean();
    r.ratings_count = 9;
    assert!(very_few_ratings(&r, &ctx()).is_some());
    r.ratings_count = 10;
    assert!(very_few_ratings(&r, &ctx()).is_none());
    r.ratings_count = 0;
    r.score = None;
    assert!(very_few_ratings(&r, &ctx()).is_none());
  }

  #[test]
  fn few_and_very_few_ratings_can_co_fire() {
    let mut r = clean();
    r.min_installs = Some(50_000);
    r.ratings_count = 5;
    let got = ids(&r);
    assert!(got.contains(&"few_ratings"));
    assert!(got.contains(&"very_few_ratings"));
  }

  #[test]
  fn very_new_boundary() {
    let mut r = clean();
    r.released_at = Some(now() - Duration::days(30));
    assert!(very_new(&r, &ctx()).is_none());
    r.released_at = Some(now() - Duration::days(29) - Duration::hours(23));
    let f = very_new(&r, &ctx()).unwrap();
    assert!(f.description.contains("29 days"));
    r.released_at = None;
    assert!(very_new(&r, &ctx()).is_none());
  }

  #[test]
  fn google_only_contact_rules() {
    let mut r = clean();
    r.developer_website = None;
    r.developer_email = Some(String::new());
    assert!(no_dev_website(&r, &ctx()).is_some());
    assert!(no_dev_email(&r, &ctx()).is_some());

    r.store_kind = StoreKind::AppleAppStore;
    assert!(no_dev_website(&r, &ctx()).is_none());
    assert!(no_dev_email(&r, &ctx()).is_none());
  }

  #[test]
  fn privacy_policy_skipped_for_apple() {
    let mut r = clean();
    r.privacy_policy_url = None;
    let f = no_privacy_policy(&r, &ctx()).unwrap();
    assert_eq!((f.severity, f.points), (Severity::High, 15));
    r.store_kind = StoreKind::AppleAppStore;
    assert!(no_privacy_policy(&r, &ctx()).is_none());
  }

  #[test]
  fn short_description_boundary() {
    let mut r = clean();
    r.description = "x".repeat(99);
    assert!(short_description(&r, &ctx()).is_some());
    r.description = "x".repeat(100);
    assert!(short_description(&r, &ctx()).is_none());
    r.description = String::new();
    assert!(short_description(&r, &ctx()).unwrap().description.contains("(0 characters)"));
  }

  #[test]
  fn suspicious_title_is_case_insensitive() {
    let mut r = clean();
    r.title = "FREE ROBUX Generator".into();
    let f = suspicious_title(&r, &ctx()).unwrap();
    assert!(f.description.contains("\"generator\""));
    assert!(f.description.contains("free robux"));
  }

  #[test]
  fn suspicious_description_needs_two() {
    let mut r = clean();
    r.description = format!("{} with a cheat mode", r.description);
    assert!(suspicious_description(&r, &ctx()).is_none());
    r.description = format!("{} and unlimited gems", r.description);
    let f = suspicious_description(&r, &ctx()).unwrap();
    assert_eq!(f.points, 10);
  }

  #[test]
  fn aggressive_monetization_needs_all_three() {
    let mut r = clean();
    r.offers_in_app_purchases = true;
    assert!(aggressive_monetization(&r, &ctx()).is_some());
    r.has_ads = false;
    assert!(aggressive_monetization(&r, &ctx()).is_none());
  }

  #[test]
  fn clone_patterns_match_titles() {
    let mut r = clean();
    for title in [
      "Skins for Minecraft",
      "Master Guide to Roblox",
      "Wallpapers HD 4K",
      "Mods of Among Us",
    ] {
      r.title = title.into();
      assert!(clone_indicator(&r, &ctx()).is_some(), "{}", title);
    }
    r.title = "Skinny Recipes".into();
    assert!(clone_indicator(&r, &ctx()).is_none());
  }

  #[test]
  fn install_thresholds() {
    let mut r = clean();
    r.min_installs = Some(999);
    assert!(very_low_installs(&r, &ctx()).is_some());
    r.min_installs = Some(1_000);
    assert!(very_low_installs(&r, &ctx()).is_none());
    r.min_installs = None;
    assert!(very_low_installs(&r, &ctx()).is_none());

    r.min_installs = Some(100_000);
    r.ratings_count = 99;
    assert!(fake_install_inflation(&r, &ctx()).is_some());
    r.ratings_count = 100;
    assert!(fake_install_inflation(&r, &ctx()).is_none());
    r.min_installs = Some(99_999);
    r.ratings_count = 0;
    assert!(fake_install_inflation(&r, &ctx()).is_none());
  }

  #[test]
  fn fake_high_rating_boundary() {
    let mut r = clean();
    r.score = Some(4.8);
    r.ratings_count = 49;
    assert!(fake_high_rating(&r, &ctx()).is_some());
    r.ratings_count = 50;
    assert!(fake_high_rating(&r, &ctx()).is_none());
    r.score = Some(4.79);
    r.ratings_count = 10;
    assert!(fake_high_rating(&r, &ctx()).is_none());
  }

  #[test]
  fn suspicious_developer_lists_keywords() {
    let mut r = clean();
    r.developer = "Mod Team".into();
    let f = suspicious_developer(&r, &ctx()).unwrap();
    assert!(f.description.contains("\"mod\", \"team\""));
  }

  #[test]
  fn update_age_bands() {
    let mut r = clean();
    r.last_updated_at = Some(now() - Duration::days(365));
    assert!(update_age(&r, &ctx()).is_none());
    assert!(not_updated_recently(&r, &ctx()).is_none());

    r.last_updated_at = Some(now() - Duration::days(366));
    assert_eq!(update_age(&r, &ctx()).unwrap().id, "outdated_app");
    assert!(not_updated_recently(&r, &ctx()).is_some());

    r.last_updated_at = Some(now() - Duration::days(730));
    assert_eq!(update_age(&r, &ctx()).unwrap().id, "outdated_app");

    r.last_updated_at = Some(now() - Duration::days(731));
    let f = update_age(&r, &ctx()).unwrap();
    assert_eq!((f.id, f.severity, f.points), ("severely_outdated", Severity::High, 20));
    assert!(f.description.contains("over 2 years"));
  }

  #[test]
  fn impersonation_requires_dangerous_modifier() {
    let mut r = clean();
    r.min_installs = Some(500);
    r.title = "WhatsApp Plus".into();
    assert!(impersonation(&r, &ctx()).is_none());

    r.title = "WhatsApp Plus Free Hack".into();
    let f = impersonation(&r, &ctx()).unwrap();
    assert_eq!((f.severity, f.points), (Severity::Critical, 20));

    r.title = "WhatsApp Status Saver Mod".into();
    assert!(impersonation(&r, &ctx()).is_none());

    r.title = "WhatsApp Plus Free Hack".into();
    r.min_installs = Some(100_000);
    assert!(impersonation(&r, &ctx()).is_none());

    r.min_installs = None;
    assert!(impersonation(&r, &ctx()).is_some());
  }

  #[test]
  fn brand_impersonation_checks_developer() {
    let mut r = clean();
    r.min_installs = Some(500);
    r.title = "WhatsApp Plus".into();
    r.developer = "RandomDevStudio".into();
    let f = brand_impersonation(&r, &ctx()).unwrap();
    assert_eq!((f.severity, f.points), (Severity::Critical, 25));
    assert!(f.description.contains("\"whatsapp\""));

    r.developer = "WhatsApp LLC".into();
    assert!(brand_impersonation(&r, &ctx()).is_none());

    r.developer = "RandomDevStudio".into();
    r.title = "WhatsApp Stickers Pro".into();
    assert!(brand_impersonation(&r, &ctx()).is_none());

    r.title = "Netflix Viewing Party".into();
    assert!(brand_impersonation(&r, &ctx()).is_none());
  }

  #[test]
  fn brand_impersonation_picks_first_mismatched_brand() {
    let mut r = clean();
    r.min_installs = Some(500);
    r.title = "Instagram Facebook Premium".into();
    r.developer = "Meta Platforms".into();
    assert!(brand_impersonation(&r, &ctx()).is_none());

    r.title = "Amazon Netflix Premium".into();
    r.developer = "Amazon".into();
    let f = brand_impersonation(&r, &ctx()).unwrap();
    assert!(f.description.contains("\"netflix\""));
  }

  #[test]
  fn rating_manipulation_concatenates_reasons() {
    let mut r = clean();
    r.score = Some(4.9);
    r.ratings_count = 10;
    r.min_installs = Some(1_000);
    let f = rating_manipulation(&r, &ctx()).unwrap();
    assert!(f.description.contains("near-perfect rating (4.9) with only 10 ratings"));

    r.score = Some(4.0);
    r.ratings_count = 60;
    r.min_installs = Some(2_000_000);
    let f = rating_manipulation(&r, &ctx()).unwrap();
    assert!(f.description.contains("100K+ installs but only 60 ratings; 1M+ installs"));
    assert_eq!(f.points, 20);

    r.ratings_count = 500;
    assert!(rating_manipulation(&r, &ctx()).is_none());

    r.ratings_count = 10;
    r.score = None;
    assert!(rating_manipulation(&r, &ctx()).is_none());
  }

  #[test]
  fn rating_manipulation_install_thresholds() {
    let mut r = clean();
    r.score = Some(4.0);

    r.min_installs = Some(99_999);
    r.ratings_count = 99;
    assert!(rating_manipulation(&r, &ctx()).is_none());
    r.min_installs = Some(100_000);
    let f = rating_manipulation(&r, &ctx()).unwrap();
    assert!(f.description.contains("100K+ installs but only 99 ratings"));
    assert!(!f.description.contains("1M+"));
    r.ratings_count = 100;
    assert!(rating_manipulation(&r, &ctx()).is_none());

    r.min_installs = Some(999_999);
    r.ratings_count = 499;
    assert!(rating_manipulation(&r, &ctx()).is_none());
    r.min_installs = Some(1_000_000);
    let f = rating_manipulation(&r, &ctx()).unwrap();
    assert!(f.description.contains("1M+ installs but only 499 ratings"));
    assert!(!f.description.contains("100K+"));
    r.ratings_count = 500;
    assert!(rating_manipulation(&r, &ctx()).is_none());
  }

  #[test]
  fn loan_fraud_tiers_are_exclusive() {
    let mut r = clean();
    r.title = "Budget Planner".into();
    r.description = format!("{} Get an instant loan or an easy loan.", r.description);
    let f = loan_fraud(&r, &ctx()).unwrap();
    assert_eq!((f.id, f.points), ("loan_fraud_warning", 25));

    r.title = "Quick Cash Loan App".into();
    let f = loan_fraud(&r, &ctx()).unwrap();
    assert_eq!((f.id, f.points), ("loan_fraud_critical", 35));
    assert_eq!(f.severity, Severity::Critical);
  }

  #[test]
  fn low_dev_reputation_ignores_absent_fields() {
    let mut r = clean();
    r.developer_app_count = None;
    r.developer_account_age_days = None;
    assert!(low_dev_reputation(&r, &ctx()).is_none());

    r.developer_app_count = Some(2);
    assert!(low_dev_reputation(&r, &ctx()).is_some());
    r.developer_app_count = Some(3);
    assert!(low_dev_reputation(&r, &ctx()).is_none());

    r.developer_account_age_days = Some(29);
    let f = low_dev_reputation(&r, &ctx()).unwrap();
    assert!(f.description.contains("29 days old"));
    r.developer_account_age_days = Some(30);
    assert!(low_dev_reputation(&r, &ctx()).is_none());
  }

  #[test]
  fn fraud_reviews_need_two_reports() {
    let mut r = clean();
    r.review_sample = vec![review("Total SCAM"), review("great"), review("ok")];
    assert!(fraud_reviews(&r, &ctx()).is_none());

    r.review_sample.push(review("they hacked my account"));
    let f = fraud_reviews(&r, &ctx()).unwrap();
    assert_eq!((f.severity, f.points), (Severity::Critical, 40));
    assert!(f.description.starts_with("2 of 4"));
  }

  #[test]
  fn rules_are_independent_of_unrelated_fields() {
    let mut r = clean();
    r.score = Some(1.5);
    let before = low_rating(&r, &ctx());
    r.developer_email = None;
    r.title = "Free Robux Generator".into();
    assert_eq!(low_rating(&r, &ctx()), before);
  }

  #[test]
  fn registry_names_are_unique() {
    let mut names: Vec<_> = RULES.iter().map(|r| r.name).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), RULES.len());
  }
}
