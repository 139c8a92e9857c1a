//! Static keyword tables and patterns shared by the rules (read-only, lowercase).

use std::sync::LazyLock;

use regex::Regex;

/// Terms typical of cheat/crack/mod listings; matched in titles and descriptions.
pub const SUSPICIOUS_KEYWORDS: &[&str] = &[
  "free hack",
  "mod apk",
  "unlimited coins",
  "unlimited gems",
  "free robux",
  "generator",
  "cheat",
  "cracked",
  "premium free",
  "pro free",
  "paid free",
  "free diamonds",
  "unlimited money",
  "get free",
  "no root",
  "free fire hack",
];

pub const SUSPICIOUS_DEV_KEYWORDS: &[&str] = &[
  "hack",
  "mod",
  "generator",
  "official",
  "free",
  "studio",
  "inc",
  "team",
];

/// Brands checked by the `impersonation` rule.
pub const IMPERSONATION_TARGETS: &[&str] = &[
  "whatsapp",
  "instagram",
  "telegram",
  "youtube",
  "facebook",
  "snapchat",
  "spotify",
  "netflix",
  "amazon",
  "google",
];

/// Modifiers that turn a brand mention into a likely fake ("free" is too common).
pub const DANGEROUS_MODIFIERS: &[&str] = &["hack", "mod", "cracked", "unlocked"];

/// A brand and the substring its real publisher's developer name carries.
#[derive(Debug, Clone, Copy)]
pub struct TrustedBrand {
  pub name: &'static str,
  pub developer: &'static str,
}

pub const TRUSTED_BRANDS: &[TrustedBrand] = &[
  TrustedBrand { name: "whatsapp", developer: "whatsapp" },
  TrustedBrand { name: "google pay", developer: "google" },
  TrustedBrand { name: "gpay", developer: "google" },
  TrustedBrand { name: "paytm", developer: "paytm" },
  TrustedBrand { name: "phonepe", developer: "phonepe" },
  TrustedBrand { name: "amazon", developer: "amazon" },
  TrustedBrand { name: "facebook", developer: "meta" },
  TrustedBrand { name: "instagram", developer: "meta" },
  TrustedBrand { name: "telegram", developer: "telegram" },
  TrustedBrand { name: "spotify", developer: "spotify" },
  TrustedBrand { name: "netflix", developer: "netflix" },
];

pub const IMPERSONATION_KEYWORDS: &[&str] =
  &["plus", "pro", "premium", "mod", "hack", "free", "unlocked"];

/// Utility/fan apps that mention a brand without pretending to be it.
pub const COMPANION_KEYWORDS: &[&str] = &[
  "saver",
  "downloader",
  "download",
  "repost",
  "sticker",
  "stickers",
  "theme",
  "themes",
  "wallpaper",
  "wallpapers",
  "guide",
  "tutorial",
  "tips",
  "cleaner",
  "backup",
  "recovery",
  "tracker",
  "status",
  "widget",
  "fonts",
  "keyboard",
  "scanner",
  "reader",
  "manager",
  "companion",
  "helper",
  "tool",
  "tools",
  "analytics",
  "insights",
  "viewer",
  "editor",
  "maker",
  "creator",
  "converter",
  "splitter",
  "scheduler",
  "reminder",
  "notifier",
  "chat",
  "dual",
  "clone",
  "web",
  "lite",
  "for business",
  "business",
  "trading",
  "trade",
  "invest",
  "pay",
  "money",
  "send",
  "transfer",
];

pub const LOAN_FRAUD_KEYWORDS: &[&str] = &[
  "instant loan",
  "quick loan",
  "cash loan",
  "loan fast",
  "loan in minutes",
  "loan without pan",
  "loan without documents",
  "personal loan fast",
  "get loan instantly",
  "easy loan",
  "loan app",
  "money loan fast",
];

pub const FRAUD_REVIEW_KEYWORDS: &[&str] = &[
  "scam",
  "fraud",
  "blackmail",
  "stole my data",
  "hacked",
  "fake app",
  "threat",
  "abuse",
  "harassment",
];

/// Copycat title shapes: "for <popular game>", "guide to", "wallpapers hd", "skins free".
/// Word boundaries are ASCII-only, so an accented letter counts as a separator.
pub static CLONE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
  [
    r"(?i)(?-u:\b)(for|of)\s+(fortnite|minecraft|roblox|gta|among\s?us)",
    r"(?i)(?-u:\b)guide\s+(for|to)(?-u:\b)",
    r"(?i)(?-u:\b)wallpaper(s)?\s+(for|hd)(?-u:\b)",
    r"(?i)(?-u:\b)skin(s)?\s+(for|free)(?-u:\b)",
  ]
  .iter()
  .filter_map(|p| Regex::new(p).ok())
  .collect()
});

/// Keywords from `table` found in already-lowercased `text`, in table order.
pub fn matches_in(text: &str, table: &[&'static str]) -> Vec<&'static str> {
  table.iter().copied().filter(|kw| text.contains(kw)).collect()
}

pub fn contains_any(text: &str, table: &[&str]) -> bool {
  table.iter().any(|kw| text.contains(kw))
}
