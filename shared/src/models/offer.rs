//! Offer Model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Promotional offer of a website
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub offer_image: Option<String>,
    #[serde(default, deserialize_with = "crate::util::null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "crate::util::null_as_default")]
    pub sub_title: String,
    #[serde(default, deserialize_with = "crate::util::null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "crate::util::null_as_default")]
    pub min_order_value: f64,
    #[serde(default)]
    pub validity: OfferValidity,
    #[serde(default, deserialize_with = "crate::util::null_as_default")]
    pub status: String,
}

/// Validity window, kept as sent (ISO 8601 timestamps or plain dates)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfferValidity {
    #[serde(default, deserialize_with = "crate::util::null_as_default")]
    pub start: String,
    #[serde(default, deserialize_with = "crate::util::null_as_default")]
    pub end: String,
}

impl Offer {
    /// End of validity, if parseable
    pub fn ends_at(&self) -> Option<DateTime<Utc>> {
        parse_instant(&self.validity.end)
    }

    /// An offer whose end lies before `now`. Unparseable ends never expire.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.ends_at().is_some_and(|end| end < now)
    }

    /// An offer still running at `now`, as shown in the offers popup
    ///
    /// Stricter than `!is_expired`: an unparseable end is not active.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.ends_at().is_some_and(|end| end >= now)
    }
}

/// Offers still running at `now`, in their original order
pub fn active_offers(offers: &[Offer], now: DateTime<Utc>) -> Vec<&Offer> {
    offers.iter().filter(|offer| offer.is_active(now)).collect()
}

fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
