//! Y-Pay merchant API response types.
//!
//! The upstream JSON is loosely typed: numeric fields sometimes arrive as
//! strings and postal codes sometimes arrive as numbers. Everything is mapped
//! to fixed Rust types here, with absent or `null` text fields kept as `None`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Label used for records that carry no category.
pub const UNCATEGORIZED: &str = "(미분류)";

/// One merchant enrolled in the Y-Pay card program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantRecord {
    /// Upstream sequence number. Not unique across queries; `None` when the
    /// row carries no usable number.
    #[serde(rename = "no", default, deserialize_with = "de_opt_integer")]
    pub seq: Option<i64>,
    #[serde(rename = "fld", default, deserialize_with = "de_opt_text")]
    pub category: Option<String>,
    #[serde(rename = "subcls", default, deserialize_with = "de_opt_text")]
    pub subcategory: Option<String>,
    #[serde(rename = "aflt_nm", default, deserialize_with = "de_opt_text")]
    pub name: Option<String>,
    #[serde(rename = "zip", default, deserialize_with = "de_opt_text")]
    pub postal_code: Option<String>,
    #[serde(rename = "addr", default, deserialize_with = "de_opt_text")]
    pub address: Option<String>,
}

impl MerchantRecord {
    /// Raw, case-sensitive substring test against the address. A record with
    /// no address never matches.
    #[must_use]
    pub fn address_contains(&self, needle: &str) -> bool {
        self.address.as_deref().is_some_and(|a| a.contains(needle))
    }

    #[must_use]
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or(UNCATEGORIZED)
    }
}

/// One page of results: the records on this page plus the server-declared
/// total for the whole query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MerchantPage {
    pub records: Vec<MerchantRecord>,
    pub total_count: u64,
}

/// Success-shaped body of `getYpay`. `resultCode` is checked on the raw JSON
/// before this is deserialized.
#[derive(Debug, Deserialize)]
pub(crate) struct MerchantEnvelope {
    #[serde(rename = "totalCount", default, deserialize_with = "de_count")]
    pub total_count: u64,
    #[serde(default)]
    pub items: Option<Vec<MerchantRecord>>,
}

impl MerchantEnvelope {
    pub(crate) fn into_page(self) -> MerchantPage {
        MerchantPage {
            records: self.items.unwrap_or_default(),
            total_count: self.total_count,
        }
    }
}

/// Reads an integer that may be encoded as a JSON number or a numeric string.
pub(crate) fn lenient_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn de_opt_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(|value| lenient_i64(&value)))
}

fn de_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(0),
        Some(value) => lenient_i64(&value)
            .and_then(|n| u64::try_from(n).ok())
            .ok_or_else(|| {
                D::Error::custom(format!("expected non-negative count, got {value}"))
            }),
    }
}

fn de_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!("expected text, got {other}"))),
    }
}
