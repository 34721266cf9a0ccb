//! Wire types for the lookup endpoint and its query parameters.
//!
//! `LookupResult` and `ServerAnswer` mirror the resolver worker's JSON
//! exactly, including the `type` field rename and Go-style nanosecond
//! durations. The dispatcher only ever reads `answers[*].ttl`; everything
//! else is carried through untouched.

use crate::errors::EdgeError;
use serde::{Deserialize, Deserializer, Serialize};

/// Query parameters accepted by the lookup endpoint.
///
/// `no_cache` keeps the raw parameter value: the cache read/write branch is
/// skipped whenever the parameter carries any non-empty value, while the
/// `no-cache` directive is only forced by the literal `"true"`. The two
/// checks can diverge on purpose (`no_cache=foo` skips the cache but still
/// advertises a max-age).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LookupQuery {
    pub domain: Option<String>,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
    pub no_cache: Option<String>,
}

impl LookupQuery {
    /// Both `domain` and `type` are mandatory; absence is a validation
    /// error, never resolved against the backend.
    pub fn validate(&self) -> Result<(), EdgeError> {
        let domain_ok = self.domain.as_deref().is_some_and(|d| !d.is_empty());
        let type_ok = self.record_type.as_deref().is_some_and(|t| !t.is_empty());
        if domain_ok && type_ok {
            Ok(())
        } else {
            Err(EdgeError::MissingParameters)
        }
    }

    /// True when the caller asked to skip the cache read and write.
    pub fn bypass_cache(&self) -> bool {
        self.no_cache.as_deref().is_some_and(|v| !v.is_empty())
    }

    /// True only for the literal `no_cache=true`; governs the directive.
    pub fn directive_bypass(&self) -> bool {
        self.no_cache.as_deref() == Some("true")
    }
}

/// One consulted DNS server's answer. `values` keeps insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerAnswer {
    pub server: String,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub server_address: String,
    /// Lenient: a JSON number becomes `Some`, anything else (missing,
    /// string, null) becomes `None` and is ignored downstream, never
    /// treated as zero.
    #[serde(default, deserialize_with = "lenient_ttl")]
    pub ttl: Option<i64>,
    /// Nanoseconds, matching the worker's Go `time.Duration` encoding.
    #[serde(default)]
    pub duration: i64,
    #[serde(default)]
    pub duration_string: String,
}

/// The resolver worker's full lookup response, consumed as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupResult {
    pub question: String,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default)]
    pub answers: Vec<ServerAnswer>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub total_duration: i64,
    #[serde(default)]
    pub total_duration_string: String,
}

fn lenient_ttl<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_i64())
}
