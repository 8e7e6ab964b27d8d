//! JSON decoding utilities for monitor records.
//!
//! The daemon writes `null` for fields it has nothing to say about just as
//! often as it omits them. The helpers here make both spellings decode to the
//! same empty state while still rejecting values of the wrong type.

use crate::error::Result;
use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;

/// Parse a JSON string into a deserializable type.
pub fn parse<T: DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

/// Parse JSON bytes into a deserializable type.
pub fn parse_slice<T: DeserializeOwned>(json: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(json)?)
}

/// Convert an already parsed JSON value into a deserializable type.
pub fn parse_value<T: DeserializeOwned>(value: serde_json::Value) -> Result<T> {
    Ok(serde_json::from_value(value)?)
}

/// Deserialize a field, mapping an explicit `null` to the type's default.
///
/// Used with serde's `deserialize_with` attribute together with `default`,
/// which covers the missing-field case.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct Event {
///     #[serde(default, deserialize_with = "null_as_default")]
///     permissions: Vec<String>,
/// }
/// ```
pub fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
