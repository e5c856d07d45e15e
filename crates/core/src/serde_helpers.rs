//! Field deserializers shared by request DTOs.

use serde::{Deserialize, Deserializer};

/// Deserialize a nullable field of a partial update.
///
/// Pair with `#[serde(default)]`: an absent field stays `None` (keep the
/// stored value), `null` becomes `Some(None)` (clear it) and a value becomes
/// `Some(Some(v))`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
