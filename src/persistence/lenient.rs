//! Field deserializers for saved collections that drop bad entries instead
//! of failing the whole collection.
//!
//! One mistyped weapon must not cost the player the rest of the inventory, so
//! list and map fields of the snapshot decode element by element. Every
//! dropped entry is logged at `warn`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Decodes a list, skipping elements that do not deserialize.
pub fn vec_skipping_malformed<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let values = Vec::<Value>::deserialize(deserializer)?;
    Ok(values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!(index, %err, "dropping malformed saved entry");
                None
            }
        })
        .collect())
}

/// Decodes a string-keyed map, skipping entries whose key or value does not
/// deserialize. Unknown enum keys from a newer or older catalog land here.
pub fn map_skipping_malformed<'de, D, K, V>(deserializer: D) -> Result<BTreeMap<K, V>, D::Error>
where
    D: Deserializer<'de>,
    K: DeserializeOwned + Ord,
    V: DeserializeOwned,
{
    let entries = BTreeMap::<String, Value>::deserialize(deserializer)?;
    let mut decoded = BTreeMap::new();
    for (key, value) in entries {
        let parsed_key = serde_json::from_value::<K>(Value::String(key.clone()));
        match (parsed_key, serde_json::from_value::<V>(value)) {
            (Ok(k), Ok(v)) => {
                decoded.insert(k, v);
            }
            (Err(err), _) | (_, Err(err)) => {
                tracing::warn!(%key, %err, "dropping malformed saved entry");
            }
        }
    }
    Ok(decoded)
}
