//! JSON snapshot codec for [`GameState`].
//!
//! Loading never fails. A saved snapshot is merged over the current defaults
//! so missing or mistyped fields fall back one at a time, and the result goes
//! through [`GameState::repair`] before use. Saved lists and maps drop only
//! their bad entries (see [`super::lenient`]).

use super::error::{Result, StorageError};
use super::store::KeyValueStore;
use crate::core::constants::STORAGE_KEY;
use crate::core::game_state::GameState;
use serde_json::{Map, Value};

/// Key fragments of auxiliary entries that may be dropped to reclaim space.
const PRUNABLE_KEY_MARKERS: [&str; 3] = ["backup", "temp", "old"];

pub fn encode(state: &GameState) -> Result<String> {
    Ok(serde_json::to_string(state)?)
}

/// Overlays `saved` on `default`. Objects merge key by key and keep unknown
/// saved keys. Elsewhere a saved value wins when it has the default's JSON
/// kind, or when the default is null; otherwise the default stays.
fn merge_with_defaults(default: Value, saved: Value) -> Value {
    match (default, saved) {
        (default, Value::Null) => default,
        (Value::Object(mut defaults), Value::Object(saved)) => {
            for (key, saved_value) in saved {
                let merged = match defaults.remove(&key) {
                    Some(default_value) => merge_with_defaults(default_value, saved_value),
                    None => saved_value,
                };
                defaults.insert(key, merged);
            }
            Value::Object(defaults)
        }
        (Value::Null, saved) => saved,
        (default, saved) if same_kind(&default, &saved) => saved,
        (default, _) => default,
    }
}

fn same_kind(a: &Value, b: &Value) -> bool {
    std::mem::discriminant(a) == std::mem::discriminant(b)
}

/// Accepts merged top-level fields one at a time, keeping the default for any
/// field that does not deserialize.
fn fallback_per_field(defaults: Map<String, Value>, merged: Map<String, Value>) -> GameState {
    let mut accepted = defaults;
    for (key, value) in merged {
        let previous = accepted.insert(key.clone(), value);
        if serde_json::from_value::<GameState>(Value::Object(accepted.clone())).is_err() {
            tracing::warn!(field = %key, "saved field is malformed, using default");
            match previous {
                Some(previous) => accepted.insert(key, previous),
                None => accepted.remove(&key),
            };
        }
    }
    serde_json::from_value(Value::Object(accepted)).unwrap_or_default()
}

/// Decodes a snapshot saved at any earlier schema. `now` becomes the new
/// session start.
pub fn decode(json: &str, now: i64) -> GameState {
    let mut state = match serde_json::from_str::<Value>(json) {
        Ok(Value::Object(saved)) => {
            let defaults = match serde_json::to_value(GameState::default()) {
                Ok(Value::Object(defaults)) => defaults,
                _ => Map::new(),
            };
            match merge_with_defaults(Value::Object(defaults.clone()), Value::Object(saved)) {
                Value::Object(merged) => {
                    match serde_json::from_value::<GameState>(Value::Object(merged.clone())) {
                        Ok(state) => state,
                        Err(err) => {
                            tracing::warn!(%err, "snapshot did not deserialize, recovering per field");
                            fallback_per_field(defaults, merged)
                        }
                    }
                }
                _ => GameState::default(),
            }
        }
        Ok(_) => {
            tracing::warn!("snapshot is not a JSON object, starting fresh");
            GameState::default()
        }
        Err(err) => {
            tracing::warn!(%err, "snapshot is not valid JSON, starting fresh");
            GameState::default()
        }
    };
    state.statistics.session_start_time = now;
    state.repair();
    state
}

/// Loads the saved run, or `None` when there is none or the store fails.
pub fn load_state(store: &impl KeyValueStore, now: i64) -> Option<GameState> {
    match store.get(STORAGE_KEY) {
        Ok(Some(json)) => {
            tracing::debug!(bytes = json.len(), "loaded snapshot");
            Some(decode(&json, now))
        }
        Ok(None) => None,
        Err(err) => {
            tracing::warn!(%err, "could not read snapshot");
            None
        }
    }
}

/// Removes auxiliary keys. Returns how many were removed.
pub fn prune_auxiliary_keys(store: &mut impl KeyValueStore) -> Result<usize> {
    let doomed: Vec<String> = store
        .keys()?
        .into_iter()
        .filter(|k| k != STORAGE_KEY)
        .filter(|k| {
            let lower = k.to_ascii_lowercase();
            PRUNABLE_KEY_MARKERS.iter().any(|m| lower.contains(m))
        })
        .collect();
    for key in &doomed {
        store.remove(key)?;
    }
    Ok(doomed.len())
}

/// Writes the snapshot. On a quota error, prunes auxiliary keys and retries once.
pub fn save_state(store: &mut impl KeyValueStore, state: &GameState) -> Result<()> {
    let json = encode(state)?;
    match store.set(STORAGE_KEY, &json) {
        Err(StorageError::QuotaExceeded { .. }) => {
            let pruned = prune_auxiliary_keys(store)?;
            tracing::warn!(pruned, "storage quota exceeded, retrying after pruning");
            store.set(STORAGE_KEY, &json)
        }
        other => other,
    }?;
    tracing::debug!(bytes = json.len(), "saved snapshot");
    Ok(())
}

pub fn clear_state(store: &mut impl KeyValueStore) -> Result<()> {
    store.remove(STORAGE_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::store::MemoryStore;
    use serde_json::json;

    #[test]
    fn test_merge_keeps_saved_and_fills_missing() {
        let merged = merge_with_defaults(
            json!({"a": 1, "b": {"c": 2, "d": 3}}),
            json!({"b": {"c": 9}, "extra": true}),
        );
        assert_eq!(merged, json!({"a": 1, "b": {"c": 9, "d": 3}, "extra": true}));
    }

    #[test]
    fn test_merge_rejects_kind_mismatch_and_null() {
        let merged = merge_with_defaults(
            json!({"coins": 100, "name": null, "list": []}),
            json!({"coins": "lots", "name": "x", "list": null}),
        );
        assert_eq!(merged, json!({"coins": 100, "name": "x", "list": []}));
    }

    #[test]
    fn test_decode_garbage_gives_defaults() {
        let state = decode("not json {", 77);
        assert_eq!(state.coins, 100);
        assert_eq!(state.statistics.session_start_time, 77);
        assert_eq!(decode("[1,2]", 0).zone, 1);
    }

    #[test]
    fn test_decode_partial_snapshot() {
        let state = decode(r#"{"coins": 5000, "zone": 12}"#, 0);
        assert_eq!(state.coins, 5000);
        assert_eq!(state.zone, 12);
        assert_eq!(state.player_stats.base_atk, 50);
    }

    #[test]
    fn test_decode_malformed_field_falls_back_alone() {
        let state = decode(
            r#"{"coins": 321, "research": {"atk": {"level": -4}}, "zone": 3}"#,
            0,
        );
        assert_eq!(state.coins, 321);
        assert_eq!(state.zone, 3);
        assert_eq!(state.research.atk.level, 0);
    }

    #[test]
    fn test_decode_relatches_premium() {
        let state = decode(r#"{"zone": 55, "is_premium": false}"#, 0);
        assert!(state.is_premium);
    }

    #[test]
    fn test_save_prunes_on_quota_and_retries() {
        let state = GameState::default();
        let snapshot_len = encode(&state).unwrap().len();
        let mut store = MemoryStore::with_quota(snapshot_len + STORAGE_KEY.len() + 10);
        store.set("old", "xxxxx").unwrap();
        store.set("temp_cache", "").unwrap();
        store.set("keep_me", "").unwrap();

        save_state(&mut store, &state).unwrap();
        let keys = store.keys().unwrap();
        assert!(keys.contains(&STORAGE_KEY.to_string()));
        assert!(keys.contains(&"keep_me".to_string()));
        assert!(!keys.contains(&"old".to_string()));
        assert!(!keys.contains(&"temp_cache".to_string()));
    }

    #[test]
    fn test_save_fails_when_pruning_is_not_enough() {
        let mut store = MemoryStore::with_quota(8);
        assert!(matches!(
            save_state(&mut store, &GameState::default()),
            Err(StorageError::QuotaExceeded { .. })
        ));
    }

    #[test]
    fn test_load_missing_and_clear() {
        let mut store = MemoryStore::new();
        assert!(load_state(&store, 0).is_none());
        save_state(&mut store, &GameState::default()).unwrap();
        assert!(load_state(&store, 0).is_some());
        clear_state(&mut store).unwrap();
        assert!(load_state(&store, 0).is_none());
    }
}
