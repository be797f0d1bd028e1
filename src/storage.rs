//! Cache Mirror
//!
//! Durable copy of the catalog in window.localStorage under a fixed key,
//! kept equal to memory by write-through from the store helpers.

use crate::models::Drone;

/// localStorage key holding the serialized catalog
const STORAGE_KEY: &str = "dronesData";

fn local_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .ok_or_else(|| "no window".to_string())?
        .local_storage()
        .map_err(|e| format!("localStorage unavailable: {:?}", e))?
        .ok_or_else(|| "localStorage disabled".to_string())
}

/// Read the cached catalog, if any was written by an earlier session
pub fn load_cached() -> Result<Option<Vec<Drone>>, String> {
    let storage = local_storage()?;
    let raw = storage
        .get_item(STORAGE_KEY)
        .map_err(|e| format!("localStorage read failed: {:?}", e))?;
    match raw {
        Some(text) => decode(&text).map(Some),
        None => Ok(None),
    }
}

/// Overwrite the cache entry with the current sequence
pub fn persist(drones: &[Drone]) -> Result<(), String> {
    let storage = local_storage()?;
    let text = encode(drones)?;
    storage
        .set_item(STORAGE_KEY, &text)
        .map_err(|e| format!("localStorage write failed: {:?}", e))
}

pub fn decode(raw: &str) -> Result<Vec<Drone>, String> {
    serde_json::from_str(raw).map_err(|e| e.to_string())
}

pub fn encode(drones: &[Drone]) -> Result<String, String> {
    serde_json::to_string(drones).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_entry_is_stable() {
        let raw = r#"[{"id":1,"model":"A","camera":"4K","flight":"20 min","weight":"300 g","price":400.0,"rating":4.0}]"#;
        let drones = decode(raw).unwrap();
        assert_eq!(drones.len(), 1);
        assert_eq!(drones[0].model, "A");
        // Re-serializing a decoded entry reproduces it byte for byte
        assert_eq!(encode(&drones).unwrap(), raw);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode("not json").is_err());
        assert!(decode(r#"{"model":"A"}"#).is_err());
    }
}
