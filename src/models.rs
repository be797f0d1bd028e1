//! Frontend Models
//!
//! Data structures for the comparison catalog.

use serde::{Deserialize, Serialize};

/// One drone record in the comparison catalog.
///
/// `id` is generated client-side (see `store::store_seed`) and survives the
/// cache round-trip, so deletes always target the intended record even from
/// a filtered or sorted view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drone {
    pub id: u32,
    pub model: String,
    pub camera: String,
    pub flight: String,
    pub weight: String,
    pub price: f64,
    pub rating: f64,
}

/// Wire format of the seed catalog and the add form (no identifier yet)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroneSpec {
    pub model: String,
    pub camera: String,
    pub flight: String,
    pub weight: String,
    pub price: f64,
    pub rating: f64,
}

impl Drone {
    /// Stamp an identifier onto a catalog/form record
    pub fn from_spec(id: u32, spec: DroneSpec) -> Self {
        Self {
            id,
            model: spec.model,
            camera: spec.camera,
            flight: spec.flight,
            weight: spec.weight,
            price: spec.price,
            rating: spec.rating,
        }
    }
}

/// Parse a numeric form field. Input is not validated: garbled text becomes
/// NaN and is rendered as-is.
pub fn parse_number(input: &str) -> f64 {
    input.trim().parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("499.90"), 499.90);
        assert_eq!(parse_number(" 1200 "), 1200.0);
        assert!(parse_number("abc").is_nan());
        assert!(parse_number("").is_nan());
    }

    #[test]
    fn test_from_spec_keeps_fields() {
        let spec = DroneSpec {
            model: "DJI Mini 4 Pro".to_string(),
            camera: "4K/60fps HDR".to_string(),
            flight: "34 min".to_string(),
            weight: "249 g".to_string(),
            price: 999.0,
            rating: 4.8,
        };
        let drone = Drone::from_spec(7, spec.clone());
        assert_eq!(drone.id, 7);
        assert_eq!(drone.model, spec.model);
        assert_eq!(drone.price, spec.price);
    }
}
