//! Derived Views
//!
//! Projections of the full catalog: text search, price-bracket filter and
//! price sort. Each derivation reads the full base sequence and never
//! mutates it; the last control touched wins (combining search with a
//! bracket filter is intentionally unsupported).

use std::cmp::Ordering;

use crate::models::Drone;

/// Fixed price brackets of the filter control
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriceBand {
    Budget,
    Mid,
    Pro,
}

impl PriceBand {
    pub fn contains(self, price: f64) -> bool {
        match self {
            PriceBand::Budget => price < 500.0,
            PriceBand::Mid => (500.0..=1500.0).contains(&price),
            PriceBand::Pro => price > 1500.0,
        }
    }

    /// Map a filter-control value; anything else means "no filter"
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "budget" => Some(PriceBand::Budget),
            "mid" => Some(PriceBand::Mid),
            "pro" => Some(PriceBand::Pro),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// The view currently derived from the catalog
#[derive(Clone, Debug, PartialEq, Default)]
pub enum DroneQuery {
    #[default]
    All,
    /// Case-insensitive substring match on the model name
    Search(String),
    Band(PriceBand),
    SortByPrice(SortDirection),
}

impl DroneQuery {
    /// Derive a view sequence without mutating the source
    pub fn apply(&self, drones: &[Drone]) -> Vec<Drone> {
        match self {
            DroneQuery::All => drones.to_vec(),
            DroneQuery::Search(needle) => {
                let needle = needle.to_lowercase();
                drones
                    .iter()
                    .filter(|d| d.model.to_lowercase().contains(&needle))
                    .cloned()
                    .collect()
            }
            DroneQuery::Band(band) => drones
                .iter()
                .filter(|d| band.contains(d.price))
                .cloned()
                .collect(),
            DroneQuery::SortByPrice(direction) => {
                let mut sorted = drones.to_vec();
                // NaN prices (unvalidated form input) compare as equal
                sorted.sort_by(|a, b| {
                    let order = a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal);
                    match direction {
                        SortDirection::Ascending => order,
                        SortDirection::Descending => order.reverse(),
                    }
                });
                sorted
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_drone(id: u32, model: &str, price: f64) -> Drone {
        Drone {
            id,
            model: model.to_string(),
            camera: "4K".to_string(),
            flight: "30 min".to_string(),
            weight: "500 g".to_string(),
            price,
            rating: 4.0,
        }
    }

    #[test]
    fn test_budget_filter_example() {
        let drones = vec![make_drone(1, "A", 400.0), make_drone(2, "B", 900.0)];
        let view = DroneQuery::Band(PriceBand::Budget).apply(&drones);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].model, "A");
    }

    #[test]
    fn test_search_example() {
        let drones = vec![make_drone(1, "A", 400.0), make_drone(2, "B", 900.0)];
        let view = DroneQuery::Search("b".to_string()).apply(&drones);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].model, "B");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let drones = vec![
            make_drone(1, "DJI Mini 4 Pro", 999.0),
            make_drone(2, "Ryze Tello", 119.0),
        ];
        let view = DroneQuery::Search("dji".to_string()).apply(&drones);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, 1);
    }

    #[test]
    fn test_band_boundaries() {
        assert!(PriceBand::Budget.contains(499.99));
        assert!(!PriceBand::Budget.contains(500.0));
        assert!(PriceBand::Mid.contains(500.0));
        assert!(PriceBand::Mid.contains(1500.0));
        assert!(!PriceBand::Mid.contains(1500.01));
        assert!(PriceBand::Pro.contains(1500.01));
        assert!(!PriceBand::Pro.contains(1500.0));
    }

    #[test]
    fn test_filters_preserve_order_and_source() {
        let drones = vec![
            make_drone(1, "A", 400.0),
            make_drone(2, "B", 900.0),
            make_drone(3, "C", 450.0),
        ];
        let before = drones.clone();
        let view = DroneQuery::Band(PriceBand::Budget).apply(&drones);
        // Subsequence in original relative order
        assert_eq!(view.iter().map(|d| d.id).collect::<Vec<_>>(), vec![1, 3]);
        // Source untouched
        assert_eq!(drones, before);
    }

    #[test]
    fn test_sort_directions_invert() {
        let drones = vec![
            make_drone(1, "A", 900.0),
            make_drone(2, "B", 119.0),
            make_drone(3, "C", 2199.0),
        ];
        let asc = DroneQuery::SortByPrice(SortDirection::Ascending).apply(&drones);
        let desc = DroneQuery::SortByPrice(SortDirection::Descending).apply(&drones);
        assert_eq!(asc.iter().map(|d| d.id).collect::<Vec<_>>(), vec![2, 1, 3]);
        assert_eq!(desc.iter().map(|d| d.id).collect::<Vec<_>>(), vec![3, 1, 2]);
        // Both derive from the same unchanged base
        assert_eq!(drones[0].id, 1);
    }

    #[test]
    fn test_sort_toggle_is_self_inverse() {
        let dir = SortDirection::Ascending;
        assert_eq!(dir.toggled().toggled(), dir);
    }

    #[test]
    fn test_sort_tolerates_nan_price() {
        let drones = vec![make_drone(1, "A", f64::NAN), make_drone(2, "B", 100.0)];
        let view = DroneQuery::SortByPrice(SortDirection::Ascending).apply(&drones);
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn test_from_value() {
        assert_eq!(PriceBand::from_value("budget"), Some(PriceBand::Budget));
        assert_eq!(PriceBand::from_value("mid"), Some(PriceBand::Mid));
        assert_eq!(PriceBand::from_value("pro"), Some(PriceBand::Pro));
        assert_eq!(PriceBand::from_value("all"), None);
    }
}
