use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// ---------------------------------------------------------------------------
// Pricing – binary category derived from the raw "EV Pricing" column
// ---------------------------------------------------------------------------

/// Pricing category of a station, reduced from the free-text CSV value.
///
/// The reduction is irreversible and happens once at load time: the raw
/// value `"free"` maps to [`Pricing::Free`], everything else (including an
/// empty cell) to [`Pricing::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pricing {
    Free,
    Other,
}

impl Pricing {
    /// Reduce a raw pricing value to its category.  Idempotent: feeding a
    /// category's own label back in yields the same category.
    pub fn from_raw(raw: &str) -> Self {
        if raw == "free" {
            Pricing::Free
        } else {
            Pricing::Other
        }
    }

    /// Both categories, in display order.
    pub const ALL: [Pricing; 2] = [Pricing::Free, Pricing::Other];
}

impl fmt::Display for Pricing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pricing::Free => write!(f, "free"),
            Pricing::Other => write!(f, "other"),
        }
    }
}

// ---------------------------------------------------------------------------
// ChargerType – the power-level selector for the map view
// ---------------------------------------------------------------------------

/// Charger-level selector.  `Unselected` is a real state: the map view is
/// defined as empty until the user picks a level, while the bar chart keeps
/// rendering from the broader filter set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChargerType {
    #[default]
    Unselected,
    Both,
    Level2,
    DcFast,
}

impl ChargerType {
    pub const ALL: [ChargerType; 4] = [
        ChargerType::Unselected,
        ChargerType::Both,
        ChargerType::Level2,
        ChargerType::DcFast,
    ];

    /// Human-readable label for the selector widget.
    pub fn label(&self) -> &'static str {
        match self {
            ChargerType::Unselected => "Select…",
            ChargerType::Both => "Both",
            ChargerType::Level2 => "Level 2 EVSE",
            ChargerType::DcFast => "DC Fast",
        }
    }
}

// ---------------------------------------------------------------------------
// Selection – optional choice from a combo box
// ---------------------------------------------------------------------------

/// A combo-box choice: either nothing picked yet, or one concrete value.
///
/// Replaces the placeholder-string trick (`"Select"` as a magic row value)
/// so a genuine dataset entry can never collide with the sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection<T> {
    #[default]
    Unselected,
    Value(T),
}

impl<T> Selection<T> {
    pub fn is_unselected(&self) -> bool {
        matches!(self, Selection::Unselected)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Selection::Unselected => None,
            Selection::Value(v) => Some(v),
        }
    }
}

// ---------------------------------------------------------------------------
// StationRecord – one row of the source CSV
// ---------------------------------------------------------------------------

/// A single charging station (one CSV row), after normalization.
///
/// `state` and `city` are always text, whatever the source encoded
/// (numeric-looking names and null placeholders included).  The two
/// equipment counts stay optional: a missing count is unknown, renders with
/// marker size zero, and never satisfies a `> 0` charger predicate.
#[derive(Debug, Clone)]
pub struct StationRecord {
    pub station_name: String,
    pub state: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub facility_type: Option<String>,
    pub level2_count: Option<f64>,
    pub dc_fast_count: Option<f64>,
    pub pricing: Pricing,
    /// Availability-window score ("Access Days Time2" in the source).
    pub access_score: f64,
}

// ---------------------------------------------------------------------------
// StationDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full normalized dataset with pre-computed selector indexes.
///
/// Loaded once per session and read-only afterwards; every filter change
/// derives index views from it without mutating the records.
#[derive(Debug, Clone)]
pub struct StationDataset {
    /// All stations, in original row order.
    pub records: Vec<StationRecord>,
    /// Sorted distinct state names.
    pub states: Vec<String>,
    /// Sorted distinct city names per state.
    cities_by_state: BTreeMap<String, Vec<String>>,
    /// Global `[min, max]` of the access score.
    access_bounds: (f64, f64),
}

impl StationDataset {
    /// Build the selector indexes from the loaded records.
    pub fn from_records(records: Vec<StationRecord>) -> Self {
        let mut city_sets: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for rec in &records {
            city_sets
                .entry(rec.state.clone())
                .or_default()
                .insert(rec.city.clone());
        }

        let states: Vec<String> = city_sets.keys().cloned().collect();
        let cities_by_state: BTreeMap<String, Vec<String>> = city_sets
            .into_iter()
            .map(|(state, cities)| (state, cities.into_iter().collect()))
            .collect();

        let mut access_bounds = (f64::INFINITY, f64::NEG_INFINITY);
        for rec in &records {
            access_bounds.0 = access_bounds.0.min(rec.access_score);
            access_bounds.1 = access_bounds.1.max(rec.access_score);
        }
        if records.is_empty() {
            access_bounds = (0.0, 0.0);
        }

        StationDataset {
            records,
            states,
            cities_by_state,
            access_bounds,
        }
    }

    /// Sorted cities available within one state.
    pub fn cities_in(&self, state: &str) -> &[String] {
        self.cities_by_state
            .get(state)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Global `[min, max]` of the access score; `(0, 0)` for an empty set.
    pub fn access_bounds(&self) -> (f64, f64) {
        self.access_bounds
    }

    /// Sorted distinct facility-type labels (for the map color legend).
    pub fn facility_types(&self) -> BTreeSet<String> {
        self.records
            .iter()
            .filter_map(|r| r.facility_type.clone())
            .collect()
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(state: &str, city: &str, score: f64) -> StationRecord {
        StationRecord {
            station_name: format!("{city} station"),
            state: state.to_string(),
            city: city.to_string(),
            latitude: 0.0,
            longitude: 0.0,
            facility_type: None,
            level2_count: None,
            dc_fast_count: None,
            pricing: Pricing::Other,
            access_score: score,
        }
    }

    #[test]
    fn pricing_reduction_is_idempotent() {
        for raw in ["free", "Free", "", "$1.50/hr", "other"] {
            let once = Pricing::from_raw(raw);
            let twice = Pricing::from_raw(&once.to_string());
            assert_eq!(once, twice);
        }
        assert_eq!(Pricing::from_raw("free"), Pricing::Free);
        assert_eq!(Pricing::from_raw("FREE"), Pricing::Other);
    }

    #[test]
    fn dataset_indexes_states_and_cities_sorted() {
        let ds = StationDataset::from_records(vec![
            record("TX", "Austin", 3.0),
            record("CA", "Palo Alto", 5.0),
            record("CA", "Fresno", 1.0),
            record("CA", "Palo Alto", 2.0),
        ]);
        assert_eq!(ds.states, vec!["CA", "TX"]);
        assert_eq!(ds.cities_in("CA"), ["Fresno", "Palo Alto"]);
        assert_eq!(ds.cities_in("TX"), ["Austin"]);
        assert!(ds.cities_in("NV").is_empty());
        assert_eq!(ds.access_bounds(), (1.0, 5.0));
    }

    #[test]
    fn empty_dataset_has_zero_bounds() {
        let ds = StationDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.access_bounds(), (0.0, 0.0));
    }
}
