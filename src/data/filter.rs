use std::collections::BTreeSet;

use super::model::{ChargerType, Pricing, Selection, StationDataset, StationRecord};

// ---------------------------------------------------------------------------
// FilterSelection – the full sidebar selection tuple
// ---------------------------------------------------------------------------

/// Current filter selections, one field per sidebar control.
///
/// `city` is only meaningful while `state` is selected; [`crate::state`]
/// enforces the cascade by resetting it whenever the state changes.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
    pub state: Selection<String>,
    pub city: Selection<String>,
    /// Inclusive access-score interval, clamped to the dataset bounds.
    pub time_range: (f64, f64),
    /// Selected pricing categories.  An empty set matches nothing.
    pub pricing: BTreeSet<Pricing>,
    pub charger: ChargerType,
}

impl FilterSelection {
    /// Default selection for a freshly loaded dataset: nothing picked,
    /// full time range, both pricing categories.
    pub fn defaults_for(dataset: &StationDataset) -> Self {
        FilterSelection {
            state: Selection::Unselected,
            city: Selection::Unselected,
            time_range: dataset.access_bounds(),
            pricing: Pricing::ALL.into_iter().collect(),
            charger: ChargerType::default(),
        }
    }

    /// Clamp the time range to the dataset's global bounds and keep it
    /// ordered (`min <= max`).
    pub fn clamp_time_range(&mut self, dataset: &StationDataset) {
        let (lo, hi) = dataset.access_bounds();
        self.time_range.0 = self.time_range.0.clamp(lo, hi);
        self.time_range.1 = self.time_range.1.clamp(lo, hi);
        if self.time_range.0 > self.time_range.1 {
            self.time_range.1 = self.time_range.0;
        }
    }
}

// ---------------------------------------------------------------------------
// MapView – result of the map derivation
// ---------------------------------------------------------------------------

/// One station to draw on the map, with its marker size already made
/// null-safe (missing Level-2 count renders as zero).
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    /// Index into `dataset.records`.
    pub index: usize,
    /// Level-2 EVSE count, coerced to 0 when missing.
    pub level2_size: f64,
}

/// The map derivation either yields markers or asks the caller to render a
/// "pick a charger level" prompt.  A prompt is not an empty marker list:
/// the UI must never show a blank map for an unselected charger type.
#[derive(Debug, Clone, PartialEq)]
pub enum MapView {
    Prompt,
    Markers(Vec<MapMarker>),
}

impl MapView {
    pub fn markers(&self) -> &[MapMarker] {
        match self {
            MapView::Prompt => &[],
            MapView::Markers(m) => m,
        }
    }
}

// ---------------------------------------------------------------------------
// View derivation
// ---------------------------------------------------------------------------

/// The predicate shared by both views: state, city, time range, pricing.
///
/// An unselected state or city matches no row at all — selecting nothing
/// yields an empty view, which the UI surfaces as an explicit affordance.
fn common_predicate(rec: &StationRecord, sel: &FilterSelection) -> bool {
    let (Some(state), Some(city)) = (sel.state.value(), sel.city.value()) else {
        return false;
    };
    rec.state == *state
        && rec.city == *city
        && rec.access_score >= sel.time_range.0
        && rec.access_score <= sel.time_range.1
        && sel.pricing.contains(&rec.pricing)
}

/// Indices of the rows feeding the bar chart, in original row order:
/// state, city, time range, and pricing filters applied.
pub fn bar_view(dataset: &StationDataset, sel: &FilterSelection) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| common_predicate(rec, sel))
        .map(|(i, _)| i)
        .collect()
}

/// Map markers: the bar-view predicate plus the charger-level predicate.
///
/// A missing equipment count never satisfies `> 0`, so `Level2` and
/// `DcFast` only return stations with a known positive count.
pub fn map_view(dataset: &StationDataset, sel: &FilterSelection) -> MapView {
    if sel.charger == ChargerType::Unselected {
        return MapView::Prompt;
    }

    let keep = |rec: &StationRecord| match sel.charger {
        ChargerType::Unselected => false,
        ChargerType::Both => true,
        ChargerType::Level2 => rec.level2_count.is_some_and(|n| n > 0.0),
        ChargerType::DcFast => rec.dc_fast_count.is_some_and(|n| n > 0.0),
    };

    let markers = dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| common_predicate(rec, sel) && keep(rec))
        .map(|(i, rec)| MapMarker {
            index: i,
            level2_size: rec.level2_count.unwrap_or(0.0),
        })
        .collect();

    MapView::Markers(markers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(
        name: &str,
        state: &str,
        city: &str,
        level2: Option<f64>,
        dc_fast: Option<f64>,
        pricing: Pricing,
        score: f64,
    ) -> StationRecord {
        StationRecord {
            station_name: name.to_string(),
            state: state.to_string(),
            city: city.to_string(),
            latitude: 37.4,
            longitude: -122.1,
            facility_type: Some("PUBLIC".to_string()),
            level2_count: level2,
            dc_fast_count: dc_fast,
            pricing,
            access_score: score,
        }
    }

    /// Three Palo Alto rows (two Level-2-positive), plus noise rows in
    /// another city and another state.
    fn sample_dataset() -> StationDataset {
        StationDataset::from_records(vec![
            station("PA-1", "CA", "Palo Alto", Some(4.0), None, Pricing::Free, 5.0),
            station("FR-1", "CA", "Fresno", Some(2.0), Some(1.0), Pricing::Other, 3.0),
            station("PA-2", "CA", "Palo Alto", Some(2.0), Some(1.0), Pricing::Other, 2.0),
            station("AU-1", "TX", "Austin", Some(6.0), None, Pricing::Free, 7.0),
            station("PA-3", "CA", "Palo Alto", None, Some(3.0), Pricing::Other, 4.0),
        ])
    }

    fn palo_alto_selection(ds: &StationDataset) -> FilterSelection {
        let mut sel = FilterSelection::defaults_for(ds);
        sel.state = Selection::Value("CA".to_string());
        sel.city = Selection::Value("Palo Alto".to_string());
        sel
    }

    #[test]
    fn bar_view_matches_state_and_city_exactly() {
        let ds = sample_dataset();
        let sel = palo_alto_selection(&ds);
        let rows = bar_view(&ds, &sel);
        assert_eq!(rows, vec![0, 2, 4]);
        for &i in &rows {
            assert_eq!(ds.records[i].state, "CA");
            assert_eq!(ds.records[i].city, "Palo Alto");
        }
    }

    #[test]
    fn unselected_state_or_city_yields_empty_bar_view() {
        let ds = sample_dataset();
        let mut sel = FilterSelection::defaults_for(&ds);
        assert!(bar_view(&ds, &sel).is_empty());

        sel.state = Selection::Value("CA".to_string());
        assert!(bar_view(&ds, &sel).is_empty());
    }

    #[test]
    fn charger_both_returns_exactly_the_bar_rows() {
        let ds = sample_dataset();
        let mut sel = palo_alto_selection(&ds);
        sel.charger = ChargerType::Both;

        let bars = bar_view(&ds, &sel);
        let MapView::Markers(markers) = map_view(&ds, &sel) else {
            panic!("expected markers");
        };
        let marker_rows: Vec<usize> = markers.iter().map(|m| m.index).collect();
        assert_eq!(marker_rows, bars);
    }

    #[test]
    fn level2_filter_drops_rows_without_positive_count() {
        let ds = sample_dataset();
        let mut sel = palo_alto_selection(&ds);
        sel.charger = ChargerType::Level2;

        let MapView::Markers(markers) = map_view(&ds, &sel) else {
            panic!("expected markers");
        };
        // The worked example: 3 bar rows, 2 of them Level-2-positive.
        assert_eq!(bar_view(&ds, &sel).len(), 3);
        assert_eq!(markers.len(), 2);
        for m in &markers {
            assert!(ds.records[m.index].level2_count.is_some_and(|n| n > 0.0));
        }
    }

    #[test]
    fn dc_fast_filter_drops_rows_without_positive_count() {
        let ds = sample_dataset();
        let mut sel = palo_alto_selection(&ds);
        sel.charger = ChargerType::DcFast;

        let MapView::Markers(markers) = map_view(&ds, &sel) else {
            panic!("expected markers");
        };
        assert_eq!(markers.len(), 2); // PA-2 and PA-3
        for m in &markers {
            assert!(ds.records[m.index].dc_fast_count.is_some_and(|n| n > 0.0));
        }
    }

    #[test]
    fn unselected_charger_is_a_prompt_regardless_of_other_filters() {
        let ds = sample_dataset();
        let sel = palo_alto_selection(&ds);
        assert_eq!(map_view(&ds, &sel), MapView::Prompt);
        assert!(map_view(&ds, &sel).markers().is_empty());
    }

    #[test]
    fn missing_level2_count_renders_with_size_zero() {
        let ds = sample_dataset();
        let mut sel = palo_alto_selection(&ds);
        sel.charger = ChargerType::Both;

        let MapView::Markers(markers) = map_view(&ds, &sel) else {
            panic!("expected markers");
        };
        let pa3 = markers.iter().find(|m| m.index == 4).unwrap();
        assert_eq!(pa3.level2_size, 0.0);
    }

    #[test]
    fn full_time_range_filters_nothing_extra() {
        let ds = sample_dataset();
        let sel = palo_alto_selection(&ds);
        let full = bar_view(&ds, &sel);

        let mut narrowed = sel.clone();
        narrowed.time_range = (3.0, 5.0);
        let subset = bar_view(&ds, &narrowed);
        assert_eq!(subset, vec![0, 4]);
        assert!(subset.iter().all(|i| full.contains(i)));
    }

    #[test]
    fn time_range_is_clamped_to_dataset_bounds() {
        let ds = sample_dataset();
        let mut sel = palo_alto_selection(&ds);
        sel.time_range = (-100.0, 100.0);
        sel.clamp_time_range(&ds);
        assert_eq!(sel.time_range, ds.access_bounds());

        sel.time_range = (6.0, 3.0);
        sel.clamp_time_range(&ds);
        assert!(sel.time_range.0 <= sel.time_range.1);
    }

    #[test]
    fn pricing_filter_and_empty_pricing_set() {
        let ds = sample_dataset();
        let mut sel = palo_alto_selection(&ds);

        sel.pricing = [Pricing::Free].into_iter().collect();
        assert_eq!(bar_view(&ds, &sel), vec![0]);

        sel.pricing.clear();
        assert!(bar_view(&ds, &sel).is_empty());
    }
}
