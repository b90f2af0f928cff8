use crate::color::ColorMap;
use crate::data::filter::{FilterSelection, MapView, bar_view, map_view};
use crate::data::model::{ChargerType, Pricing, Selection, StationDataset};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The dataset is read-only once ingested; every setter below only touches
/// the selection and the two cached views derived from it.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<StationDataset>,

    /// Current sidebar selections.
    pub selection: FilterSelection,

    /// Indices of rows feeding the bar chart (cached).
    pub bar_view: Vec<usize>,

    /// Map markers, or the "pick a charger level" prompt (cached).
    pub map_view: MapView,

    /// Whether the raw-data table is shown.  Session state, flipped only
    /// by the toolbar button, never reset automatically.
    pub show_data: bool,

    /// Facility-type colours for the map markers.
    pub color_map: Option<ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            selection: FilterSelection {
                state: Selection::Unselected,
                city: Selection::Unselected,
                time_range: (0.0, 0.0),
                pricing: Pricing::ALL.into_iter().collect(),
                charger: ChargerType::default(),
            },
            bar_view: Vec::new(),
            map_view: MapView::Prompt,
            show_data: false,
            color_map: None,
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset: reset the selection to its defaults,
    /// rebuild the facility-type colours, recompute both views.
    pub fn set_dataset(&mut self, dataset: StationDataset) {
        self.selection = FilterSelection::defaults_for(&dataset);
        self.color_map = Some(ColorMap::new(&dataset.facility_types()));
        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
        self.recompute();
    }

    /// Recompute both cached views after any selection change.
    pub fn recompute(&mut self) {
        if let Some(ds) = &self.dataset {
            self.selection.clamp_time_range(ds);
            self.bar_view = bar_view(ds, &self.selection);
            self.map_view = map_view(ds, &self.selection);
        } else {
            self.bar_view.clear();
            self.map_view = MapView::Prompt;
        }
    }

    /// Change the selected state.  The city cascade applies: any change,
    /// including clearing, resets the city to unselected.
    pub fn set_state(&mut self, state: Selection<String>) {
        if self.selection.state != state {
            self.selection.state = state;
            self.selection.city = Selection::Unselected;
            self.recompute();
        }
    }

    pub fn set_city(&mut self, city: Selection<String>) {
        if self.selection.city != city {
            self.selection.city = city;
            self.recompute();
        }
    }

    /// Set the access-time range; it is clamped to the dataset bounds
    /// during recomputation.
    pub fn set_time_range(&mut self, range: (f64, f64)) {
        if self.selection.time_range != range {
            self.selection.time_range = range;
            self.recompute();
        }
    }

    /// Toggle one pricing category in or out of the selected set.
    pub fn toggle_pricing(&mut self, pricing: Pricing) {
        if !self.selection.pricing.remove(&pricing) {
            self.selection.pricing.insert(pricing);
        }
        self.recompute();
    }

    pub fn set_charger(&mut self, charger: ChargerType) {
        if self.selection.charger != charger {
            self.selection.charger = charger;
            self.recompute();
        }
    }

    /// Flip the raw-data table visibility.
    pub fn toggle_show_data(&mut self) {
        self.show_data = !self.show_data;
    }
}
