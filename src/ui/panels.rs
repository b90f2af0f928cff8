use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::{ChargerType, Pricing, Selection};
use crate::state::AppState;

/// Supplementary image shown above the filters (charging-level overview).
const CHARGING_LEVELS_IMAGE: &str = "assets/charging-levels.jpg";
const IMAGE_ATTRIBUTION: &str = "https://www.lifewire.com/ev-charging-levels-explained-5201716";

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    // ---- Charging-levels illustration (centered, optional asset) ----
    if std::path::Path::new(CHARGING_LEVELS_IMAGE).exists() {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.add(
                egui::Image::from_uri(format!("file://{CHARGING_LEVELS_IMAGE}"))
                    .max_width(ui.available_width() * 0.9)
                    .max_height(140.0)
                    .rounding(4.0),
            );
            ui.small(IMAGE_ATTRIBUTION);
        });
        ui.add_space(4.0);
    }

    ui.heading("Filters");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone what we need so we can mutate state inside the widgets.
    let states = dataset.states.clone();
    let cities: Vec<String> = state
        .selection
        .state
        .value()
        .map(|s| dataset.cities_in(s).to_vec())
        .unwrap_or_default();
    let bounds = dataset.access_bounds();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Charger-level selector ----
            ui.strong("Levels of EV Charging");
            let current = state.selection.charger;
            egui::ComboBox::from_id_salt("charger_type")
                .selected_text(current.label())
                .show_ui(ui, |ui: &mut Ui| {
                    for option in ChargerType::ALL {
                        if ui
                            .selectable_label(current == option, option.label())
                            .clicked()
                        {
                            state.set_charger(option);
                        }
                    }
                });
            ui.separator();

            // ---- State selector ----
            ui.strong("Choose a State");
            let state_label = state
                .selection
                .state
                .value()
                .cloned()
                .unwrap_or_else(|| "Select…".to_string());
            egui::ComboBox::from_id_salt("state_select")
                .selected_text(state_label)
                .show_ui(ui, |ui: &mut Ui| {
                    let none = state.selection.state.is_unselected();
                    if ui.selectable_label(none, "Select…").clicked() {
                        state.set_state(Selection::Unselected);
                    }
                    for name in &states {
                        let selected = state.selection.state.value() == Some(name);
                        if ui.selectable_label(selected, name).clicked() {
                            state.set_state(Selection::Value(name.clone()));
                        }
                    }
                });

            // ---- City selector (cascades from the state) ----
            if !state.selection.state.is_unselected() {
                ui.strong("Choose City");
                let city_label = state
                    .selection
                    .city
                    .value()
                    .cloned()
                    .unwrap_or_else(|| "Select…".to_string());
                egui::ComboBox::from_id_salt("city_select")
                    .selected_text(city_label)
                    .show_ui(ui, |ui: &mut Ui| {
                        let none = state.selection.city.is_unselected();
                        if ui.selectable_label(none, "Select…").clicked() {
                            state.set_city(Selection::Unselected);
                        }
                        for name in &cities {
                            let selected = state.selection.city.value() == Some(name);
                            if ui.selectable_label(selected, name).clicked() {
                                state.set_city(Selection::Value(name.clone()));
                            }
                        }
                    });
            }
            ui.separator();

            // ---- Access-time range ----
            ui.strong("Access Days Time Range");
            let (mut lo, mut hi) = state.selection.time_range;
            let changed = ui
                .add(egui::Slider::new(&mut lo, bounds.0..=bounds.1).text("from"))
                .changed()
                | ui.add(egui::Slider::new(&mut hi, bounds.0..=bounds.1).text("to"))
                    .changed();
            if changed {
                state.set_time_range((lo, hi));
            }
            ui.separator();

            // ---- Pricing categories ----
            ui.strong("EV Pricing");
            for pricing in Pricing::ALL {
                let mut checked = state.selection.pricing.contains(&pricing);
                if ui.checkbox(&mut checked, pricing.to_string()).changed() {
                    state.toggle_pricing(pricing);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} stations loaded, {} in bar view, {} on map",
                ds.len(),
                state.bar_view.len(),
                state.map_view.markers().len()
            ));

            ui.separator();

            let caption = if state.show_data {
                "Hide the Dataset"
            } else {
                "Click to see the Dataset"
            };
            if ui.button(caption).clicked() {
                state.toggle_show_data();
            }
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open station data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} stations across {} states",
                    dataset.len(),
                    dataset.states.len()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
                state.loading = false;
            }
        }
    }
}
