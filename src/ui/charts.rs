use eframe::egui::{self, Color32, RichText, Ui};
use egui_plot::{Bar, BarChart, Plot, Points};
use egui_extras::{Column, TableBuilder};

use crate::data::filter::MapView;
use crate::data::model::{Pricing, StationDataset};
use crate::state::AppState;

const FREE_COLOR: Color32 = Color32::from_rgb(99, 190, 123);
const OTHER_COLOR: Color32 = Color32::from_rgb(248, 105, 107);

// ---------------------------------------------------------------------------
// Central panel
// ---------------------------------------------------------------------------

/// Render the central panel: optional raw-data table, the station map,
/// and the access-hours bar chart.
pub fn central_panel(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a station CSV to explore the data  (File → Open…)");
        });
        return;
    };

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("EV Station Data Visualization");

            if state.show_data {
                ui.add_space(8.0);
                ui.label("Below is the dataset of electric vehicle charging stations.");
                dataset_table(ui, dataset);
            }

            ui.add_space(8.0);
            ui.strong("Map of EV stations");
            map_section(ui, dataset, state);

            ui.add_space(8.0);
            ui.strong("Access Days Time and EV Pricing for Different Places");
            bar_section(ui, dataset, state);
        });
}

// ---------------------------------------------------------------------------
// Map – scatter of (longitude, latitude), sized by Level-2 count
// ---------------------------------------------------------------------------

fn map_section(ui: &mut Ui, dataset: &StationDataset, state: &AppState) {
    let markers = match &state.map_view {
        MapView::Prompt => {
            // Asked-for prompt, never a blank map.
            ui.label(RichText::new("Please select a power type to display the map.").italics());
            return;
        }
        MapView::Markers(markers) if markers.is_empty() => {
            ui.label(RichText::new("No stations match the current filters.").italics());
            return;
        }
        MapView::Markers(markers) => markers,
    };

    Plot::new("station_map")
        .height(320.0)
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .legend(egui_plot::Legend::default())
        .show(ui, |plot_ui| {
            for marker in markers {
                let rec = &dataset.records[marker.index];
                let color = state
                    .color_map
                    .as_ref()
                    .map(|cm| cm.color_for(rec.facility_type.as_deref()))
                    .unwrap_or(Color32::LIGHT_BLUE);

                // Marker area tracks the (null-safe) Level-2 count.
                let radius = 3.0 + (marker.level2_size as f32).sqrt() * 2.0;

                let points = Points::new(vec![[rec.longitude, rec.latitude]])
                    .radius(radius)
                    .color(color)
                    .name(rec.facility_type.as_deref().unwrap_or("unknown"));
                plot_ui.points(points);
            }
        });
}

// ---------------------------------------------------------------------------
// Bar chart – access score per station, coloured by pricing
// ---------------------------------------------------------------------------

fn bar_section(ui: &mut Ui, dataset: &StationDataset, state: &AppState) {
    if state.selection.state.is_unselected() || state.selection.city.is_unselected() {
        ui.label(RichText::new("Select a state and city to see access hours.").italics());
        return;
    }
    if state.bar_view.is_empty() {
        ui.label(RichText::new("No stations match the current filters.").italics());
        return;
    }

    // One chart per pricing category so the legend shows both colours.
    let mut free_bars = Vec::new();
    let mut other_bars = Vec::new();
    for (slot, &idx) in state.bar_view.iter().enumerate() {
        let rec = &dataset.records[idx];
        let bar = Bar::new(slot as f64, rec.access_score).name(&rec.station_name);
        match rec.pricing {
            Pricing::Free => free_bars.push(bar),
            Pricing::Other => other_bars.push(bar),
        }
    }

    Plot::new("access_bars")
        .height(320.0)
        .x_axis_label("Station")
        .y_axis_label("Access Days Time")
        .legend(egui_plot::Legend::default())
        .show(ui, |plot_ui| {
            if !free_bars.is_empty() {
                plot_ui.bar_chart(BarChart::new(free_bars).name("free").color(FREE_COLOR));
            }
            if !other_bars.is_empty() {
                plot_ui.bar_chart(BarChart::new(other_bars).name("other").color(OTHER_COLOR));
            }
        });
}

// ---------------------------------------------------------------------------
// Raw-data table
// ---------------------------------------------------------------------------

const TABLE_COLUMNS: [&str; 10] = [
    "Station Name",
    "State",
    "City",
    "Latitude",
    "Longitude",
    "Facility Type",
    "Level 2",
    "DC Fast",
    "Pricing",
    "Access Days Time",
];

fn dataset_table(ui: &mut Ui, dataset: &StationDataset) {
    let fmt_count = |n: Option<f64>| n.map(|v| format!("{v:.0}")).unwrap_or_default();

    egui::ScrollArea::horizontal()
        .id_salt("dataset_table_scroll")
        .show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .columns(Column::auto().resizable(true), TABLE_COLUMNS.len())
                .max_scroll_height(260.0)
                .header(20.0, |mut header| {
                    for title in TABLE_COLUMNS {
                        header.col(|ui| {
                            ui.strong(title);
                        });
                    }
                })
                .body(|body| {
                    body.rows(18.0, dataset.len(), |mut row| {
                        let rec = &dataset.records[row.index()];
                        row.col(|ui| {
                            ui.label(&rec.station_name);
                        });
                        row.col(|ui| {
                            ui.label(&rec.state);
                        });
                        row.col(|ui| {
                            ui.label(&rec.city);
                        });
                        row.col(|ui| {
                            ui.label(format!("{:.4}", rec.latitude));
                        });
                        row.col(|ui| {
                            ui.label(format!("{:.4}", rec.longitude));
                        });
                        row.col(|ui| {
                            ui.label(rec.facility_type.as_deref().unwrap_or(""));
                        });
                        row.col(|ui| {
                            ui.label(fmt_count(rec.level2_count));
                        });
                        row.col(|ui| {
                            ui.label(fmt_count(rec.dc_fast_count));
                        });
                        row.col(|ui| {
                            ui.label(rec.pricing.to_string());
                        });
                        row.col(|ui| {
                            ui.label(format!("{}", rec.access_score));
                        });
                    });
                });
        });
}
