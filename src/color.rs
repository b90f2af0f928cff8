use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: facility type → Color32
// ---------------------------------------------------------------------------

/// Maps the dataset's facility-type labels to distinct marker colours.
/// Stations without a facility type fall back to the default colour.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map from the set of facility-type labels.
    pub fn new(facility_types: &BTreeSet<String>) -> Self {
        let palette = generate_palette(facility_types.len());
        let mapping: BTreeMap<String, Color32> = facility_types
            .iter()
            .zip(palette)
            .map(|(label, color)| (label.clone(), color))
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a facility type (None → default grey).
    pub fn color_for(&self, facility_type: Option<&str>) -> Color32 {
        facility_type
            .and_then(|label| self.mapping.get(label))
            .copied()
            .unwrap_or(self.default_color)
    }

    /// Return the legend entries (label → colour) for the UI.
    pub fn legend_entries(&self) -> Vec<(String, Color32)> {
        self.mapping
            .iter()
            .map(|(label, color)| (label.clone(), *color))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colors_are_distinct() {
        let colors = generate_palette(6);
        assert_eq!(colors.len(), 6);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unknown_facility_type_gets_the_default_color() {
        let types: BTreeSet<String> = ["MUNI_GOV".to_string()].into_iter().collect();
        let cm = ColorMap::new(&types);
        assert_eq!(cm.color_for(None), Color32::GRAY);
        assert_eq!(cm.color_for(Some("SHOPPING_MALL")), Color32::GRAY);
        assert_ne!(cm.color_for(Some("MUNI_GOV")), Color32::GRAY);
    }
}
