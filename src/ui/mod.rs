/// Rendering layer: egui widgets consuming the derived views.
///
/// Everything here is presentational; all filtering decisions live in
/// [`crate::data::filter`] and are only read back as cached views.
pub mod charts;
pub mod panels;
