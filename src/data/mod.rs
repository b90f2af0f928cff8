/// Data layer: core types, loading, and view derivation.
///
/// Architecture:
/// ```text
///    stations .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + normalize → StationDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ StationDataset  │  Vec<StationRecord>, selector indexes
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  selection state → bar view + map view
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
