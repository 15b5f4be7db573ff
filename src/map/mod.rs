// Flagged-country world map
// boundary: loads country shapes; flagged: which countries get highlighted;
// labels: name reconciliation and label placement; render: the PNG itself.

pub mod boundary;
pub mod flagged;
pub mod labels;
pub mod render;

pub use boundary::{BoundaryDataset, BoundaryFeature};
pub use flagged::FlaggedCountrySet;
pub use labels::{font_size_for_area, LabelPass, LabelPlacement, PlacedLabel, Reconciler};
pub use render::render_map;
