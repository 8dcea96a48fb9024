pub mod config;
pub mod entry;
pub mod error;
pub mod hit;
pub mod layout;
pub mod metrics;
pub mod render;
pub mod source;

pub use config::{LegendBorder, LegendConfig, LegendPosition};
pub use entry::{LegendEntry, SymbolKey};
pub use error::GraphpaneLegendError;
pub use hit::hit_test;
pub use layout::{compute_layout, LegendLayout};
pub use render::{draw_legend, LegendCanvas};
pub use source::{EntryProvider, LegendRoot};
