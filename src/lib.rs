#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod text_metrics;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{ChartConfig, Config, PlacementConfig, load_config};
pub use ir::{BubbleRecord, Category, Dataset, parse_dataset};
pub use layout::{ChartLayout, LayoutError, compute_layout};
pub use theme::Theme;
