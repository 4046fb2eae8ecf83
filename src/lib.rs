#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, LayerMode, LayoutConfig, load_config};
pub use error::{EndpointSide, LayoutError};
pub use ir::{EdgeRecord, FlowData, parse_flow_json};
pub use layout::{Layout, LinkLayout, NodeLayout, PathCommand, Point, compute_layout};
pub use layout_dump::{LayoutDump, layout_json, write_layout_dump};
pub use theme::Theme;
