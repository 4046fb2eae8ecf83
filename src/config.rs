use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How column indices are assigned to nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayerMode {
    /// Topological layering; cyclic input is rejected with an error.
    Strict,
    /// Single forward pass in node creation order. A source that has not
    /// been layered yet reads as column 0, so producers listed after their
    /// consumers (and cycles) yield too-small columns instead of an error.
    InputOrder,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub plot_width: f32,
    pub plot_height: f32,
    pub node_width: f32,
    /// Vertical gap between stacked nodes within a column.
    pub node_padding: f32,
    pub layering: LayerMode,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            plot_width: 600.0,
            plot_height: 400.0,
            node_width: 21.0,
            node_padding: 10.0,
            layering: LayerMode::Strict,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub layout: LayoutConfig,
    pub theme: Theme,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    plot_width: Option<f32>,
    plot_height: Option<f32>,
    node_width: Option<f32>,
    node_padding: Option<f32>,
    layering: Option<LayerMode>,
    palette: Option<Vec<String>>,
    link_opacity: Option<f32>,
    background: Option<String>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;

    if let Some(v) = parsed.plot_width {
        config.layout.plot_width = v;
    }
    if let Some(v) = parsed.plot_height {
        config.layout.plot_height = v;
    }
    if let Some(v) = parsed.node_width {
        config.layout.node_width = v;
    }
    if let Some(v) = parsed.node_padding {
        config.layout.node_padding = v;
    }
    if let Some(v) = parsed.layering {
        config.layout.layering = v;
    }
    if let Some(v) = parsed.palette {
        config.theme.palette = v;
    }
    if let Some(v) = parsed.link_opacity {
        config.theme.link_opacity = v;
    }
    if let Some(v) = parsed.background {
        config.theme.background = v;
    }

    Ok(config)
}
