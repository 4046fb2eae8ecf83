use serde::{Deserialize, Serialize};

const FALLBACK_COLOR: &str = "#4e79a7";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    /// Categorical colors assigned to nodes, cycled by creation index.
    pub palette: Vec<String>,
    pub link_opacity: f32,
    pub background: String,
}

impl Theme {
    pub fn modern() -> Self {
        Self {
            palette: [
                "#4e79a7", "#f28e2c", "#e15759", "#76b7b2", "#59a14f", "#edc949", "#af7aa1",
                "#ff9da7", "#9c755f", "#bab0ab",
            ]
            .iter()
            .map(|color| color.to_string())
            .collect(),
            link_opacity: 0.3,
            background: "#FFFFFF".to_string(),
        }
    }

    /// Palette slot for a node, by creation index.
    pub fn node_color(&self, index: usize) -> &str {
        if self.palette.is_empty() {
            return FALLBACK_COLOR;
        }
        &self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::modern()
    }
}
