use serde::{Deserialize, Serialize};

/// One weighted edge of the flow diagram, as handed over by the data source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: String,
    pub dest: String,
    pub weight: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Ordered edge list for one diagram. Edge order is meaningful: it seeds
/// node creation order, which in turn drives column tie-breaks and band
/// stacking order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlowData {
    pub edges: Vec<EdgeRecord>,
}

impl FlowData {
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    pub fn push(&mut self, source: &str, dest: &str, weight: f32) {
        self.edges.push(EdgeRecord {
            source: source.to_string(),
            dest: dest.to_string(),
            weight,
            color: None,
        });
    }

    pub fn push_colored(&mut self, source: &str, dest: &str, weight: f32, color: &str) {
        self.edges.push(EdgeRecord {
            source: source.to_string(),
            dest: dest.to_string(),
            weight,
            color: Some(color.to_string()),
        });
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum InputDoc {
    Wrapped(FlowData),
    Bare(Vec<EdgeRecord>),
}

/// Parse an edge list document: either `{"edges": [...]}` or a bare array
/// of edge records.
pub fn parse_flow_json(input: &str) -> serde_json::Result<FlowData> {
    let doc: InputDoc = serde_json::from_str(input)?;
    Ok(match doc {
        InputDoc::Wrapped(data) => data,
        InputDoc::Bare(edges) => FlowData { edges },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wrapped_document() {
        let data = parse_flow_json(r#"{"edges": [{"source": "A", "dest": "B", "weight": 2.5}]}"#)
            .expect("parse failed");
        assert_eq!(data.edges.len(), 1);
        assert_eq!(data.edges[0].source, "A");
        assert_eq!(data.edges[0].weight, 2.5);
        assert!(data.edges[0].color.is_none());
    }

    #[test]
    fn parses_bare_array() {
        let data = parse_flow_json(
            r##"[{"source": "A", "dest": "B", "weight": 1, "color": "#0f6cb6"}]"##,
        )
        .expect("parse failed");
        assert_eq!(data.edges.len(), 1);
        assert_eq!(data.edges[0].color.as_deref(), Some("#0f6cb6"));
    }
}
