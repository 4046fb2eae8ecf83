use std::collections::HashMap;

use crate::error::{EndpointSide, LayoutError};
use crate::ir::FlowData;

/// Index-based incidence structure built fresh for every layout pass, so
/// stale incidence lists cannot leak between passes.
#[derive(Debug)]
pub(super) struct FlowGraph {
    /// Node ids in first-seen order.
    pub node_ids: Vec<String>,
    /// Links in input order.
    pub links: Vec<LinkData>,
    /// Per node, incoming link indices in input order.
    pub incoming: Vec<Vec<usize>>,
    /// Per node, outgoing link indices in input order.
    pub outgoing: Vec<Vec<usize>>,
    pub in_total: Vec<f32>,
    pub out_total: Vec<f32>,
}

#[derive(Debug, Clone)]
pub(super) struct LinkData {
    pub from: usize,
    pub to: usize,
    pub weight: f32,
    pub color: Option<String>,
}

impl FlowGraph {
    pub fn node_count(&self) -> usize {
        self.node_ids.len()
    }

    /// Larger of the incoming and outgoing weight sums.
    pub fn total_flow(&self, node: usize) -> f32 {
        self.in_total[node].max(self.out_total[node])
    }
}

pub(super) fn build_graph(data: &FlowData) -> Result<FlowGraph, LayoutError> {
    let mut graph = FlowGraph {
        node_ids: Vec::new(),
        links: Vec::new(),
        incoming: Vec::new(),
        outgoing: Vec::new(),
        in_total: Vec::new(),
        out_total: Vec::new(),
    };
    let mut index: HashMap<String, usize> = HashMap::new();

    for (edge_idx, edge) in data.edges.iter().enumerate() {
        if edge.source.trim().is_empty() {
            return Err(LayoutError::UnresolvedReference {
                index: edge_idx,
                side: EndpointSide::Source,
            });
        }
        if edge.dest.trim().is_empty() {
            return Err(LayoutError::UnresolvedReference {
                index: edge_idx,
                side: EndpointSide::Dest,
            });
        }
        if !edge.weight.is_finite() || edge.weight < 0.0 {
            return Err(LayoutError::InvalidWeight {
                index: edge_idx,
                src: edge.source.clone(),
                dest: edge.dest.clone(),
                weight: edge.weight,
            });
        }

        let from = intern(&mut graph, &mut index, &edge.source);
        let to = intern(&mut graph, &mut index, &edge.dest);
        let link_idx = graph.links.len();
        graph.links.push(LinkData {
            from,
            to,
            weight: edge.weight,
            color: edge.color.clone(),
        });
        graph.outgoing[from].push(link_idx);
        graph.incoming[to].push(link_idx);
        graph.out_total[from] += edge.weight;
        graph.in_total[to] += edge.weight;
    }

    Ok(graph)
}

fn intern(graph: &mut FlowGraph, index: &mut HashMap<String, usize>, id: &str) -> usize {
    if let Some(&idx) = index.get(id) {
        return idx;
    }
    let idx = graph.node_ids.len();
    index.insert(id.to_string(), idx);
    graph.node_ids.push(id.to_string());
    graph.incoming.push(Vec::new());
    graph.outgoing.push(Vec::new());
    graph.in_total.push(0.0);
    graph.out_total.push(0.0);
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flow(edges: &[(&str, &str, f32)]) -> FlowData {
        let mut data = FlowData::new();
        for (source, dest, weight) in edges {
            data.push(source, dest, *weight);
        }
        data
    }

    #[test]
    fn nodes_dedupe_in_first_seen_order() {
        let graph = build_graph(&flow(&[("A", "C", 5.0), ("B", "C", 5.0), ("C", "D", 10.0)]))
            .expect("build failed");
        assert_eq!(graph.node_ids, vec!["A", "C", "B", "D"]);
        assert_eq!(graph.links.len(), 3);
    }

    #[test]
    fn incidence_lists_keep_input_order() {
        let graph = build_graph(&flow(&[("A", "C", 1.0), ("B", "C", 2.0), ("A", "D", 3.0)]))
            .expect("build failed");
        let a = graph.node_ids.iter().position(|id| id == "A").unwrap();
        let c = graph.node_ids.iter().position(|id| id == "C").unwrap();
        assert_eq!(graph.outgoing[a], vec![0, 2]);
        assert_eq!(graph.incoming[c], vec![0, 1]);
    }

    #[test]
    fn total_flow_takes_larger_side() {
        let graph = build_graph(&flow(&[("A", "B", 4.0), ("B", "C", 9.0)])).expect("build failed");
        let b = graph.node_ids.iter().position(|id| id == "B").unwrap();
        assert_eq!(graph.total_flow(b), 9.0);
    }

    #[test]
    fn negative_weight_aborts_with_record_index() {
        let err = build_graph(&flow(&[("A", "B", 1.0), ("B", "C", -1.0)])).unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidWeight {
                index: 1,
                src: "B".to_string(),
                dest: "C".to_string(),
                weight: -1.0,
            }
        );
    }

    #[test]
    fn non_finite_weight_is_rejected() {
        let err = build_graph(&flow(&[("A", "B", f32::NAN)])).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidWeight { index: 0, .. }));
    }

    #[test]
    fn blank_id_is_rejected() {
        let err = build_graph(&flow(&[("A", "  ", 1.0)])).unwrap_err();
        assert_eq!(
            err,
            LayoutError::UnresolvedReference {
                index: 0,
                side: EndpointSide::Dest,
            }
        );
    }
}
