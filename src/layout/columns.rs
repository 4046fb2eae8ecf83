use std::collections::VecDeque;

use crate::config::LayerMode;
use crate::error::LayoutError;

use super::graph::FlowGraph;

/// Assign a column index to every node.
pub(super) fn assign_columns(
    graph: &FlowGraph,
    mode: LayerMode,
) -> Result<Vec<usize>, LayoutError> {
    match mode {
        LayerMode::Strict => layer_topological(graph),
        LayerMode::InputOrder => Ok(layer_input_order(graph)),
    }
}

/// Kahn's algorithm, then longest-path columns along the topological order.
fn layer_topological(graph: &FlowGraph) -> Result<Vec<usize>, LayoutError> {
    let node_count = graph.node_count();
    let mut indegree: Vec<usize> = (0..node_count).map(|node| graph.incoming[node].len()).collect();
    let mut queue: VecDeque<usize> = indegree
        .iter()
        .enumerate()
        .filter_map(|(node, deg)| (*deg == 0).then_some(node))
        .collect();
    let mut topo = Vec::with_capacity(node_count);
    while let Some(node) = queue.pop_front() {
        topo.push(node);
        for &link_idx in &graph.outgoing[node] {
            let to = graph.links[link_idx].to;
            indegree[to] -= 1;
            if indegree[to] == 0 {
                queue.push_back(to);
            }
        }
    }

    if topo.len() != node_count {
        // Every unprocessed node sits on or downstream of a cycle; report
        // the first one in creation order.
        let node = (0..node_count)
            .find(|node| indegree[*node] > 0)
            .unwrap_or(0);
        return Err(LayoutError::CyclicGraph {
            node: graph.node_ids[node].clone(),
        });
    }

    let mut columns = vec![0usize; node_count];
    for &node in &topo {
        for &link_idx in &graph.outgoing[node] {
            let to = graph.links[link_idx].to;
            columns[to] = columns[to].max(columns[node] + 1);
        }
    }
    Ok(columns)
}

/// Single forward pass in node creation order. A source that has not been
/// layered yet still reads as column 0, so out-of-order producers and
/// cycles yield too-small columns rather than an error.
fn layer_input_order(graph: &FlowGraph) -> Vec<usize> {
    let mut columns = vec![0usize; graph.node_count()];
    for node in 0..graph.node_count() {
        if graph.incoming[node].is_empty() {
            continue;
        }
        let mut from_column = 0;
        for &link_idx in &graph.incoming[node] {
            from_column = from_column.max(columns[graph.links[link_idx].from]);
        }
        columns[node] = from_column + 1;
    }
    columns
}

/// Node indices grouped by column, creation order within each group.
pub(super) fn group_columns(columns: &[usize]) -> Vec<Vec<usize>> {
    let column_count = columns.iter().copied().max().map_or(0, |max| max + 1);
    let mut groups: Vec<Vec<usize>> = vec![Vec::new(); column_count];
    for (node, &column) in columns.iter().enumerate() {
        groups[column].push(node);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::super::graph::build_graph;
    use super::*;
    use crate::ir::FlowData;

    fn graph(edges: &[(&str, &str, f32)]) -> FlowGraph {
        let mut data = FlowData::new();
        for (source, dest, weight) in edges {
            data.push(source, dest, *weight);
        }
        build_graph(&data).expect("build failed")
    }

    fn column_of(graph: &FlowGraph, columns: &[usize], id: &str) -> usize {
        let node = graph.node_ids.iter().position(|n| n == id).unwrap();
        columns[node]
    }

    #[test]
    fn strict_layers_out_of_order_producers() {
        let g = graph(&[("C", "D", 1.0), ("A", "B", 1.0), ("B", "C", 1.0)]);
        let columns = assign_columns(&g, LayerMode::Strict).expect("assign failed");
        assert_eq!(column_of(&g, &columns, "A"), 0);
        assert_eq!(column_of(&g, &columns, "B"), 1);
        assert_eq!(column_of(&g, &columns, "C"), 2);
        assert_eq!(column_of(&g, &columns, "D"), 3);
    }

    #[test]
    fn strict_rejects_cycles() {
        let g = graph(&[("A", "B", 1.0), ("B", "C", 1.0), ("C", "A", 1.0)]);
        let err = assign_columns(&g, LayerMode::Strict).unwrap_err();
        assert!(matches!(err, LayoutError::CyclicGraph { .. }));
    }

    #[test]
    fn input_order_reads_stale_columns() {
        // C is created first and reads B's column before B is layered.
        let g = graph(&[("C", "D", 1.0), ("A", "B", 1.0), ("B", "C", 1.0)]);
        let columns = assign_columns(&g, LayerMode::InputOrder).expect("assign failed");
        assert_eq!(column_of(&g, &columns, "C"), 1);
        assert_eq!(column_of(&g, &columns, "B"), 1);
    }

    #[test]
    fn input_order_tolerates_cycles() {
        let g = graph(&[("A", "B", 1.0), ("B", "A", 1.0)]);
        let columns = assign_columns(&g, LayerMode::InputOrder).expect("assign failed");
        assert_eq!(columns.len(), 2);
    }

    #[test]
    fn groups_preserve_creation_order() {
        let g = graph(&[("A", "C", 1.0), ("B", "C", 1.0)]);
        let columns = assign_columns(&g, LayerMode::Strict).expect("assign failed");
        let groups = group_columns(&columns);
        assert_eq!(groups.len(), 2);
        let first: Vec<&str> = groups[0].iter().map(|&n| g.node_ids[n].as_str()).collect();
        assert_eq!(first, vec!["A", "B"]);
    }
}
