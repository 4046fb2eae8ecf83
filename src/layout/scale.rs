use crate::config::LayoutConfig;

use super::graph::FlowGraph;

/// Global pixels-per-unit-weight factor, taken from the most constrained
/// column so that no column overflows the plot height.
pub(super) fn resolve_scale(
    graph: &FlowGraph,
    column_nodes: &[Vec<usize>],
    config: &LayoutConfig,
) -> f32 {
    let mut factor = f32::INFINITY;
    for nodes in column_nodes {
        let total: f32 = nodes.iter().map(|&node| graph.total_flow(node)).sum();
        if total <= 0.0 {
            // A zero-flow column imposes no height constraint.
            continue;
        }
        let available =
            (config.plot_height - (nodes.len() as f32 - 1.0) * config.node_padding).max(0.0);
        factor = factor.min(available / total);
    }
    if factor.is_finite() { factor } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::super::columns::{assign_columns, group_columns};
    use super::super::graph::build_graph;
    use super::*;
    use crate::config::LayerMode;
    use crate::ir::FlowData;

    fn scale_for(edges: &[(&str, &str, f32)], config: &LayoutConfig) -> f32 {
        let mut data = FlowData::new();
        for (source, dest, weight) in edges {
            data.push(source, dest, *weight);
        }
        let graph = build_graph(&data).expect("build failed");
        let columns = assign_columns(&graph, LayerMode::Strict).expect("assign failed");
        resolve_scale(&graph, &group_columns(&columns), config)
    }

    #[test]
    fn picks_the_tightest_column() {
        let config = LayoutConfig {
            plot_height: 100.0,
            node_padding: 10.0,
            ..LayoutConfig::default()
        };
        // Column 0 holds A and B (total 10, one padding gap); column 1
        // holds C alone (total 10, no gap). Column 0 wins: (100-10)/10.
        let factor = scale_for(&[("A", "C", 5.0), ("B", "C", 5.0)], &config);
        assert!((factor - 9.0).abs() < 1e-4);
    }

    #[test]
    fn zero_flow_columns_are_excluded() {
        let config = LayoutConfig {
            plot_height: 100.0,
            node_padding: 0.0,
            ..LayoutConfig::default()
        };
        // C sits alone in the last column with zero flow; it must not
        // poison the minimum with a division by zero.
        let factor = scale_for(
            &[("A", "B", 0.0), ("B", "C", 0.0), ("X", "Y", 10.0)],
            &config,
        );
        assert!((factor - 10.0).abs() < 1e-4);
    }

    #[test]
    fn all_zero_flow_collapses_to_zero() {
        let config = LayoutConfig::default();
        let factor = scale_for(&[("A", "B", 0.0)], &config);
        assert_eq!(factor, 0.0);
    }
}
