use crate::config::LayoutConfig;

use super::graph::FlowGraph;

/// Vertical offsets for node rectangles and their link stacks.
#[derive(Debug)]
pub(super) struct VerticalPacking {
    /// Top edge of each node's rectangle.
    pub node_top: Vec<f32>,
    /// Offset of each link within its source node's outgoing stack.
    pub out_offset: Vec<f32>,
    /// Offset of each link within its dest node's incoming stack.
    pub in_offset: Vec<f32>,
}

pub(super) fn pack_columns(
    graph: &FlowGraph,
    column_nodes: &[Vec<usize>],
    factor: f32,
    config: &LayoutConfig,
) -> VerticalPacking {
    let mut node_top = vec![0.0f32; graph.node_count()];
    for nodes in column_nodes {
        let stack_height: f32 = nodes
            .iter()
            .map(|&node| graph.total_flow(node) * factor)
            .sum::<f32>()
            + nodes.len().saturating_sub(1) as f32 * config.node_padding;
        // The column's nodes are centered as one stacked block.
        let mut top = (config.plot_height - stack_height) / 2.0;
        for &node in nodes {
            node_top[node] = top;
            top += graph.total_flow(node) * factor + config.node_padding;
        }
    }

    // Link bands tile each node's height in incidence-list order, which is
    // input order. This is what keeps ribbons gap-free on both sides.
    let mut out_offset = vec![0.0f32; graph.links.len()];
    let mut in_offset = vec![0.0f32; graph.links.len()];
    for node in 0..graph.node_count() {
        let mut acc = 0.0f32;
        for &link_idx in &graph.outgoing[node] {
            out_offset[link_idx] = acc;
            acc += graph.links[link_idx].weight * factor;
        }
        let mut acc = 0.0f32;
        for &link_idx in &graph.incoming[node] {
            in_offset[link_idx] = acc;
            acc += graph.links[link_idx].weight * factor;
        }
    }

    VerticalPacking {
        node_top,
        out_offset,
        in_offset,
    }
}
