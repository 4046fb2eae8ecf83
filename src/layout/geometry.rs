use crate::config::LayoutConfig;
use crate::theme::Theme;

use super::graph::FlowGraph;
use super::pack::VerticalPacking;
use super::types::{Layout, LinkLayout, NodeLayout, PathCommand, Point};

/// Turn the packed graph into pixel geometry. Pure function of the
/// upstream derived values.
pub(super) fn emit_geometry(
    graph: &FlowGraph,
    columns: &[usize],
    column_count: usize,
    factor: f32,
    packing: &VerticalPacking,
    theme: &Theme,
    config: &LayoutConfig,
) -> Layout {
    let column_spacing = if column_count > 1 {
        (config.plot_width - config.node_width) / (column_count as f32 - 1.0)
    } else {
        config.plot_width
    };
    let curviness = column_spacing / 3.0;

    let node_colors: Vec<String> = (0..graph.node_count())
        .map(|node| resolve_node_color(graph, theme, node))
        .collect();

    let mut nodes = Vec::with_capacity(graph.node_count());
    for node in 0..graph.node_count() {
        let x = columns[node] as f32 * column_spacing;
        let y = packing.node_top[node];
        let height = graph.total_flow(node) * factor;
        nodes.push(NodeLayout {
            id: graph.node_ids[node].clone(),
            column: columns[node],
            total: graph.total_flow(node),
            x,
            y,
            width: config.node_width,
            height,
            color: node_colors[node].clone(),
            label_anchor: Point {
                x: x + config.node_width / 2.0,
                y: y + height / 2.0,
            },
        });
    }

    let mut links = Vec::with_capacity(graph.links.len());
    for (link_idx, link) in graph.links.iter().enumerate() {
        let thickness = link.weight * factor;
        let left = columns[link.from] as f32 * column_spacing;
        let right = columns[link.to] as f32 * column_spacing;
        let start_x = left + config.node_width;
        let from_y = packing.node_top[link.from] + packing.out_offset[link_idx];
        let to_y = packing.node_top[link.to] + packing.in_offset[link_idx];
        let color = link
            .color
            .clone()
            .unwrap_or_else(|| node_colors[link.from].clone());

        links.push(LinkLayout {
            source: graph.node_ids[link.from].clone(),
            dest: graph.node_ids[link.to].clone(),
            weight: link.weight,
            thickness,
            color,
            path: ribbon_path(start_x, from_y, right, to_y, thickness, curviness),
            label_anchor: Point {
                x: left + (right - left + config.node_width) / 2.0,
                y: from_y + (to_y - from_y) / 2.0,
            },
        });
    }

    Layout {
        width: config.plot_width,
        height: config.plot_height,
        node_width: config.node_width,
        columns: column_count,
        link_opacity: theme.link_opacity,
        background: theme.background.clone(),
        nodes,
        links,
    }
}

/// Closed band from the source's right edge to the dest's left edge: a
/// cubic across the top, down the band height, and a mirrored cubic back.
fn ribbon_path(
    start_x: f32,
    from_y: f32,
    end_x: f32,
    to_y: f32,
    thickness: f32,
    curviness: f32,
) -> Vec<PathCommand> {
    vec![
        PathCommand::MoveTo {
            x: start_x,
            y: from_y,
        },
        PathCommand::CurveTo {
            x1: start_x + curviness,
            y1: from_y,
            x2: end_x - curviness,
            y2: to_y,
            x: end_x,
            y: to_y,
        },
        PathCommand::LineTo {
            x: end_x,
            y: to_y + thickness,
        },
        PathCommand::CurveTo {
            x1: end_x - curviness,
            y1: to_y + thickness,
            x2: start_x + curviness,
            y2: from_y + thickness,
            x: start_x,
            y: from_y + thickness,
        },
        PathCommand::Close,
    ]
}

/// First outgoing link carrying an explicit color wins, then the palette
/// slot for the node's creation index.
fn resolve_node_color(graph: &FlowGraph, theme: &Theme, node: usize) -> String {
    for &link_idx in &graph.outgoing[node] {
        if let Some(color) = &graph.links[link_idx].color {
            return color.clone();
        }
    }
    theme.node_color(node).to_string()
}
