//! Sankey layout pipeline: build the incidence graph, assign columns,
//! resolve the global scale factor, pack columns vertically, emit geometry.
//! One pass recomputes everything; there is no incremental path.

mod columns;
mod geometry;
mod graph;
mod pack;
mod scale;
mod types;

pub use types::{Layout, LinkLayout, NodeLayout, PathCommand, Point};

use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::ir::FlowData;
use crate::theme::Theme;

pub fn compute_layout(
    data: &FlowData,
    theme: &Theme,
    config: &LayoutConfig,
) -> Result<Layout, LayoutError> {
    let graph = graph::build_graph(data)?;
    let node_columns = columns::assign_columns(&graph, config.layering)?;
    let column_nodes = columns::group_columns(&node_columns);
    let factor = scale::resolve_scale(&graph, &column_nodes, config);
    let packing = pack::pack_columns(&graph, &column_nodes, factor, config);
    Ok(geometry::emit_geometry(
        &graph,
        &node_columns,
        column_nodes.len(),
        factor,
        &packing,
        theme,
        config,
    ))
}
