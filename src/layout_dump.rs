use crate::layout::{Layout, PathCommand};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Renderer-facing JSON view of a computed layout.
#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub width: f32,
    pub height: f32,
    pub node_width: f32,
    pub columns: usize,
    pub link_opacity: f32,
    pub background: String,
    pub nodes: Vec<NodeDump>,
    pub links: Vec<LinkDump>,
}

#[derive(Debug, Serialize)]
pub struct NodeDump {
    pub id: String,
    pub column: usize,
    pub total: f32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: String,
    pub label_anchor: [f32; 2],
}

#[derive(Debug, Serialize)]
pub struct LinkDump {
    pub source: String,
    pub dest: String,
    pub weight: f32,
    pub thickness: f32,
    pub color: String,
    pub path: Vec<SegmentDump>,
    pub label_anchor: [f32; 2],
}

/// One path instruction: an SVG-style op letter plus its coordinates.
#[derive(Debug, Serialize)]
pub struct SegmentDump {
    pub op: char,
    pub points: Vec<[f32; 2]>,
}

impl SegmentDump {
    fn from_command(command: &PathCommand) -> Self {
        match *command {
            PathCommand::MoveTo { x, y } => Self {
                op: 'M',
                points: vec![[x, y]],
            },
            PathCommand::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => Self {
                op: 'C',
                points: vec![[x1, y1], [x2, y2], [x, y]],
            },
            PathCommand::LineTo { x, y } => Self {
                op: 'L',
                points: vec![[x, y]],
            },
            PathCommand::Close => Self {
                op: 'Z',
                points: Vec::new(),
            },
        }
    }
}

impl LayoutDump {
    pub fn from_layout(layout: &Layout) -> Self {
        let nodes = layout
            .nodes
            .iter()
            .map(|node| NodeDump {
                id: node.id.clone(),
                column: node.column,
                total: node.total,
                x: node.x,
                y: node.y,
                width: node.width,
                height: node.height,
                color: node.color.clone(),
                label_anchor: [node.label_anchor.x, node.label_anchor.y],
            })
            .collect();

        let links = layout
            .links
            .iter()
            .map(|link| LinkDump {
                source: link.source.clone(),
                dest: link.dest.clone(),
                weight: link.weight,
                thickness: link.thickness,
                color: link.color.clone(),
                path: link.path.iter().map(SegmentDump::from_command).collect(),
                label_anchor: [link.label_anchor.x, link.label_anchor.y],
            })
            .collect();

        LayoutDump {
            width: layout.width,
            height: layout.height,
            node_width: layout.node_width,
            columns: layout.columns,
            link_opacity: layout.link_opacity,
            background: layout.background.clone(),
            nodes,
            links,
        }
    }
}

pub fn layout_json(layout: &Layout, pretty: bool) -> anyhow::Result<String> {
    let dump = LayoutDump::from_layout(layout);
    let json = if pretty {
        serde_json::to_string_pretty(&dump)?
    } else {
        serde_json::to_string(&dump)?
    };
    Ok(json)
}

pub fn write_layout_dump(path: &Path, layout: &Layout) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &LayoutDump::from_layout(layout))?;
    Ok(())
}
