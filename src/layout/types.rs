/// A point in plot space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// One instruction of a ribbon outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo {
        x: f32,
        y: f32,
    },
    /// Cubic curve to (x, y) with control points (x1, y1) and (x2, y2).
    CurveTo {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        x: f32,
        y: f32,
    },
    LineTo {
        x: f32,
        y: f32,
    },
    Close,
}

#[derive(Debug, Clone)]
pub struct NodeLayout {
    pub id: String,
    pub column: usize,
    /// Larger of the node's incoming and outgoing weight sums.
    pub total: f32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: String,
    /// Center of the rectangle, where a caption goes.
    pub label_anchor: Point,
}

#[derive(Debug, Clone)]
pub struct LinkLayout {
    pub source: String,
    pub dest: String,
    pub weight: f32,
    /// Band height in pixels: weight times the global scale factor.
    pub thickness: f32,
    pub color: String,
    /// Closed outline of the filled ribbon.
    pub path: Vec<PathCommand>,
    /// Midpoint of the ribbon, for an optional annotation.
    pub label_anchor: Point,
}

#[derive(Debug, Clone)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub node_width: f32,
    pub columns: usize,
    pub link_opacity: f32,
    pub background: String,
    pub nodes: Vec<NodeLayout>,
    pub links: Vec<LinkLayout>,
}
