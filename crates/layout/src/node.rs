//! The layout tree.
//!
//! A page is laid out by building a tree of [`LayoutNode`]s and calling
//! [`LayoutNode::compute_bounds`] with the page's grid area. Bounds are a
//! pure function of each node's constraints and the space passed to it, so
//! recomputing an unmodified tree with the same inputs yields the same
//! geometry.

use crate::constraints::Constraints;
use crate::container::distribute_children;
use crate::grid::{self, GridSpec};
use crate::tracks::{self, TrackSizing};
use crate::LayoutError;
use almanac_types::GridRect;

/// Direction of a container's main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Main axis is width; children sit side by side.
    Horizontal,
    /// Main axis is height; children stack top to bottom.
    Vertical,
}

/// What a node does with the area it resolves for itself.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// Plain box; children each get the node's full area.
    Frame,
    /// Distributes children along one axis by fixed size and flex weight.
    Container { axis: Axis, gap: i64 },
    /// Synthesizes equally-sized (or explicitly-sized) vertical slices.
    Columns { tracks: TrackSizing, gap: i64 },
    /// Synthesizes equally-sized (or explicitly-sized) horizontal bands.
    Rows { tracks: TrackSizing, gap: i64 },
    /// Synthesizes a rows x columns matrix of cells.
    Grid(GridSpec),
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Frame => "Frame",
            NodeKind::Container { .. } => "Container",
            NodeKind::Columns { .. } => "Columns",
            NodeKind::Rows { .. } => "Rows",
            NodeKind::Grid(_) => "Grid",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayoutNode {
    name: Option<String>,
    pub constraints: Constraints,
    kind: NodeKind,
    children: Vec<LayoutNode>,
    bounds: Option<GridRect>,
}

impl LayoutNode {
    fn with_kind(kind: NodeKind) -> Self {
        Self {
            name: None,
            constraints: Constraints::default(),
            kind,
            children: Vec::new(),
            bounds: None,
        }
    }

    pub fn frame() -> Self {
        Self::with_kind(NodeKind::Frame)
    }

    pub fn container(axis: Axis, gap: i64) -> Self {
        Self::with_kind(NodeKind::Container { axis, gap })
    }

    pub fn columns(tracks: TrackSizing, gap: i64) -> Result<Self, LayoutError> {
        tracks.validate()?;
        Ok(Self::with_kind(NodeKind::Columns { tracks, gap }))
    }

    pub fn rows(tracks: TrackSizing, gap: i64) -> Result<Self, LayoutError> {
        tracks.validate()?;
        Ok(Self::with_kind(NodeKind::Rows { tracks, gap }))
    }

    pub fn grid(spec: GridSpec) -> Self {
        Self::with_kind(NodeKind::Grid(spec))
    }

    // --- builder-style configuration ---

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn width(mut self, width: i64) -> Self {
        self.constraints.width = Some(width);
        self
    }

    pub fn height(mut self, height: i64) -> Self {
        self.constraints.height = Some(height);
        self
    }

    pub fn flex(mut self, weight: u32) -> Self {
        self.constraints.flex = Some(weight);
        self
    }

    pub fn min_width(mut self, value: i64) -> Self {
        self.constraints.min_width = Some(value);
        self
    }

    pub fn min_height(mut self, value: i64) -> Self {
        self.constraints.min_height = Some(value);
        self
    }

    pub fn max_width(mut self, value: i64) -> Self {
        self.constraints.max_width = Some(value);
        self
    }

    pub fn max_height(mut self, value: i64) -> Self {
        self.constraints.max_height = Some(value);
        self
    }

    pub fn child(mut self, node: LayoutNode) -> Self {
        self.children.push(node);
        self
    }

    pub fn push_child(&mut self, node: LayoutNode) {
        self.children.push(node);
    }

    // --- accessors ---

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn children(&self) -> &[LayoutNode] {
        &self.children
    }

    /// The computed bounding box; `None` until the first compute pass.
    pub fn bounds(&self) -> Option<GridRect> {
        self.bounds
    }

    pub fn child_named(&self, name: &str) -> Option<&LayoutNode> {
        self.children.iter().find(|c| c.name() == Some(name))
    }

    pub fn child_named_mut(&mut self, name: &str) -> Option<&mut LayoutNode> {
        self.children.iter_mut().find(|c| c.name() == Some(name))
    }

    /// Cell accessor for grid nodes, addressed `(row_idx, col_idx)`,
    /// 0-based. Returns `None` for out-of-range indices or non-grid nodes.
    pub fn cell(&self, row_idx: usize, col_idx: usize) -> Option<&LayoutNode> {
        match &self.kind {
            NodeKind::Grid(spec) if col_idx < spec.cols && row_idx < spec.rows => {
                self.children.get(row_idx * spec.cols + col_idx)
            }
            _ => None,
        }
    }

    /// Computes this node's bounds within the given area and recursively
    /// lays out its children. Repeating nodes regenerate their synthetic
    /// children on every pass rather than accumulating them.
    pub fn compute_bounds(&mut self, col: i64, row: i64, width: i64, height: i64) -> GridRect {
        let (own_width, own_height) = self.constraints.resolve(width, height);
        let bounds = GridRect::new(col, row, own_width, own_height);
        self.bounds = Some(bounds);

        match self.kind.clone() {
            NodeKind::Frame => {
                for child in &mut self.children {
                    child.compute_bounds(bounds.col, bounds.row, bounds.width, bounds.height);
                }
            }
            NodeKind::Container { axis, gap } => {
                distribute_children(&mut self.children, bounds, axis, gap);
            }
            NodeKind::Columns { tracks, gap } => {
                self.children = tracks::synthesize(&tracks, bounds.width, gap, Axis::Horizontal);
                distribute_children(&mut self.children, bounds, Axis::Horizontal, gap);
            }
            NodeKind::Rows { tracks, gap } => {
                self.children = tracks::synthesize(&tracks, bounds.height, gap, Axis::Vertical);
                distribute_children(&mut self.children, bounds, Axis::Vertical, gap);
            }
            NodeKind::Grid(spec) => {
                self.children = grid::synthesize_cells(&spec, bounds);
            }
        }

        bounds
    }
}
