//! Fill colors and fonts shared by both emitters

use crate::core::{NodeKind, NodeShape};

pub(crate) const FONT: &str = "Helvetica";

/// Fill color by kind, and by shape for flow steps
pub(crate) fn fill_color(shape: NodeShape, kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Directory => "#fff4d6",
        NodeKind::File => "#eef2f7",
        NodeKind::Step => match shape {
            NodeShape::Box => "#eef6ff",
            NodeShape::Diamond => "#fff7e6",
            NodeShape::Circle => "#ecfdf5",
            NodeShape::Stadium => "#f5f3ff",
        },
    }
}

pub(crate) fn stroke_color(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Step => "#4a6fa5",
        NodeKind::Directory => "#b7791f",
        NodeKind::File => "#64748b",
    }
}
