//! Bounding rectangle calculation.
//!
//! Computes the axis-aligned bounding box of a vertex source, and of every
//! variant held in a registry.

use crate::basics::{is_stop, is_vertex, unite_rectangles, RectD, VertexSource};
use crate::variant::VariantRegistry;

/// Compute the bounding rectangle of a vertex source.
///
/// Rewinds the source, iterates all vertices, and returns the axis-aligned
/// bounding box. Returns `None` if no vertices are found.
pub fn bounding_rect_single(vs: &mut dyn VertexSource) -> Option<RectD> {
    let mut x = 0.0;
    let mut y = 0.0;
    let mut rect: Option<RectD> = None;

    vs.rewind();
    loop {
        let cmd = vs.vertex(&mut x, &mut y);
        if is_stop(cmd) {
            break;
        }
        if !is_vertex(cmd) {
            continue;
        }
        rect = Some(match rect {
            None => RectD::new(x, y, x, y),
            Some(r) => RectD::new(r.x1.min(x), r.y1.min(y), r.x2.max(x), r.y2.max(y)),
        });
    }
    rect
}

/// Bounding rectangle covering every point of every variant.
/// Returns `None` for an empty registry.
pub fn bounding_rect_registry(registry: &VariantRegistry) -> Option<RectD> {
    registry
        .iter()
        .filter_map(|v| bounding_rect_single(&mut v.points.path()))
        .reduce(|a, b| unite_rectangles(&a, &b))
}
