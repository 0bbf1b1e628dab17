//! Vertex sets, the immutable point container every shape and variant uses.
//!
//! A `VertexSet` is an ordered, non-empty list of points describing a
//! polygon. Order defines winding and edge connectivity; the last point
//! implicitly joins the first when the polygon is drawn. A set is never
//! modified after construction: transforming it yields a new set.

use serde::{Serialize, Serializer};

use crate::basics::{
    PointD, VertexSource, PATH_CMD_END_POLY, PATH_CMD_LINE_TO, PATH_CMD_MOVE_TO, PATH_CMD_STOP,
    PATH_FLAGS_CLOSE,
};
use crate::error::{Result, VariantError};
use crate::trans_affine::TransAffine;

/// Ordered, non-empty, immutable sequence of points.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexSet {
    points: Vec<PointD>,
}

impl VertexSet {
    /// Take ownership of `points`. Fails with `EmptyInput` if there are none.
    pub fn new(points: Vec<PointD>) -> Result<Self> {
        if points.is_empty() {
            return Err(VariantError::EmptyInput);
        }
        Ok(Self { points })
    }

    /// For builders that always produce at least one point.
    pub(crate) fn new_unchecked(points: Vec<PointD>) -> Self {
        debug_assert!(!points.is_empty());
        Self { points }
    }

    /// Build from `[x, y]` pairs.
    pub fn from_pairs(pairs: &[[f64; 2]]) -> Result<Self> {
        Self::new(pairs.iter().copied().map(PointD::from).collect())
    }

    pub fn points(&self) -> &[PointD] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: construction rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PointD> {
        self.points.iter()
    }

    /// Map every point through `f`, preserving length and order.
    pub fn map<F: Fn(PointD) -> PointD>(&self, f: F) -> VertexSet {
        VertexSet {
            points: self.points.iter().map(|&p| f(p)).collect(),
        }
    }

    /// Run every point through the affine matrix `m`.
    pub fn transformed(&self, m: &TransAffine) -> VertexSet {
        self.map(|p| {
            let (x, y) = m.apply(p.x, p.y);
            PointD::new(x, y)
        })
    }

    /// The outline as drawn: all points followed by the first one again.
    pub fn closed(&self) -> Vec<PointD> {
        let mut out = Vec::with_capacity(self.points.len() + 1);
        out.extend_from_slice(&self.points);
        out.push(self.points[0]);
        out
    }

    /// Walk the set as a closed polygon path.
    pub fn path(&self) -> VertexSetPath<'_> {
        VertexSetPath::new(&self.points)
    }

    /// Pointwise comparison within `epsilon`; lengths must match.
    pub fn approx_eq(&self, other: &VertexSet, epsilon: f64) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.approx_eq(b, epsilon))
    }
}

impl<'a> IntoIterator for &'a VertexSet {
    type Item = &'a PointD;
    type IntoIter = std::slice::Iter<'a, PointD>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl Serialize for VertexSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        self.points.serialize(serializer)
    }
}

// ===================================================================
// Path adaptor
// ===================================================================

/// `VertexSource` over a point slice, emitting `move_to`, `line_to`s and a
/// closing `end_poly`.
pub struct VertexSetPath<'a> {
    points: &'a [PointD],
    index: usize,
    closed: bool,
}

impl<'a> VertexSetPath<'a> {
    pub fn new(points: &'a [PointD]) -> Self {
        Self {
            points,
            index: 0,
            closed: false,
        }
    }
}

impl VertexSource for VertexSetPath<'_> {
    fn rewind(&mut self) {
        self.index = 0;
        self.closed = false;
    }

    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
        if let Some(p) = self.points.get(self.index) {
            *x = p.x;
            *y = p.y;
            self.index += 1;
            return if self.index == 1 {
                PATH_CMD_MOVE_TO
            } else {
                PATH_CMD_LINE_TO
            };
        }
        *x = 0.0;
        *y = 0.0;
        if !self.closed && !self.points.is_empty() {
            self.closed = true;
            return PATH_CMD_END_POLY | PATH_FLAGS_CLOSE;
        }
        PATH_CMD_STOP
    }
}
