//! Shape builders.
//!
//! Each builder returns the initial vertex set a registry is seeded with.
//! No validity checks are made beyond non-emptiness: negative or zero sizes,
//! collinear triangles, and one- or two-point "polygons" are all accepted.

use crate::basics::PointD;
use crate::ellipse::Ellipse;
use crate::error::Result;
use crate::vertex_set::VertexSet;

/// Number of samples taken around a circle.
pub const CIRCLE_STEPS: u32 = 100;

/// Axis-aligned square `[(x,y), (x+size,y), (x+size,y+size), (x,y+size)]`.
///
/// A negative `size` flips the orientation; zero collapses it to a point.
pub fn square(x: f64, y: f64, size: f64) -> VertexSet {
    VertexSet::new_unchecked(vec![
        PointD::new(x, y),
        PointD::new(x + size, y),
        PointD::new(x + size, y + size),
        PointD::new(x, y + size),
    ])
}

/// The three points in the order given.
pub fn triangle(p1: PointD, p2: PointD, p3: PointD) -> VertexSet {
    VertexSet::new_unchecked(vec![p1, p2, p3])
}

/// `CIRCLE_STEPS` points at equal angular steps over `[0, 2π)`.
pub fn circle(center: PointD, radius: f64) -> VertexSet {
    let points = Ellipse::new(center.x, center.y, radius, radius, CIRCLE_STEPS).points();
    VertexSet::new_unchecked(points)
}

/// Manually entered vertices, unchanged. Requires at least one point.
pub fn from_free_vertices(points: Vec<PointD>) -> Result<VertexSet> {
    VertexSet::new(points)
}

/// A requested shape with its parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeSpec {
    Square { x: f64, y: f64, size: f64 },
    Triangle([PointD; 3]),
    Circle { center: PointD, radius: f64 },
    Vertices(Vec<PointD>),
}

impl ShapeSpec {
    /// Square at the origin with side 5.
    pub fn default_square() -> Self {
        ShapeSpec::Square {
            x: 0.0,
            y: 0.0,
            size: 5.0,
        }
    }

    pub fn default_triangle() -> Self {
        ShapeSpec::Triangle([
            PointD::new(0.0, 0.0),
            PointD::new(5.0, 0.0),
            PointD::new(2.5, 5.0),
        ])
    }

    /// Circle of radius 5 around the origin.
    pub fn default_circle() -> Self {
        ShapeSpec::Circle {
            center: PointD::new(0.0, 0.0),
            radius: 5.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShapeSpec::Square { .. } => "square",
            ShapeSpec::Triangle(_) => "triangle",
            ShapeSpec::Circle { .. } => "circle",
            ShapeSpec::Vertices(_) => "vertices",
        }
    }

    pub fn build(&self) -> Result<VertexSet> {
        match self {
            ShapeSpec::Square { x, y, size } => Ok(square(*x, *y, *size)),
            ShapeSpec::Triangle([p1, p2, p3]) => Ok(triangle(*p1, *p2, *p3)),
            ShapeSpec::Circle { center, radius } => Ok(circle(*center, *radius)),
            ShapeSpec::Vertices(points) => from_free_vertices(points.clone()),
        }
    }
}
