//! Transform operators.
//!
//! Every operator is pure: it reads a vertex set and returns a new one of
//! the same length and order. Linear parts are applied to points as row
//! vectors on the left of the matrix (`[x y] * M`), so a rotation by `θ`
//! maps `(x, y)` to `(x·cosθ + y·sinθ, -x·sinθ + y·cosθ)`.

use core::fmt;
use core::str::FromStr;

use crate::basics::deg2rad;
use crate::error::VariantError;
use crate::trans_affine::{RowMatrix, TransAffine};
use crate::variant::VariantKind;
use crate::vertex_set::VertexSet;

/// Axis a reflection mirrors across.
///
/// `Horizontal` negates y (flip across the x-axis), `Vertical` negates x
/// (flip across the y-axis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectionAxis {
    Horizontal,
    Vertical,
}

impl ReflectionAxis {
    pub fn row_matrix(self) -> RowMatrix {
        match self {
            ReflectionAxis::Horizontal => [[1.0, 0.0], [0.0, -1.0]],
            ReflectionAxis::Vertical => [[-1.0, 0.0], [0.0, 1.0]],
        }
    }
}

impl FromStr for ReflectionAxis {
    type Err = VariantError;

    /// Accepts `h`/`horizontal` and `v`/`vertical`, trimmed and
    /// case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h" | "horizontal" => Ok(ReflectionAxis::Horizontal),
            "v" | "vertical" => Ok(ReflectionAxis::Vertical),
            _ => Err(VariantError::parse(format!(
                "unknown reflection axis '{}' (expected h or v)",
                s.trim()
            ))),
        }
    }
}

impl fmt::Display for ReflectionAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReflectionAxis::Horizontal => f.write_str("horizontal"),
            ReflectionAxis::Vertical => f.write_str("vertical"),
        }
    }
}

/// A transform with its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformSpec {
    Rotation { angle_degrees: f64 },
    Scale { sx: f64, sy: f64 },
    Translation { tx: f64, ty: f64 },
    Reflection { axis: ReflectionAxis },
}

impl TransformSpec {
    /// The variant this transform produces.
    pub fn kind(&self) -> VariantKind {
        match self {
            TransformSpec::Rotation { .. } => VariantKind::Rotation,
            TransformSpec::Scale { .. } => VariantKind::Scale,
            TransformSpec::Translation { .. } => VariantKind::Translation,
            TransformSpec::Reflection { .. } => VariantKind::Reflection,
        }
    }

    /// The affine matrix equivalent of this transform.
    pub fn matrix(&self) -> TransAffine {
        match *self {
            TransformSpec::Rotation { angle_degrees } => {
                TransAffine::new_row_rotation(deg2rad(angle_degrees))
            }
            TransformSpec::Scale { sx, sy } => TransAffine::new_scaling(sx, sy),
            TransformSpec::Translation { tx, ty } => TransAffine::new_translation(tx, ty),
            TransformSpec::Reflection { axis } => TransAffine::from_row_matrix(&axis.row_matrix()),
        }
    }

    pub fn apply(&self, v: &VertexSet) -> VertexSet {
        v.transformed(&self.matrix())
    }
}

// ============================================================================
// Operators
// ============================================================================

/// Rotate by `angle_degrees` using the row-vector convention.
pub fn rotate(v: &VertexSet, angle_degrees: f64) -> VertexSet {
    TransformSpec::Rotation { angle_degrees }.apply(v)
}

/// Scale by `(sx, sy)`. Negative factors mirror, zero factors collapse.
pub fn scale(v: &VertexSet, sx: f64, sy: f64) -> VertexSet {
    TransformSpec::Scale { sx, sy }.apply(v)
}

/// Add `(tx, ty)` to every point.
pub fn translate(v: &VertexSet, tx: f64, ty: f64) -> VertexSet {
    TransformSpec::Translation { tx, ty }.apply(v)
}

/// Mirror across `axis`.
pub fn reflect(v: &VertexSet, axis: ReflectionAxis) -> VertexSet {
    TransformSpec::Reflection { axis }.apply(v)
}

// ============================================================================
// Tests
// ============================================================================
