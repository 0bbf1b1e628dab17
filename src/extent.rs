//! Extent calculation.
//!
//! An extent frames a render so that every point of every variant stays
//! visible. Three presentations are supported:
//!
//! - `Symmetric`: one `[min, max]` range used for both axes,
//!   `[min(min_x, min_y) - margin, max(max_x, max_y) + margin]`, giving a
//!   square equal-aspect frame;
//! - `PerAxis`: independent x and y ranges, each widened by the margin;
//! - `MaxAbs`: a single scalar, the largest absolute coordinate across all
//!   variants, framing `[-v, v]` on both axes. Declarative loads report this.

use serde::Serialize;

use crate::basics::PointD;
use crate::bounding_rect::bounding_rect_registry;
use crate::error::{Result, VariantError};
use crate::variant::VariantRegistry;

/// Margin added around the covered region.
pub const DEFAULT_MARGIN: f64 = 1.0;

/// How the bounding region is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtentPolicy {
    #[default]
    Symmetric,
    PerAxis,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum Extent {
    Symmetric { min: f64, max: f64 },
    PerAxis { x: (f64, f64), y: (f64, f64) },
    MaxAbs { value: f64 },
}

impl Extent {
    /// `(min, max)` to use for the x axis.
    pub fn x_range(&self) -> (f64, f64) {
        match *self {
            Extent::Symmetric { min, max } => (min, max),
            Extent::PerAxis { x, .. } => x,
            Extent::MaxAbs { value } => (-value, value),
        }
    }

    /// `(min, max)` to use for the y axis.
    pub fn y_range(&self) -> (f64, f64) {
        match *self {
            Extent::Symmetric { min, max } => (min, max),
            Extent::PerAxis { y, .. } => y,
            Extent::MaxAbs { value } => (-value, value),
        }
    }

    /// True if `p` lies inside the frame, boundary included.
    pub fn covers(&self, p: &PointD) -> bool {
        let (x1, x2) = self.x_range();
        let (y1, y2) = self.y_range();
        p.x >= x1 && p.x <= x2 && p.y >= y1 && p.y <= y2
    }
}

/// Extent of `registry` under `policy`, widened by `margin`.
pub fn compute(registry: &VariantRegistry, policy: ExtentPolicy, margin: f64) -> Result<Extent> {
    let r = bounding_rect_registry(registry).ok_or(VariantError::EmptyRegistry)?;
    Ok(match policy {
        ExtentPolicy::Symmetric => Extent::Symmetric {
            min: r.x1.min(r.y1) - margin,
            max: r.x2.max(r.y2) + margin,
        },
        ExtentPolicy::PerAxis => {
            let r = r.inflate(margin);
            Extent::PerAxis {
                x: (r.x1, r.x2),
                y: (r.y1, r.y2),
            }
        }
    })
}

/// Symmetric extent with the default margin.
pub fn extent(registry: &VariantRegistry) -> Result<Extent> {
    compute(registry, ExtentPolicy::Symmetric, DEFAULT_MARGIN)
}

/// Largest absolute value among the lowest and highest coordinate found
/// in any variant, x and y pooled together. No margin is applied.
pub fn max_abs(registry: &VariantRegistry) -> Result<f64> {
    let r = bounding_rect_registry(registry).ok_or(VariantError::EmptyRegistry)?;
    let lo = r.x1.min(r.y1);
    let hi = r.x2.max(r.y2);
    Ok(lo.abs().max(hi.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{circle, square};
    use crate::transform::{ReflectionAxis, TransformSpec};

    const EPS: f64 = 1e-9;

    fn busy_registry() -> VariantRegistry {
        let mut reg = VariantRegistry::with_original(square(1.0, 2.0, 4.0));
        reg.apply_all(&[
            TransformSpec::Rotation { angle_degrees: 33.0 },
            TransformSpec::Scale { sx: -2.0, sy: 0.5 },
            TransformSpec::Translation { tx: 7.0, ty: -9.0 },
            TransformSpec::Reflection {
                axis: ReflectionAxis::Vertical,
            },
        ])
        .unwrap();
        reg
    }

    #[test]
    fn test_symmetric_square() {
        let reg = VariantRegistry::with_original(square(0.0, 0.0, 5.0));
        let e = extent(&reg).unwrap();
        assert_eq!(e, Extent::Symmetric { min: -1.0, max: 6.0 });
    }

    #[test]
    fn test_symmetric_pools_axes() {
        let reg = VariantRegistry::with_original(
            crate::vertex_set::VertexSet::from_pairs(&[[2.0, -3.0], [10.0, 4.0]]).unwrap(),
        );
        let e = compute(&reg, ExtentPolicy::Symmetric, 0.5).unwrap();
        assert_eq!(e, Extent::Symmetric { min: -3.5, max: 10.5 });
    }

    #[test]
    fn test_per_axis() {
        let reg = VariantRegistry::with_original(
            crate::vertex_set::VertexSet::from_pairs(&[[2.0, -3.0], [10.0, 4.0]]).unwrap(),
        );
        let e = compute(&reg, ExtentPolicy::PerAxis, DEFAULT_MARGIN).unwrap();
        assert_eq!(
            e,
            Extent::PerAxis {
                x: (1.0, 11.0),
                y: (-4.0, 5.0)
            }
        );
    }

    #[test]
    fn test_empty_registry_is_error() {
        let reg = VariantRegistry::new();
        assert!(matches!(extent(&reg), Err(VariantError::EmptyRegistry)));
        assert!(matches!(
            compute(&reg, ExtentPolicy::PerAxis, 1.0),
            Err(VariantError::EmptyRegistry)
        ));
        assert!(matches!(max_abs(&reg), Err(VariantError::EmptyRegistry)));
    }

    #[test]
    fn test_covers_every_point_strictly() {
        let reg = busy_registry();
        for policy in [ExtentPolicy::Symmetric, ExtentPolicy::PerAxis] {
            let bare = compute(&reg, policy, 0.0).unwrap();
            let framed = compute(&reg, policy, DEFAULT_MARGIN).unwrap();
            let (fx1, fx2) = framed.x_range();
            let (fy1, fy2) = framed.y_range();
            for v in &reg {
                for p in &v.points {
                    assert!(bare.covers(p), "{policy:?} misses {p:?}");
                    assert!(p.x > fx1 && p.x < fx2 && p.y > fy1 && p.y < fy2);
                }
            }
        }
    }

    #[test]
    fn test_max_abs() {
        let mut reg = VariantRegistry::with_original(square(0.0, 0.0, 5.0));
        assert_eq!(max_abs(&reg).unwrap(), 5.0);
        reg.apply(&TransformSpec::Translation { tx: -12.0, ty: 1.0 })
            .unwrap();
        assert_eq!(max_abs(&reg).unwrap(), 12.0);
    }

    #[test]
    fn test_max_abs_covers() {
        let reg = busy_registry();
        let e = Extent::MaxAbs {
            value: max_abs(&reg).unwrap(),
        };
        assert!(reg.iter().all(|v| v.points.iter().all(|p| e.covers(p))));
    }

    #[test]
    fn test_circle_extent() {
        let reg = VariantRegistry::with_original(circle(PointD::new(0.0, 0.0), 5.0));
        let (min, max) = extent(&reg).unwrap().x_range();
        assert!((min + 6.0).abs() < EPS);
        assert!((max - 6.0).abs() < EPS);
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_value(Extent::Symmetric { min: -1.0, max: 6.0 }).unwrap();
        assert_eq!(json["policy"], "symmetric");
        assert_eq!(json["max"], 6.0);
        let json = serde_json::to_value(Extent::MaxAbs { value: 3.0 }).unwrap();
        assert_eq!(json["policy"], "max_abs");
    }
}
