//! Affine transformation matrix.
//!
//! 2D affine transformations (rotation, scaling, translation, reflection)
//! stored as a 2x3 matrix. Transform variants are produced by running every
//! point of a vertex set through one of these. Matrices are never composed:
//! each variant is one matrix applied to the original points.

/// A 2x2 linear part written in row-vector convention: a point `[x y]` is
/// multiplied on the left, `[x' y'] = [x y] * m`.
pub type RowMatrix = [[f64; 2]; 2];

/// 2D affine transformation matrix.
///
/// Stores six components: `[sx, shy, shx, sy, tx, ty]` representing the
/// matrix:
///
/// ```text
///   | sx  shx tx |
///   | shy  sy ty |
///   |  0    0  1 |
/// ```
///
/// Transform: `x' = x*sx + y*shx + tx`, `y' = x*shy + y*sy + ty`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransAffine {
    pub sx: f64,
    pub shy: f64,
    pub shx: f64,
    pub sy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl TransAffine {
    /// Custom matrix from six components.
    pub fn new_custom(sx: f64, shy: f64, shx: f64, sy: f64, tx: f64, ty: f64) -> Self {
        Self {
            sx,
            shy,
            shx,
            sy,
            tx,
            ty,
        }
    }

    /// Build from a row-vector matrix `m`, so that `transform` computes
    /// `[x y] * m`:
    ///
    /// ```text
    ///   x' = x*m[0][0] + y*m[1][0]
    ///   y' = x*m[0][1] + y*m[1][1]
    /// ```
    pub fn from_row_matrix(m: &RowMatrix) -> Self {
        Self::new_custom(m[0][0], m[0][1], m[1][0], m[1][1], 0.0, 0.0)
    }

    /// The rotation matrix `[[cos a, -sin a], [sin a, cos a]]` applied to
    /// row vectors: `x' = x*cos a + y*sin a`, `y' = -x*sin a + y*cos a`.
    ///
    /// Points turn clockwise by `a` radians in a y-up frame.
    pub fn new_row_rotation(a: f64) -> Self {
        let (sa, ca) = a.sin_cos();
        Self::from_row_matrix(&[[ca, -sa], [sa, ca]])
    }

    /// Non-uniform scaling matrix.
    pub fn new_scaling(x: f64, y: f64) -> Self {
        Self::new_custom(x, 0.0, 0.0, y, 0.0, 0.0)
    }

    /// Translation matrix.
    pub fn new_translation(x: f64, y: f64) -> Self {
        Self::new_custom(1.0, 0.0, 0.0, 1.0, x, y)
    }

    /// Forward transform: `(x, y) -> (x', y')`.
    #[inline]
    pub fn transform(&self, x: &mut f64, y: &mut f64) {
        let tmp = *x;
        *x = tmp * self.sx + *y * self.shx + self.tx;
        *y = tmp * self.shy + *y * self.sy + self.ty;
    }

    /// Forward transform of a coordinate pair by value.
    #[inline]
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let (mut x, mut y) = (x, y);
        self.transform(&mut x, &mut y);
        (x, y)
    }
}

// ============================================================================
// Tests
// ============================================================================
