//! Ellipse vertex generator.
//!
//! Generates vertices approximating an ellipse as a regular polygon,
//! usable as a [`VertexSource`]. The circle shape builder samples one of
//! these.

use crate::basics::{
    PointD, VertexSource, PATH_CMD_END_POLY, PATH_CMD_LINE_TO, PATH_CMD_MOVE_TO, PATH_CMD_STOP,
    PATH_FLAGS_CLOSE, PI,
};

/// Ellipse vertex generator.
///
/// Emits `num` vertices at equal angular steps over `[0, 2π)`, starting at
/// angle 0 and turning counter-clockwise. The start angle is not repeated;
/// closing is signalled with an `end_poly` command instead.
#[derive(Debug, Clone)]
pub struct Ellipse {
    x: f64,
    y: f64,
    rx: f64,
    ry: f64,
    num: u32,
    step: u32,
}

impl Ellipse {
    pub fn new(x: f64, y: f64, rx: f64, ry: f64, num_steps: u32) -> Self {
        Self {
            x,
            y,
            rx,
            ry,
            num: num_steps,
            step: 0,
        }
    }

    /// Vertex `i` of the polygon.
    fn point_at(&self, i: u32) -> PointD {
        let angle = i as f64 / self.num as f64 * 2.0 * PI;
        PointD::new(self.x + angle.cos() * self.rx, self.y + angle.sin() * self.ry)
    }

    /// All vertices in emission order.
    pub fn points(&self) -> Vec<PointD> {
        (0..self.num).map(|i| self.point_at(i)).collect()
    }
}

impl VertexSource for Ellipse {
    fn rewind(&mut self) {
        self.step = 0;
    }

    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
        if self.num == 0 || self.step > self.num {
            return PATH_CMD_STOP;
        }
        if self.step == self.num {
            self.step += 1;
            return PATH_CMD_END_POLY | PATH_FLAGS_CLOSE;
        }
        let p = self.point_at(self.step);
        *x = p.x;
        *y = p.y;
        self.step += 1;
        if self.step == 1 {
            PATH_CMD_MOVE_TO
        } else {
            PATH_CMD_LINE_TO
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
