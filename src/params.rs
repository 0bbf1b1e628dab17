//! Textual parameters from interactive input.
//!
//! Form fields arrive as raw strings. Each is parsed into a [`Param`], which
//! keeps "not requested" apart from "requested but malformed". Applying
//! either of those to a registry leaves it untouched; only the report tells
//! them apart, so one bad field never blocks the others.

use log::warn;

use crate::basics::PointD;
use crate::error::{Result, VariantError};
use crate::transform::{ReflectionAxis, TransformSpec};
use crate::variant::{VariantKind, VariantRegistry};

/// Outcome of parsing one optional parameter.
#[derive(Debug)]
pub enum Param<T> {
    /// Field left empty (or, for rotation, exactly zero).
    NotRequested,
    /// Field filled in but unusable.
    Malformed(VariantError),
    Requested(T),
}

impl<T> Param<T> {
    pub fn is_requested(&self) -> bool {
        matches!(self, Param::Requested(_))
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Param::Malformed(_))
    }

    pub fn requested(self) -> Option<T> {
        match self {
            Param::Requested(v) => Some(v),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Param<U> {
        match self {
            Param::NotRequested => Param::NotRequested,
            Param::Malformed(e) => Param::Malformed(e),
            Param::Requested(v) => Param::Requested(f(v)),
        }
    }

    fn from_text(text: &str, parse: impl FnOnce(&str) -> Result<T>) -> Self {
        if text.trim().is_empty() {
            return Param::NotRequested;
        }
        match parse(text) {
            Ok(v) => Param::Requested(v),
            Err(e) => Param::Malformed(e),
        }
    }
}

// ============================================================================
// Field parsers
// ============================================================================

fn parse_number(s: &str) -> Result<f64> {
    let s = s.trim();
    let v: f64 = s
        .parse()
        .map_err(|_| VariantError::parse(format!("'{s}' is not a number")))?;
    if !v.is_finite() {
        return Err(VariantError::parse(format!("'{s}' is not a finite number")));
    }
    Ok(v)
}

/// Parse `"x,y"` into a point.
pub fn parse_point(s: &str) -> Result<PointD> {
    let parts: Vec<&str> = s.split(',').collect();
    match parts.as_slice() {
        [x, y] => Ok(PointD::new(parse_number(x)?, parse_number(y)?)),
        _ => Err(VariantError::parse(format!(
            "expected two comma separated numbers, got '{}'",
            s.trim()
        ))),
    }
}

/// Parse `"x,y;x,y;..."` into points. Empty text yields `EmptyInput`.
pub fn parse_vertices(s: &str) -> Result<Vec<PointD>> {
    if s.trim().is_empty() {
        return Err(VariantError::EmptyInput);
    }
    s.split(';').map(parse_point).collect()
}

/// Rotation angle in degrees. Zero counts as not requested.
pub fn parse_rotation(text: &str) -> Param<TransformSpec> {
    match Param::from_text(text, parse_number) {
        Param::Requested(a) if a == 0.0 => Param::NotRequested,
        p => p.map(|angle_degrees| TransformSpec::Rotation { angle_degrees }),
    }
}

/// Scale factors as `"sx,sy"`.
pub fn parse_scale(text: &str) -> Param<TransformSpec> {
    Param::from_text(text, parse_point).map(|p| TransformSpec::Scale { sx: p.x, sy: p.y })
}

/// Offsets as `"tx,ty"`.
pub fn parse_translation(text: &str) -> Param<TransformSpec> {
    Param::from_text(text, parse_point).map(|p| TransformSpec::Translation { tx: p.x, ty: p.y })
}

/// Axis as `"h"` or `"v"`.
pub fn parse_reflection(text: &str) -> Param<TransformSpec> {
    Param::from_text(text, |s| s.parse::<ReflectionAxis>())
        .map(|axis| TransformSpec::Reflection { axis })
}

// ============================================================================
// Applying form input
// ============================================================================

/// Raw transform fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformInputs {
    pub rotation: String,
    pub scale: String,
    pub translation: String,
    pub reflection: String,
}

impl TransformInputs {
    /// Parsed fields in application order: rotation, scale, reflection,
    /// translation.
    pub fn params(&self) -> [(VariantKind, Param<TransformSpec>); 4] {
        [
            (VariantKind::Rotation, parse_rotation(&self.rotation)),
            (VariantKind::Scale, parse_scale(&self.scale)),
            (VariantKind::Reflection, parse_reflection(&self.reflection)),
            (VariantKind::Translation, parse_translation(&self.translation)),
        ]
    }
}

/// What happened to each field during [`apply_inputs`].
#[derive(Debug, Default)]
pub struct ApplyReport {
    pub applied: Vec<VariantKind>,
    pub skipped: Vec<(VariantKind, VariantError)>,
}

impl ApplyReport {
    pub fn is_noop(&self) -> bool {
        self.applied.is_empty()
    }
}

/// Apply one parsed parameter. Anything but `Requested` is a no-op;
/// returns whether the registry changed.
pub fn apply_param(registry: &mut VariantRegistry, param: &Param<TransformSpec>) -> Result<bool> {
    match param {
        Param::Requested(spec) => {
            registry.apply(spec)?;
            Ok(true)
        }
        Param::NotRequested | Param::Malformed(_) => Ok(false),
    }
}

/// Evaluate every field independently against `Original`.
///
/// Malformed fields are skipped and recorded in the report; the remaining
/// fields are still applied. Fails only if the registry has no `Original`.
pub fn apply_inputs(registry: &mut VariantRegistry, inputs: &TransformInputs) -> Result<ApplyReport> {
    if registry.original().is_none() {
        return Err(VariantError::EmptyInput);
    }
    let mut report = ApplyReport::default();
    for (kind, param) in inputs.params() {
        match param {
            Param::Requested(spec) => {
                registry.apply(&spec)?;
                report.applied.push(kind);
            }
            Param::Malformed(e) => {
                warn!("skipping {kind}: {e}");
                report.skipped.push((kind, e));
            }
            Param::NotRequested => {}
        }
    }
    Ok(report)
}
