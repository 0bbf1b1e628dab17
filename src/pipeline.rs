//! Declarative pipeline loader.
//!
//! Reads a JSON document of the form
//!
//! ```json
//! {
//!   "points": [[0, 0], [5, 0], [5, 5], [0, 5]],
//!   "rotation": { "angle": 90 },
//!   "scale": { "value": [2, 1] },
//!   "translation": { "value": [3, -1] }
//! }
//! ```
//!
//! and builds a fully populated registry. `points` is required and parsed
//! strictly. Each transform block is optional; a present block is applied
//! even when its parameters are missing or malformed, using the defaults
//! (rotation 90°, scale `(1, 1)`, translation `(0, 0)`). Transforms run in
//! the fixed order rotation, scale, translation, each against the original
//! points. Unknown keys, `reflection` included, are ignored.

use std::path::Path;

use log::{info, warn};
use serde_json::Value;

use crate::basics::PointD;
use crate::error::{Result, VariantError};
use crate::extent::{max_abs, Extent};
use crate::transform::TransformSpec;
use crate::variant::VariantRegistry;
use crate::vertex_set::VertexSet;

pub const DEFAULT_ROTATION_DEGREES: f64 = 90.0;
pub const DEFAULT_SCALE: (f64, f64) = (1.0, 1.0);
pub const DEFAULT_TRANSLATION: (f64, f64) = (0.0, 0.0);

/// A parsed document: the points plus the transforms it asks for.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineDocument {
    pub points: VertexSet,
    pub rotation: Option<f64>,
    pub scale: Option<(f64, f64)>,
    pub translation: Option<(f64, f64)>,
}

/// Result of a load: the registry and its scalar `max_abs` extent.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPipeline {
    pub registry: VariantRegistry,
    pub max_abs: f64,
}

impl LoadedPipeline {
    pub fn extent(&self) -> Extent {
        Extent::MaxAbs {
            value: self.max_abs,
        }
    }
}

impl PipelineDocument {
    pub fn from_value(doc: &Value) -> Result<Self> {
        let points = parse_points(doc.get("points"))?;
        Ok(Self {
            points,
            rotation: block(doc, "rotation").map(|b| {
                number_field(b, "rotation", "angle").unwrap_or(DEFAULT_ROTATION_DEGREES)
            }),
            scale: block(doc, "scale")
                .map(|b| pair_field(b, "scale", "value").unwrap_or(DEFAULT_SCALE)),
            translation: block(doc, "translation")
                .map(|b| pair_field(b, "translation", "value").unwrap_or(DEFAULT_TRANSLATION)),
        })
    }

    pub fn parse(text: &str) -> Result<Self> {
        let doc: Value = serde_json::from_str(text)?;
        Self::from_value(&doc)
    }

    /// Requested transforms in application order.
    pub fn transforms(&self) -> Vec<TransformSpec> {
        let mut specs = Vec::new();
        if let Some(angle_degrees) = self.rotation {
            specs.push(TransformSpec::Rotation { angle_degrees });
        }
        if let Some((sx, sy)) = self.scale {
            specs.push(TransformSpec::Scale { sx, sy });
        }
        if let Some((tx, ty)) = self.translation {
            specs.push(TransformSpec::Translation { tx, ty });
        }
        specs
    }

    pub fn build(&self) -> Result<LoadedPipeline> {
        let mut registry = VariantRegistry::with_original(self.points.clone());
        registry.apply_all(&self.transforms())?;
        let max_abs = max_abs(&registry)?;
        info!(
            "pipeline loaded: {} points, variants [{}], extent {max_abs}",
            self.points.len(),
            registry
                .kinds()
                .iter()
                .map(|k| k.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(LoadedPipeline { registry, max_abs })
    }
}

/// Parse and apply a JSON document held in memory.
pub fn load_str(text: &str) -> Result<LoadedPipeline> {
    PipelineDocument::parse(text)?.build()
}

/// Read, parse and apply a JSON document from disk.
pub fn load_file(path: impl AsRef<Path>) -> Result<LoadedPipeline> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    info!("loading pipeline from {}", path.display());
    load_str(&text)
}

// ============================================================================
// Field extraction
// ============================================================================

fn parse_points(value: Option<&Value>) -> Result<VertexSet> {
    let value = match value {
        None | Some(Value::Null) => return Err(VariantError::EmptyInput),
        Some(v) => v,
    };
    let pairs: Vec<[f64; 2]> = serde_json::from_value(value.clone())
        .map_err(|e| VariantError::parse(format!("points: {e}")))?;
    VertexSet::new(pairs.into_iter().map(PointD::from).collect())
}

/// A transform block counts as present unless absent or `null`.
fn block<'a>(doc: &'a Value, key: &str) -> Option<&'a Value> {
    doc.get(key).filter(|v| !v.is_null())
}

/// `block.field`, warning when `block` is not an object at all.
fn field<'a>(block: &'a Value, name: &str, field: &str) -> Option<&'a Value> {
    if !block.is_object() {
        warn!("{name}: expected an object, got {block}; using default");
        return None;
    }
    block.get(field)
}

fn number_field(block: &Value, name: &str, field_name: &str) -> Option<f64> {
    let v = field(block, name, field_name)?;
    let n = v.as_f64().filter(|n| n.is_finite());
    if n.is_none() {
        warn!("{name}.{field_name}: expected a number, got {v}; using default");
    }
    n
}

fn pair_field(block: &Value, name: &str, field_name: &str) -> Option<(f64, f64)> {
    let v = field(block, name, field_name)?;
    let pair = match v.as_array().map(Vec::as_slice) {
        Some([a, b]) => a.as_f64().zip(b.as_f64()),
        _ => None,
    }
    .filter(|(a, b)| a.is_finite() && b.is_finite());
    if pair.is_none() {
        warn!("{name}.{field_name}: expected a pair of numbers, got {v}; using default");
    }
    pair
}
