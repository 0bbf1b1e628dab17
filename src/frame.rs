//! Render frames: what the rendering and export side receives.
//!
//! A frame lists every variant as a closed outline (first point appended
//! again at the end) with its display color, plus the extent to frame the
//! axes with. It carries no file name or image format; that is up to the
//! consumer.

use serde::Serialize;

use crate::basics::PointD;
use crate::color::Rgba8;
use crate::error::{Result, VariantError};
use crate::extent::{compute, Extent, ExtentPolicy};
use crate::pipeline::LoadedPipeline;
use crate::variant::{VariantKind, VariantRegistry};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameVariant {
    pub name: VariantKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgba8>,
    pub points: Vec<PointD>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderFrame {
    pub variants: Vec<FrameVariant>,
    pub extent: Extent,
}

impl RenderFrame {
    /// Frame `registry` with a precomputed `extent`.
    pub fn new(registry: &VariantRegistry, extent: Extent) -> Result<Self> {
        if registry.is_empty() {
            return Err(VariantError::EmptyRegistry);
        }
        let variants = registry
            .iter()
            .map(|v| FrameVariant {
                name: v.kind,
                color: v.color,
                points: v.points.closed(),
            })
            .collect();
        Ok(Self { variants, extent })
    }

    pub fn from_registry(
        registry: &VariantRegistry,
        policy: ExtentPolicy,
        margin: f64,
    ) -> Result<Self> {
        Self::new(registry, compute(registry, policy, margin)?)
    }

    /// Frame a declarative load with its scalar extent.
    pub fn from_pipeline(loaded: &LoadedPipeline) -> Result<Self> {
        Self::new(&loaded.registry, loaded.extent())
    }

    pub fn get(&self, kind: VariantKind) -> Option<&FrameVariant> {
        self.variants.iter().find(|v| v.name == kind)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extent::DEFAULT_MARGIN;
    use crate::pipeline::load_str;
    use crate::shapes::square;
    use crate::transform::TransformSpec;

    #[test]
    fn test_closed_outlines() {
        let mut reg = VariantRegistry::with_original(square(0.0, 0.0, 5.0));
        reg.apply(&TransformSpec::Scale { sx: 2.0, sy: 2.0 }).unwrap();
        let frame = RenderFrame::from_registry(&reg, ExtentPolicy::Symmetric, DEFAULT_MARGIN)
            .unwrap();
        assert_eq!(frame.variants.len(), 2);
        for v in &frame.variants {
            assert_eq!(v.points.len(), 5);
            assert_eq!(v.points.first(), v.points.last());
        }
        assert_eq!(frame.extent, Extent::Symmetric { min: -1.0, max: 11.0 });
        assert_eq!(frame.get(VariantKind::Scale).unwrap().points[2], PointD::new(10.0, 10.0));
    }

    #[test]
    fn test_empty_registry_rejected() {
        let reg = VariantRegistry::new();
        assert!(matches!(
            RenderFrame::new(&reg, Extent::MaxAbs { value: 1.0 }),
            Err(VariantError::EmptyRegistry)
        ));
        assert!(matches!(
            RenderFrame::from_registry(&reg, ExtentPolicy::PerAxis, 1.0),
            Err(VariantError::EmptyRegistry)
        ));
    }

    #[test]
    fn test_from_pipeline_json() {
        let loaded = load_str(r#"{"points":[[0,0],[2,0],[0,2]],"translation":{"value":[1,1]}}"#)
            .unwrap();
        let frame = RenderFrame::from_pipeline(&loaded).unwrap();
        let json: serde_json::Value = serde_json::from_str(&frame.to_json().unwrap()).unwrap();
        assert_eq!(json["extent"]["policy"], "max_abs");
        assert_eq!(json["extent"]["value"], 3.0);
        assert_eq!(json["variants"][0]["name"], "original");
        assert_eq!(json["variants"][0]["color"], "#1A0014");
        assert_eq!(json["variants"][1]["name"], "translation");
        assert_eq!(json["variants"][1]["points"][3], serde_json::json!([1.0, 1.0]));
    }

    #[test]
    fn test_uncolored_variant_omits_color() {
        let mut reg = VariantRegistry::new();
        reg.insert(
            crate::variant::Variant::new(VariantKind::Original, square(0.0, 0.0, 1.0))
                .with_color(None),
        )
        .unwrap();
        let frame = RenderFrame::from_registry(&reg, ExtentPolicy::PerAxis, 0.0).unwrap();
        let json = frame.to_json_pretty().unwrap();
        assert!(!json.contains("color"));
    }
}
