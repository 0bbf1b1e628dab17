//! Variants and the variant registry.
//!
//! A registry holds at most one variant per [`VariantKind`], in insertion
//! order, and always holds `Original` before any derived variant. Derived
//! variants are computed from `Original` only; they never chain.

use core::fmt;
use core::str::FromStr;

use log::debug;
use serde::{Serialize, Serializer};

use crate::color::Rgba8;
use crate::error::{Result, VariantError};
use crate::transform::TransformSpec;
use crate::vertex_set::VertexSet;

// ============================================================================
// VariantKind
// ============================================================================

/// Closed set of variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VariantKind {
    Original,
    Rotation,
    Scale,
    Translation,
    Reflection,
}

impl VariantKind {
    pub const ALL: [VariantKind; 5] = [
        VariantKind::Original,
        VariantKind::Rotation,
        VariantKind::Scale,
        VariantKind::Translation,
        VariantKind::Reflection,
    ];

    pub fn name(self) -> &'static str {
        match self {
            VariantKind::Original => "original",
            VariantKind::Rotation => "rotation",
            VariantKind::Scale => "scale",
            VariantKind::Translation => "translation",
            VariantKind::Reflection => "reflection",
        }
    }

    /// Fixed display color, stable across loads.
    pub fn color(self) -> Rgba8 {
        match self {
            VariantKind::Original => Rgba8::new_opaque(0x1A, 0x00, 0x14),
            VariantKind::Rotation => Rgba8::new_opaque(0xFF, 0x57, 0x33),
            VariantKind::Scale => Rgba8::new_opaque(0x33, 0xFF, 0x57),
            VariantKind::Translation => Rgba8::new_opaque(0xFF, 0xD7, 0x00),
            VariantKind::Reflection => Rgba8::new_opaque(0x33, 0x57, 0xFF),
        }
    }

    pub fn is_derived(self) -> bool {
        self != VariantKind::Original
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VariantKind {
    type Err = VariantError;

    fn from_str(s: &str) -> Result<Self> {
        VariantKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| VariantError::parse(format!("unknown variant '{s}'")))
    }
}

impl Serialize for VariantKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

// ============================================================================
// Variant
// ============================================================================

/// One named version of a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    pub kind: VariantKind,
    pub points: VertexSet,
    pub color: Option<Rgba8>,
}

impl Variant {
    /// A variant tagged with its kind's fixed color.
    pub fn new(kind: VariantKind, points: VertexSet) -> Self {
        Self {
            kind,
            points,
            color: Some(kind.color()),
        }
    }

    pub fn with_color(mut self, color: Option<Rgba8>) -> Self {
        self.color = color;
        self
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

// ============================================================================
// VariantRegistry
// ============================================================================

/// Insertion-ordered mapping from variant kind to variant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariantRegistry {
    variants: Vec<Variant>,
}

impl VariantRegistry {
    /// An empty registry. Only `Original` may be inserted first.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry seeded with `original`.
    pub fn with_original(original: VertexSet) -> Self {
        Self {
            variants: vec![Variant::new(VariantKind::Original, original)],
        }
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn get(&self, kind: VariantKind) -> Option<&Variant> {
        self.variants.iter().find(|v| v.kind == kind)
    }

    pub fn contains(&self, kind: VariantKind) -> bool {
        self.get(kind).is_some()
    }

    pub fn original(&self) -> Option<&VertexSet> {
        self.get(VariantKind::Original).map(|v| &v.points)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Variant> {
        self.variants.iter()
    }

    pub fn kinds(&self) -> Vec<VariantKind> {
        self.variants.iter().map(|v| v.kind).collect()
    }

    /// Insert or overwrite a variant. An overwritten variant keeps its
    /// position. Derived variants require `Original` to be present.
    ///
    /// Replacing `Original` starts a new shape: every derived variant is
    /// dropped, since it was computed from the old points.
    pub fn insert(&mut self, variant: Variant) -> Result<()> {
        if variant.kind.is_derived() && !self.contains(VariantKind::Original) {
            return Err(VariantError::EmptyInput);
        }
        if !variant.kind.is_derived() && !self.variants.is_empty() {
            debug!("new original; dropping {} variants", self.variants.len());
            self.variants.clear();
        }
        match self.variants.iter_mut().find(|v| v.kind == variant.kind) {
            Some(slot) => *slot = variant,
            None => self.variants.push(variant),
        }
        Ok(())
    }

    /// Run the transform against `Original` and store it under its kind.
    pub fn apply(&mut self, spec: &TransformSpec) -> Result<&Variant> {
        let original = self.original().ok_or(VariantError::EmptyInput)?;
        let kind = spec.kind();
        let points = spec.apply(original);
        debug!("{kind}: {} points from {spec:?}", points.len());
        self.insert(Variant::new(kind, points))?;
        self.get(kind).ok_or(VariantError::EmptyInput)
    }

    /// Apply each transform independently against `Original`.
    pub fn apply_all<'a, I>(&mut self, specs: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a TransformSpec>,
    {
        for spec in specs {
            self.apply(spec)?;
        }
        Ok(())
    }

    /// Drop a derived variant. `Original` cannot be removed.
    pub fn remove(&mut self, kind: VariantKind) -> Option<Variant> {
        if !kind.is_derived() {
            return None;
        }
        let idx = self.variants.iter().position(|v| v.kind == kind)?;
        Some(self.variants.remove(idx))
    }
}

impl<'a> IntoIterator for &'a VariantRegistry {
    type Item = &'a Variant;
    type IntoIter = std::slice::Iter<'a, Variant>;

    fn into_iter(self) -> Self::IntoIter {
        self.variants.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::square;
    use crate::transform::{rotate, ReflectionAxis};

    fn registry() -> VariantRegistry {
        VariantRegistry::with_original(square(0.0, 0.0, 5.0))
    }

    #[test]
    fn test_seeded_with_original() {
        let r = registry();
        assert_eq!(r.len(), 1);
        assert_eq!(r.kinds(), vec![VariantKind::Original]);
        assert_eq!(r.original(), Some(&square(0.0, 0.0, 5.0)));
        assert_eq!(
            r.get(VariantKind::Original).unwrap().color,
            Some(VariantKind::Original.color())
        );
    }

    #[test]
    fn test_derived_requires_original() {
        let mut r = VariantRegistry::new();
        assert!(r.is_empty());
        let err = r.apply(&TransformSpec::Scale { sx: 2.0, sy: 2.0 });
        assert!(matches!(err, Err(VariantError::EmptyInput)));
        let err = r.insert(Variant::new(VariantKind::Scale, square(0.0, 0.0, 1.0)));
        assert!(matches!(err, Err(VariantError::EmptyInput)));
        assert!(r.is_empty());

        r.insert(Variant::new(VariantKind::Original, square(0.0, 0.0, 1.0)))
            .unwrap();
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn test_apply_reads_original_not_previous() {
        let mut r = registry();
        r.apply(&TransformSpec::Rotation { angle_degrees: 90.0 })
            .unwrap();
        r.apply(&TransformSpec::Rotation { angle_degrees: 90.0 })
            .unwrap();
        let rotated = &r.get(VariantKind::Rotation).unwrap().points;
        assert!(rotated.approx_eq(&rotate(&square(0.0, 0.0, 5.0), 90.0), 1e-9));
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut r = registry();
        r.apply_all(&[
            TransformSpec::Scale { sx: 2.0, sy: 2.0 },
            TransformSpec::Translation { tx: 1.0, ty: 1.0 },
            TransformSpec::Scale { sx: 3.0, sy: 3.0 },
        ])
        .unwrap();
        assert_eq!(
            r.kinds(),
            vec![
                VariantKind::Original,
                VariantKind::Scale,
                VariantKind::Translation
            ]
        );
        let scaled = &r.get(VariantKind::Scale).unwrap().points;
        assert_eq!(scaled.points()[2].x, 15.0);
    }

    #[test]
    fn test_replacing_original_drops_derived() {
        let mut r = registry();
        r.apply_all(&[
            TransformSpec::Rotation { angle_degrees: 90.0 },
            TransformSpec::Scale { sx: 2.0, sy: 2.0 },
        ])
        .unwrap();
        r.insert(Variant::new(VariantKind::Original, square(100.0, 100.0, 1.0)))
            .unwrap();
        assert_eq!(r.kinds(), vec![VariantKind::Original]);
        assert_eq!(r.original(), Some(&square(100.0, 100.0, 1.0)));

        let rotated = &r
            .apply(&TransformSpec::Rotation { angle_degrees: 90.0 })
            .unwrap()
            .points;
        assert!(rotated.approx_eq(&rotate(&square(100.0, 100.0, 1.0), 90.0), 1e-9));
    }

    #[test]
    fn test_apply_tags_color() {
        let mut r = registry();
        let v = r
            .apply(&TransformSpec::Reflection {
                axis: ReflectionAxis::Horizontal,
            })
            .unwrap();
        assert_eq!(v.color.unwrap().to_hex(), "#3357FF");
        assert_eq!(v.name(), "reflection");
    }

    #[test]
    fn test_remove() {
        let mut r = registry();
        r.apply(&TransformSpec::Scale { sx: 2.0, sy: 2.0 }).unwrap();
        assert!(r.remove(VariantKind::Original).is_none());
        assert!(r.remove(VariantKind::Scale).is_some());
        assert!(r.remove(VariantKind::Scale).is_none());
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn test_kind_names_and_colors() {
        let names: Vec<_> = VariantKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(
            names,
            ["original", "rotation", "scale", "translation", "reflection"]
        );
        let colors: Vec<_> = VariantKind::ALL.iter().map(|k| k.color().to_hex()).collect();
        assert_eq!(colors, ["#1A0014", "#FF5733", "#33FF57", "#FFD700", "#3357FF"]);
        for k in VariantKind::ALL {
            assert_eq!(k.name().parse::<VariantKind>().unwrap(), k);
        }
        assert!("skew".parse::<VariantKind>().is_err());
    }

    #[test]
    fn test_with_color() {
        let v = Variant::new(VariantKind::Scale, square(0.0, 0.0, 1.0)).with_color(None);
        assert!(v.color.is_none());
    }
}
