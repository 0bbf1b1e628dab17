//! Interactive session state.
//!
//! A session holds at most one registry. Picking a new shape or loading a
//! pipeline replaces it wholesale; transform input is applied to whatever
//! registry is current.

use std::path::Path;

use log::debug;

use crate::error::{Result, VariantError};
use crate::extent::{compute, Extent, ExtentPolicy};
use crate::frame::RenderFrame;
use crate::params::{apply_inputs, ApplyReport, TransformInputs};
use crate::pipeline::{load_file, load_str, LoadedPipeline};
use crate::shapes::ShapeSpec;
use crate::variant::VariantRegistry;

#[derive(Debug, Clone, Default)]
pub struct Session {
    registry: Option<VariantRegistry>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> Option<&VariantRegistry> {
        self.registry.as_ref()
    }

    pub fn has_shape(&self) -> bool {
        self.registry.is_some()
    }

    /// Build `shape` and start over with it as the only variant. On error
    /// the previous registry is kept.
    pub fn new_shape(&mut self, shape: &ShapeSpec) -> Result<&VariantRegistry> {
        let points = shape.build()?;
        debug!("new {} with {} points", shape.name(), points.len());
        Ok(self.registry.insert(VariantRegistry::with_original(points)))
    }

    /// Replace the current registry with a loaded pipeline.
    pub fn load_pipeline_str(&mut self, text: &str) -> Result<f64> {
        let loaded = load_str(text)?;
        Ok(self.adopt(loaded))
    }

    pub fn load_pipeline_file(&mut self, path: impl AsRef<Path>) -> Result<f64> {
        let loaded = load_file(path)?;
        Ok(self.adopt(loaded))
    }

    fn adopt(&mut self, loaded: LoadedPipeline) -> f64 {
        self.registry = Some(loaded.registry);
        loaded.max_abs
    }

    pub fn apply(&mut self, inputs: &TransformInputs) -> Result<ApplyReport> {
        let registry = self.registry.as_mut().ok_or(VariantError::EmptyInput)?;
        apply_inputs(registry, inputs)
    }

    pub fn extent(&self, policy: ExtentPolicy, margin: f64) -> Result<Extent> {
        let registry = self.registry.as_ref().ok_or(VariantError::EmptyRegistry)?;
        compute(registry, policy, margin)
    }

    pub fn frame(&self, policy: ExtentPolicy, margin: f64) -> Result<RenderFrame> {
        let registry = self.registry.as_ref().ok_or(VariantError::EmptyRegistry)?;
        RenderFrame::from_registry(registry, policy, margin)
    }

    pub fn clear(&mut self) {
        self.registry = None;
    }
}
