use js_sys::Array;
use shape_variants::extent::{ExtentPolicy, DEFAULT_MARGIN};
use shape_variants::frame::RenderFrame;
use shape_variants::params::{parse_vertices, TransformInputs};
use shape_variants::pipeline::load_str;
use shape_variants::session::Session;
use shape_variants::shapes::ShapeSpec;
use shape_variants::VariantError;
use wasm_bindgen::prelude::*;

const SHAPE_NAMES: [&str; 3] = ["square", "triangle", "circle"];

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

fn to_js(e: VariantError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Load a JSON pipeline document and return its render frame as JSON.
///
/// Errors are thrown as JS exceptions carrying the message.
#[wasm_bindgen]
pub fn load_pipeline(json: &str) -> Result<String, JsValue> {
    let loaded = load_str(json).map_err(to_js)?;
    RenderFrame::from_pipeline(&loaded)
        .and_then(|frame| frame.to_json())
        .map_err(to_js)
}

/// Build a shape, apply the raw transform fields and return the frame JSON
/// with a symmetric extent.
///
/// `shape` is one of [`shape_names`] (built with default parameters) or a
/// vertex list `"x,y;x,y;..."`. Malformed transform fields are skipped.
#[wasm_bindgen]
pub fn apply_transforms(
    shape: &str,
    rotation: &str,
    scale: &str,
    translation: &str,
    reflection: &str,
) -> Result<String, JsValue> {
    let spec = match shape.trim() {
        "square" => ShapeSpec::default_square(),
        "triangle" => ShapeSpec::default_triangle(),
        "circle" => ShapeSpec::default_circle(),
        other => ShapeSpec::Vertices(parse_vertices(other).map_err(to_js)?),
    };
    let mut session = Session::new();
    session.new_shape(&spec).map_err(to_js)?;
    session
        .apply(&TransformInputs {
            rotation: rotation.to_string(),
            scale: scale.to_string(),
            translation: translation.to_string(),
            reflection: reflection.to_string(),
        })
        .map_err(to_js)?;
    session
        .frame(ExtentPolicy::Symmetric, DEFAULT_MARGIN)
        .and_then(|frame| frame.to_json())
        .map_err(to_js)
}

/// Get the library version string.
#[wasm_bindgen]
pub fn version() -> String {
    format!("shape-variants {}", env!("CARGO_PKG_VERSION"))
}

/// Get the list of built-in shape names.
#[wasm_bindgen]
pub fn shape_names() -> Array {
    SHAPE_NAMES.iter().map(|s| JsValue::from_str(s)).collect()
}
