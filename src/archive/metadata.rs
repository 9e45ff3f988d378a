//! SilicaBrush metadata graph.
//!
//! The host application unarchives `Brush.archive` with NSKeyedArchiver
//! into its `SilicaBrush` class; the key set, UID wiring, and structural
//! constants here are its fixed contract.

use byteorder::{LittleEndian, WriteBytesExt};

use crate::error::Result;
use crate::spec::BrushSpec;

use super::plist::{self, Value};

/// Build the binary metadata entry for a completed brush.
pub fn brush_archive(spec: &BrushSpec) -> Result<Vec<u8>> {
    plist::to_bytes(&archive_graph(spec)?)
}

fn archive_graph(spec: &BrushSpec) -> Result<Value> {
    let objects = Value::Array(vec![
        Value::from("$null"),
        brush_object(spec),
        Value::Data(colour_data()?),
        Value::from(spec.name.as_str()),
        Value::Dict(vec![
            entry("$classname", Value::from("SilicaBrush")),
            entry(
                "$classes",
                Value::Array(vec![Value::from("SilicaBrush"), Value::from("NSObject")]),
            ),
        ]),
    ]);

    Ok(Value::Dict(vec![
        entry("$version", Value::Int(100_000)),
        entry("$archiver", Value::from("NSKeyedArchiver")),
        entry("$top", Value::Dict(vec![entry("root", Value::Uid(1))])),
        entry("$objects", objects),
    ]))
}

/// The root SilicaBrush instance.
///
/// `bundledShapePath` and `bundledGrainPath` reference `$null` so the
/// host reads the PNGs embedded beside the archive.
fn brush_object(spec: &BrushSpec) -> Value {
    let stroke = &spec.stroke;

    Value::Dict(vec![
        entry("$class", Value::Uid(4)),
        entry("name", Value::Uid(3)),
        entry("color", Value::Uid(2)),
        entry("bundledShapePath", Value::Uid(0)),
        entry("bundledGrainPath", Value::Uid(0)),
        // Stroke path
        entry("plotSpacing", Value::Real(stroke.spacing)),
        entry("plotJitter", Value::Real(stroke.jitter)),
        entry("plotSmoothing", Value::Real(stroke.stream_line)),
        entry("stamp", Value::Bool(false)),
        entry("oriented", Value::Bool(false)),
        // Shape
        entry("shapeRandomise", Value::Bool(false)),
        entry("shapeRotation", Value::Real(0.0)),
        entry("shapeScatter", Value::Real(0.0)),
        // Grain / texture
        entry("textureScale", Value::Real(stroke.grain_depth)),
        entry(
            "textureMovement",
            Value::Real(if stroke.grain_mode == 0 { 1.0 } else { 0.0 }),
        ),
        entry("textureFilter", Value::Bool(true)),
        entry("textureRotation", Value::Real(0.0)),
        entry("textureZoom", Value::Real(1.0)),
        // Rendering
        entry("blendMode", Value::Int(stroke.blend_mode)),
        entry("paintOpacity", Value::Real(stroke.opacity)),
        entry("paintSize", Value::Real(stroke.maximum_size)),
        // Dynamics - pressure
        entry("dynamicsPressureSize", Value::Real(stroke.pressure_size)),
        entry(
            "dynamicsPressureOpacity",
            Value::Real(stroke.pressure_opacity),
        ),
        // Dynamics - speed
        entry("dynamicsSpeedSize", Value::Real(0.0)),
        entry("dynamicsSpeedOpacity", Value::Real(0.0)),
        entry("dynamicsFalloff", Value::Real(0.0)),
        entry("dynamicsGlaze", Value::Bool(false)),
        entry("dynamicsMix", Value::Real(0.0)),
        // Size / opacity range
        entry("maxSize", Value::Real(1.0)),
        entry(
            "minSize",
            Value::Real(stroke.minimum_size / stroke.maximum_size.max(0.001)),
        ),
        entry("maxOpacity", Value::Real(1.0)),
        entry("minOpacity", Value::Real(0.0)),
        // Taper
        entry(
            "taperStartLength",
            Value::Real(if stroke.head_taper { 0.3 } else { 0.0 }),
        ),
        entry(
            "taperEndLength",
            Value::Real(if stroke.tail_taper { 0.3 } else { 0.0 }),
        ),
        entry("taperSize", Value::Real(1.0)),
        entry("taperOpacity", Value::Real(1.0)),
        // Secondary modes
        entry("eraseOpacity", Value::Real(0.5)),
        entry("eraseSize", Value::Real(0.3)),
        entry("smudgeOpacity", Value::Real(0.5)),
        entry("smudgeSize", Value::Real(0.3)),
    ])
}

/// Brush colour: four little-endian floats, black with full alpha.
fn colour_data() -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(16);
    for component in [0.0f32, 0.0, 0.0, 1.0] {
        bytes.write_f32::<LittleEndian>(component)?;
    }
    Ok(bytes)
}

fn entry(key: &str, value: Value) -> (String, Value) {
    (key.to_string(), value)
}
