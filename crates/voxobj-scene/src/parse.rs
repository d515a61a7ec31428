use std::convert::Infallible;
use std::fmt;

use serde_json::{Map, Value};

use crate::block::{Block, Layer};

const KEY_LAYER: &str = "layer";
const KEY_OPAQUE: &str = "opaque";
const KEY_POSITIONS: &str = "positions";

/// Fatal problems with the input as a whole.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("input is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("top-level value is {0}, expected an array of layers")]
    NotAnArray(&'static str),
}

/// Why a layer entry was skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayerDefect {
    NotAnObject,
    MissingField(&'static str),
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
    EmptyName,
}

impl fmt::Display for LayerDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerDefect::NotAnObject => write!(f, "entry is not an object"),
            LayerDefect::MissingField(name) => write!(f, "missing field `{name}`"),
            LayerDefect::WrongType { field, expected } => {
                write!(f, "field `{field}` is not {expected}")
            }
            LayerDefect::EmptyName => write!(f, "layer name is empty"),
        }
    }
}

/// Why a single position entry was skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PositionDefect {
    NotAnArray,
    WrongArity(usize),
    NotAnInteger(usize),
}

impl fmt::Display for PositionDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionDefect::NotAnArray => write!(f, "position is not an array"),
            PositionDefect::WrongArity(n) => write!(f, "expected 3 coordinates, found {n}"),
            PositionDefect::NotAnInteger(i) => {
                write!(f, "coordinate {i} is not a 32-bit integer")
            }
        }
    }
}

/// A recoverable problem; the offending element was skipped.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseWarning {
    #[error("failed to parse layer {layer_index}: {defect}")]
    MalformedLayer {
        layer_index: usize,
        defect: LayerDefect,
    },
    #[error("failed to parse block {position_index} of layer {layer_index}: {defect}")]
    MalformedPosition {
        layer_index: usize,
        position_index: usize,
        defect: PositionDefect,
    },
}

#[derive(Clone, Debug, Default)]
pub struct ParsedScene {
    pub layers: Vec<Layer>,
    pub blocks: Vec<Block>,
    pub warnings: Vec<ParseWarning>,
}

impl ParsedScene {
    pub fn skipped_layers(&self) -> usize {
        self.warnings
            .iter()
            .filter(|w| matches!(w, ParseWarning::MalformedLayer { .. }))
            .count()
    }

    pub fn skipped_positions(&self) -> usize {
        self.warnings
            .iter()
            .filter(|w| matches!(w, ParseWarning::MalformedPosition { .. }))
            .count()
    }
}

/// Input whose top-level shape has been checked. Layer entries are still raw
/// and get validated one by one in [`SceneDocument::parse_with`].
#[derive(Clone, Debug)]
pub struct SceneDocument {
    entries: Vec<Value>,
}

impl SceneDocument {
    pub fn decode(text: &str) -> Result<Self, SceneError> {
        Self::decode_slice(text.as_bytes())
    }

    pub fn decode_slice(bytes: &[u8]) -> Result<Self, SceneError> {
        match serde_json::from_slice::<Value>(bytes)? {
            Value::Array(entries) => Ok(Self { entries }),
            other => Err(SceneError::NotAnArray(kind_of(&other))),
        }
    }

    #[inline]
    pub fn layer_count(&self) -> usize {
        self.entries.len()
    }

    /// Validates every layer and position in input order. Each accepted block is
    /// handed to `sink` together with its index in the final block list before
    /// the next entry is looked at; the first sink error aborts the walk.
    pub fn parse_with<E>(
        &self,
        mut sink: impl FnMut(usize, &Block) -> Result<(), E>,
    ) -> Result<ParsedScene, E> {
        let mut scene = ParsedScene::default();
        for (layer_index, entry) in self.entries.iter().enumerate() {
            let (name, opaque, positions) = match layer_fields(entry) {
                Ok(fields) => fields,
                Err(defect) => {
                    let w = ParseWarning::MalformedLayer {
                        layer_index,
                        defect,
                    };
                    log::warn!("{w}");
                    scene.warnings.push(w);
                    continue;
                }
            };
            let mut layer = Layer {
                name: name.to_string(),
                opaque,
                positions: Vec::with_capacity(positions.len()),
            };
            for (position_index, pos) in positions.iter().enumerate() {
                let triple = match position_triple(pos) {
                    Ok(t) => t,
                    Err(defect) => {
                        let w = ParseWarning::MalformedPosition {
                            layer_index,
                            position_index,
                            defect,
                        };
                        log::warn!("{w}");
                        scene.warnings.push(w);
                        continue;
                    }
                };
                let block = Block::from_input(name, opaque, triple);
                sink(scene.blocks.len(), &block)?;
                scene.blocks.push(block);
                layer.positions.push(triple);
            }
            log::debug!(
                "layer {} `{}`: {} block(s), opaque={}",
                layer_index,
                layer.name,
                layer.positions.len(),
                layer.opaque
            );
            scene.layers.push(layer);
        }
        Ok(scene)
    }

    pub fn parse(&self) -> ParsedScene {
        match self.parse_with(|_, _| Ok::<(), Infallible>(())) {
            Ok(scene) => scene,
            Err(never) => match never {},
        }
    }
}

/// Decodes `text` and collects every valid block.
pub fn parse_scene(text: &str) -> Result<ParsedScene, SceneError> {
    Ok(SceneDocument::decode(text)?.parse())
}

fn layer_fields(entry: &Value) -> Result<(&str, bool, &Vec<Value>), LayerDefect> {
    let obj: &Map<String, Value> = entry.as_object().ok_or(LayerDefect::NotAnObject)?;
    let name = obj.get(KEY_LAYER).ok_or(LayerDefect::MissingField(KEY_LAYER))?;
    let opaque = obj
        .get(KEY_OPAQUE)
        .ok_or(LayerDefect::MissingField(KEY_OPAQUE))?;
    let positions = obj
        .get(KEY_POSITIONS)
        .ok_or(LayerDefect::MissingField(KEY_POSITIONS))?;

    let name = name.as_str().ok_or(LayerDefect::WrongType {
        field: KEY_LAYER,
        expected: "a string",
    })?;
    let opaque = opaque.as_bool().ok_or(LayerDefect::WrongType {
        field: KEY_OPAQUE,
        expected: "a boolean",
    })?;
    let positions = positions.as_array().ok_or(LayerDefect::WrongType {
        field: KEY_POSITIONS,
        expected: "an array",
    })?;
    if name.is_empty() {
        return Err(LayerDefect::EmptyName);
    }
    Ok((name, opaque, positions))
}

fn position_triple(pos: &Value) -> Result<[i32; 3], PositionDefect> {
    let coords = pos.as_array().ok_or(PositionDefect::NotAnArray)?;
    if coords.len() != 3 {
        return Err(PositionDefect::WrongArity(coords.len()));
    }
    let mut out = [0i32; 3];
    for (i, c) in coords.iter().enumerate() {
        out[i] = c
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or(PositionDefect::NotAnInteger(i))?;
    }
    Ok(out)
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
