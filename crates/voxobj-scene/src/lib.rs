//! Scene description types and the layer/position parser.
#![forbid(unsafe_code)]

pub mod block;
pub mod parse;

pub use block::{Block, Layer, capitalize_first};
pub use parse::{
    LayerDefect, ParseWarning, ParsedScene, PositionDefect, SceneDocument, SceneError,
    parse_scene,
};
