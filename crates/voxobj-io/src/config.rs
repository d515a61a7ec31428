use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use voxobj_mesh::{ObjHeader, OcclusionStrategy};

/// Conversion settings. Every key is optional in TOML:
///
/// ```toml
/// header_comment = "Minecraft Scene"
/// mtllib = "Resources/minecraftMats.mtl"
/// occlusion = "indexed"   # or "exhaustive"
/// atomic_write = true
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    pub header_comment: String,
    pub mtllib: String,
    pub occlusion: OcclusionStrategy,
    /// Write into a temporary file next to the output and rename it into place.
    pub atomic_write: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        let header = ObjHeader::default();
        Self {
            header_comment: header.comment,
            mtllib: header.mtllib,
            occlusion: OcclusionStrategy::default(),
            atomic_write: true,
        }
    }
}

impl ConvertConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn header(&self) -> ObjHeader {
        ObjHeader {
            comment: self.header_comment.clone(),
            mtllib: self.mtllib.clone(),
        }
    }
}
