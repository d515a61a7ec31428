use std::fs;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use voxobj_mesh::{ObjStats, ObjWriter};
use voxobj_scene::{Block, ParseWarning, SceneDocument, SceneError};

use crate::config::ConvertConfig;
use crate::output::OutputFile;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Couldn't find input file! ({}: {source})", .path.display())]
    ReadInput { path: PathBuf, source: io::Error },
    #[error("Failed to parse input file! ({0})")]
    Scene(#[from] SceneError),
    #[error("Failed to create output file! ({}: {source})", .path.display())]
    CreateOutput { path: PathBuf, source: io::Error },
    #[error("Failed to write output file! ({}: {source})", .path.display())]
    WriteOutput { path: PathBuf, source: io::Error },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

/// Outcome of one conversion call. Never an `Err`: failures are reported
/// through `status` and `message`.
#[derive(Debug)]
pub struct Conversion {
    pub blocks: Vec<Block>,
    pub status: Status,
    pub message: String,
    pub warnings: Vec<ParseWarning>,
    pub stats: Option<ObjStats>,
}

impl Conversion {
    #[inline]
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    fn failure(err: ConvertError) -> Self {
        log::warn!("{err}");
        Self {
            blocks: Vec::new(),
            status: Status::Failure,
            message: err.to_string(),
            warnings: Vec::new(),
            stats: None,
        }
    }
}

pub const SUCCESS_MESSAGE: &str = "Output file was successfully created!";

/// Reads `input` and writes the mesh to `output`.
pub fn convert(input: &Path, output: &Path, cfg: &ConvertConfig) -> Conversion {
    match fs::read(input) {
        Ok(bytes) => convert_bytes(&bytes, output, cfg),
        Err(source) => Conversion::failure(ConvertError::ReadInput {
            path: input.to_path_buf(),
            source,
        }),
    }
}

/// Converts scene text that is already in memory.
pub fn convert_bytes(bytes: &[u8], output: &Path, cfg: &ConvertConfig) -> Conversion {
    match try_convert(bytes, output, cfg) {
        Ok((scene_blocks, warnings, stats)) => {
            log::info!(
                "wrote {} block(s), {} face(s) to {}",
                stats.blocks,
                stats.faces,
                output.display()
            );
            if !warnings.is_empty() {
                log::info!("{} element(s) skipped while parsing", warnings.len());
            }
            Conversion {
                blocks: scene_blocks,
                status: Status::Success,
                message: SUCCESS_MESSAGE.to_string(),
                warnings,
                stats: Some(stats),
            }
        }
        Err(err) => Conversion::failure(err),
    }
}

fn try_convert(
    bytes: &[u8],
    output: &Path,
    cfg: &ConvertConfig,
) -> Result<(Vec<Block>, Vec<ParseWarning>, ObjStats), ConvertError> {
    // Checked before the destination is touched
    let doc = SceneDocument::decode_slice(bytes)?;
    log::debug!("decoded {} layer entr(ies)", doc.layer_count());

    let write_err = |source: io::Error| ConvertError::WriteOutput {
        path: output.to_path_buf(),
        source,
    };
    let mut out = OutputFile::create(output, cfg.atomic_write).map_err(|source| {
        ConvertError::CreateOutput {
            path: output.to_path_buf(),
            source,
        }
    })?;

    let (scene, stats) = {
        let mut writer = ObjWriter::new(BufWriter::new(out.file_mut()));
        writer.write_header(&cfg.header()).map_err(write_err)?;
        let scene = doc
            .parse_with(|_, block| writer.write_block_vertices(block))
            .map_err(write_err)?;
        writer
            .write_faces(&scene.blocks, cfg.occlusion.build(&scene.blocks).as_ref())
            .map_err(write_err)?;
        let (_, stats) = writer.finish().map_err(write_err)?;
        (scene, stats)
    };
    out.commit().map_err(write_err)?;
    Ok((scene.blocks, scene.warnings, stats))
}
