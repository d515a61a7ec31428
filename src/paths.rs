use std::path::{Path, PathBuf};

use clap::ValueEnum;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Location {
    /// Current working directory
    Cmd,
    /// Directory of the input file
    Input,
}

fn has_extension(path: &Path, ext: &str) -> bool {
    let stem_ok = path.file_stem().is_some_and(|s| !s.is_empty());
    stem_ok && path.extension().is_some_and(|e| e == ext)
}

pub fn json_path(arg: &str) -> Result<PathBuf, String> {
    let p = PathBuf::from(arg);
    if has_extension(&p, "json") {
        Ok(p)
    } else {
        Err("input has to be .json and the file name must contain at least 1 character".into())
    }
}

pub fn obj_path(arg: &str) -> Result<PathBuf, String> {
    let p = PathBuf::from(arg);
    if has_extension(&p, "obj") {
        Ok(p)
    } else {
        Err("output has to be .obj and the file name must contain at least 1 character".into())
    }
}

/// Picks the output path from the optional explicit output and location policy.
pub fn resolve_output(input: &Path, output: Option<&Path>, location: Option<Location>) -> PathBuf {
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| input.with_extension("obj"));
    let Some(location) = location else {
        return output;
    };
    let Some(name) = output.file_name() else {
        return output;
    };
    match location {
        Location::Cmd => PathBuf::from(name),
        Location::Input => input
            .parent()
            .map(|dir| dir.join(name))
            .unwrap_or_else(|| PathBuf::from(name)),
    }
}
