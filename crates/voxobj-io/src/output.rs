use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile};

enum Target {
    Staged(NamedTempFile),
    Direct(File),
}

/// Destination of one conversion. With staging, nothing appears at `path`
/// until [`OutputFile::commit`] succeeds.
pub(crate) struct OutputFile {
    path: PathBuf,
    target: Target,
}

impl OutputFile {
    pub(crate) fn create(path: &Path, staged: bool) -> io::Result<Self> {
        let target = if staged {
            let dir = match path.parent() {
                Some(p) if !p.as_os_str().is_empty() => p,
                _ => Path::new("."),
            };
            Target::Staged(staging_file(path, dir)?)
        } else {
            Target::Direct(File::create(path)?)
        };
        Ok(Self {
            path: path.to_path_buf(),
            target,
        })
    }

    pub(crate) fn file_mut(&mut self) -> &mut File {
        match &mut self.target {
            Target::Staged(tmp) => tmp.as_file_mut(),
            Target::Direct(f) => f,
        }
    }

    /// Moves staged bytes over the destination. Dropping without committing
    /// removes the temporary file.
    pub(crate) fn commit(self) -> io::Result<()> {
        match self.target {
            Target::Staged(tmp) => {
                tmp.persist(&self.path).map_err(|e| e.error)?;
            }
            Target::Direct(f) => f.sync_all()?,
        }
        Ok(())
    }
}

/// Temporary file in `dir` that ends up with the permissions a plain create
/// of `path` would give: the existing file's mode if there is one, otherwise
/// the default mode filtered by the process umask.
fn staging_file(path: &Path, dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".voxobj");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Same mode `File::create` asks for; the kernel applies the umask
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let tmp = builder.tempfile_in(dir)?;
    if let Ok(meta) = fs::metadata(path) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    Ok(tmp)
}
