use crate::convert::{ConvertOptions, Converter};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Missing {0}")]
    MissingInput(PathBuf),
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to convert {path}: {source}")]
    Convert {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Checks that the markdown input exists before anything is written
pub fn validate_input(path: &Path) -> Result<(), IoError> {
    if !path.exists() {
        return Err(IoError::MissingInput(path.to_path_buf()));
    }
    Ok(())
}

/// Temporary file in `dir` carrying the mode `output` should end up with:
/// the existing file's mode, or `0o644` (less umask) for a new file.
#[cfg(unix)]
fn staged_file(dir: &Path, output: &Path) -> std::io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    match std::fs::metadata(output) {
        Ok(existing) => {
            let staged = Builder::new()
                .permissions(existing.permissions())
                .tempfile_in(dir)?;
            // Creation is filtered by umask; an overwrite keeps the exact mode
            staged.as_file().set_permissions(existing.permissions())?;
            Ok(staged)
        }
        Err(_) => Builder::new()
            .permissions(std::fs::Permissions::from_mode(0o644))
            .tempfile_in(dir),
    }
}

#[cfg(not(unix))]
fn staged_file(dir: &Path, _output: &Path) -> std::io::Result<NamedTempFile> {
    Builder::new().tempfile_in(dir)
}

/// Convert `input` into `output`.
///
/// Output goes to a temporary file next to `output` which only replaces it
/// once the whole input has been converted, so a failed run leaves no
/// partial file behind.
pub fn convert_file(input: &Path, output: &Path, options: ConvertOptions) -> Result<(), IoError> {
    validate_input(input)?;
    log::info!("Converting {} -> {}", input.display(), output.display());

    let reader = File::open(input)
        .map(BufReader::new)
        .map_err(|source| IoError::Read {
            path: input.to_path_buf(),
            source,
        })?;

    let write_err = |source: std::io::Error| IoError::Write {
        path: output.to_path_buf(),
        source,
    };

    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = staged_file(dir, output).map_err(write_err)?;

    {
        let mut writer = BufWriter::new(staged.as_file_mut());
        Converter::new(options)
            .convert(reader, &mut writer)
            .map_err(|source| IoError::Convert {
                path: input.to_path_buf(),
                source,
            })?;
        writer.flush().map_err(write_err)?;
    }

    staged
        .persist(output)
        .map_err(|e| write_err(e.error))?;

    log::info!("Wrote {}", output.display());
    Ok(())
}
