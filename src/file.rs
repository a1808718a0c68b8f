// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::data::Transcripts;
use crate::error::{Error, Result};

/// Write the whole document to `export.out_path` as JSON.
/// Returns the final path written to.
pub fn write_json(export: &ExportOptions, doc: &Transcripts) -> Result<PathBuf> {
    let path = export.out_path.clone();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(&path).map_err(|e| Error::io(&path, e))?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    if export.pretty {
        serde_json::to_writer_pretty(&mut out, doc)?;
    } else {
        serde_json::to_writer(&mut out, doc)?;
    }
    out.flush().map_err(|e| Error::io(&path, e))?;

    logf!(
        "Export: Wrote {} ({} episodes, {} lines)",
        path.display(),
        doc.episode_count(),
        doc.line_count()
    );
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        let msg = format!("path exists but is not a directory: {}", dir.display());
        return Err(Error::io(dir, std::io::Error::new(std::io::ErrorKind::AlreadyExists, msg)));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    Ok(())
}
