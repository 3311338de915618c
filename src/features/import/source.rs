//! Raw file selection
//!
//! A [`RawFile`] is one entry of a user's folder selection: a name, a MIME
//! hint (possibly empty) and a way to reach the bytes.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use walkdir::WalkDir;

use super::encoding::decode_string;
use super::extension;

/// Where a selected file's content lives
#[derive(Debug, Clone)]
pub enum FileSource {
    /// On disk
    Path(PathBuf),
    /// Already in memory (e.g. handed over by an upload)
    Memory(Arc<[u8]>),
}

/// One selected file
#[derive(Debug, Clone)]
pub struct RawFile {
    /// File name without directories
    pub name: String,
    /// MIME type hint; empty when the host could not tell
    pub mime: String,
    pub source: FileSource,
}

/// An import's input: the files in selection order
pub type RawFileSet = Vec<RawFile>;

impl RawFile {
    /// Describe a file on disk, guessing the MIME hint from its extension
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            mime: guess_mime(&name).to_string(),
            name,
            source: FileSource::Path(path),
        }
    }

    /// Describe an in-memory file
    pub fn in_memory(name: impl Into<String>, mime: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            source: FileSource::Memory(bytes.into()),
        }
    }

    /// Session-scoped reference to this file, used as a track's audio or cover URL
    pub fn object_url(&self) -> String {
        match &self.source {
            FileSource::Path(path) => format!("file://{}", path.display()),
            FileSource::Memory(_) => format!("memory:{}", self.name),
        }
    }

    /// Read the file as text, tolerating legacy encodings
    pub async fn read_text(&self) -> Result<String> {
        match &self.source {
            FileSource::Path(path) => {
                let bytes = tokio::fs::read(path)
                    .await
                    .with_context(|| format!("failed to read {}", path.display()))?;
                Ok(decode_string(&bytes))
            }
            FileSource::Memory(bytes) => Ok(decode_string(bytes)),
        }
    }
}

/// MIME hint for a file name, empty when unknown
pub fn guess_mime(file_name: &str) -> &'static str {
    match extension(file_name).as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("flac") => "audio/flac",
        Some("m4a") => "audio/mp4",
        Some("ogg") => "audio/ogg",
        Some("opus") => "audio/opus",
        Some("aac") => "audio/aac",
        _ => "",
    }
}

/// Collect every file under `root` as a selection, ordered by path
///
/// Entries that cannot be read (dangling links, unreadable directories) are
/// skipped. Paths are absolute so that [`RawFile::object_url`] is a valid URI.
pub fn raw_files_from_dir(root: &Path) -> Result<RawFileSet> {
    if !root.is_dir() {
        anyhow::bail!("{} is not a directory", root.display());
    }
    let root = root
        .canonicalize()
        .with_context(|| format!("failed to resolve {}", root.display()))?;

    let files: RawFileSet = WalkDir::new(&root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry in {}: {}", root.display(), e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| RawFile::from_path(entry.into_path()))
        .collect();

    tracing::debug!("Collected {} files from {}", files.len(), root.display());
    Ok(files)
}
