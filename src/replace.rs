// File: src/replace.rs
use crate::error::ReplaceError;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Substitutes one word for another across the target corpus.
pub trait Replacer {
    fn replace(&mut self, from: &str, to: &str) -> Result<(), ReplaceError>;
}

/// Rewrites every occurrence of `from` in a fixed set of files.
///
/// Matching is literal and global, so `from` is also replaced inside longer
/// words. Each file is written to a temp file next to it and renamed into
/// place; files without a match are not touched. A failing file does not
/// stop the others, and the first failure is returned.
#[derive(Debug, Clone)]
pub struct FileReplacer {
    files: Vec<PathBuf>,
}

impl FileReplacer {
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self { files }
    }
}

impl Replacer for FileReplacer {
    fn replace(&mut self, from: &str, to: &str) -> Result<(), ReplaceError> {
        if from.is_empty() {
            return Err(ReplaceError::Other("cannot replace an empty word".to_string()));
        }
        let mut first_error = None;
        for path in &self.files {
            match rewrite_file(path, from, to) {
                Ok(true) => debug!(path = %path.display(), from, to, "rewrote file"),
                Ok(false) => {}
                Err(source) if first_error.is_none() => {
                    first_error = Some(ReplaceError::Rewrite { path: path.clone(), source });
                }
                Err(source) => {
                    debug!(path = %path.display(), error = %source, "further rewrite failure");
                }
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Returns whether the file changed. The file is handled as raw bytes, so
/// text in any ASCII-compatible encoding is rewritten in place.
fn rewrite_file(path: &Path, from: &str, to: &str) -> std::io::Result<bool> {
    let bytes = fs::read(path)?;
    let Some(replaced) = replace_bytes(&bytes, from.as_bytes(), to.as_bytes()) else {
        return Ok(false);
    };

    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let permissions = fs::metadata(path)?.permissions();
    let mut temp_file = NamedTempFile::new_in(parent_dir)?;
    temp_file.write_all(&replaced)?;
    temp_file.flush()?;
    fs::set_permissions(temp_file.path(), permissions)?;
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(true)
}

/// Every non-overlapping occurrence of `from` replaced by `to`, scanning left
/// to right. `None` when `from` does not occur.
fn replace_bytes(haystack: &[u8], from: &[u8], to: &[u8]) -> Option<Vec<u8>> {
    let mut out = Vec::with_capacity(haystack.len());
    let mut rest = haystack;
    let mut found = false;
    while let Some(pos) = rest.windows(from.len()).position(|w| w == from) {
        out.extend_from_slice(&rest[..pos]);
        out.extend_from_slice(to);
        rest = &rest[pos + from.len()..];
        found = true;
    }
    if !found {
        return None;
    }
    out.extend_from_slice(rest);
    Some(out)
}
