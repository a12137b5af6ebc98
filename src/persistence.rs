// File: src/persistence.rs
//! On-disk format of the confirmed-words log: plain text, one word per
//! line, append-only. Duplicate and blank lines are tolerated on read.

use std::collections::{BTreeSet, HashSet};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Reads every word in the log. `Ok(None)` if the file does not exist.
pub fn read_log(path: &Path) -> io::Result<Option<HashSet<String>>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };

    let mut words = HashSet::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.insert(word.to_string());
        }
    }
    Ok(Some(words))
}

/// Appends one word and flushes before returning.
pub fn append_word(path: &Path, word: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", word)?;
    file.flush()
}

/// Replaces the log with `words`, deduplicated and sorted.
/// The new content is written to a temp file and renamed into place.
pub fn rewrite_log<'a, I>(path: &Path, words: I) -> io::Result<()>
where
    I: IntoIterator<Item = &'a String>,
{
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let sorted: BTreeSet<&String> = words.into_iter().collect();
    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        for word in sorted {
            writeln!(writer, "{}", word)?;
        }
        writer.flush()?;
    }
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
