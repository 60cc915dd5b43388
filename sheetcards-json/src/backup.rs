//! Timestamped copies of a table file.
//!
//! Copies are named `<stem>-<timestamp>.json` after the table they belong to,
//! so several tables can share one directory and pruning one table never
//! touches another's copies.

use chrono::{Local, NaiveDateTime};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const STAMP: &str = "%Y%m%dT%H%M%S%.3f";

#[derive(Clone, Debug)]
pub struct BackupSet {
    dir: PathBuf,
    stem: String,
    keep: usize,
}

impl BackupSet {
    pub fn for_table(table: &Path, dir: impl Into<PathBuf>, keep: usize) -> Self {
        let stem = table
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("table")
            .to_string();
        Self {
            dir: dir.into(),
            stem,
            keep: keep.max(1),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Copies of this table, oldest first.
    pub fn list(&self) -> io::Result<Vec<PathBuf>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };
        let mut stamped: Vec<(NaiveDateTime, PathBuf)> = entries
            .filter_map(|e| e.ok())
            .filter_map(|e| {
                let path = e.path();
                let taken = self.taken_at(path.file_name()?.to_str()?)?;
                Some((taken, path))
            })
            .collect();
        stamped.sort();
        Ok(stamped.into_iter().map(|(_, p)| p).collect())
    }

    /// Writes `bytes` as the newest copy, then drops the oldest past `keep`.
    pub fn store(&self, bytes: &[u8]) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let name = format!("{}-{}.json", self.stem, Local::now().naive_local().format(STAMP));
        let target = self.dir.join(name);
        write_atomic(&self.dir, &target, bytes)?;
        self.prune()?;
        Ok(target)
    }

    fn prune(&self) -> io::Result<()> {
        let copies = self.list()?;
        let excess = copies.len().saturating_sub(self.keep);
        for old in &copies[..excess] {
            if let Err(e) = fs::remove_file(old) {
                tracing::warn!(path = %old.display(), error = %e, "could not remove old backup");
            }
        }
        Ok(())
    }

    /// Parses the timestamp out of a file name that belongs to this table.
    fn taken_at(&self, file_name: &str) -> Option<NaiveDateTime> {
        let stamp = file_name
            .strip_prefix(self.stem.as_str())?
            .strip_prefix('-')?
            .strip_suffix(".json")?;
        NaiveDateTime::parse_from_str(stamp, STAMP).ok()
    }
}

/// Replaces `target` in one rename, the temporary file living in `dir`.
pub(crate) fn write_atomic(dir: &Path, target: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(target).map_err(|e| e.error)?;
    Ok(())
}
