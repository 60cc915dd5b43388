//! A flashcard table kept in a local JSON file, for offline use.
//!
//! The file holds the whole grid, header row included, in the same shape the
//! spreadsheet returns it. Each write replaces the file in one rename and
//! leaves a timestamped copy in the backups directory. Opening a table whose
//! file is missing creates an empty one and leaves existing copies alone.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use sheetcards_core::{CoreError, SheetTable};
use std::io;
use std::path::{Path, PathBuf};
use tokio::task;

pub mod backup;
pub mod paths;

pub use backup::BackupSet;

const FILE_VERSION: u32 = 1;

/// Copies kept per table unless told otherwise.
pub const DEFAULT_BACKUPS: usize = 10;

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Grid {
    version: u32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    rows: Vec<Vec<String>>,
}

impl Grid {
    fn empty() -> Self {
        let now = Utc::now();
        Self {
            version: FILE_VERSION,
            created_at: now,
            updated_at: now,
            rows: Vec::new(),
        }
    }

    fn set_cell(&mut self, row: usize, col: usize, value: &str) {
        if self.rows.len() < row {
            self.rows.resize(row, Vec::new());
        }
        let cells = &mut self.rows[row - 1];
        if cells.len() < col {
            cells.resize(col, String::new());
        }
        cells[col - 1] = value.to_string();
    }

    /// Appends below the last row holding any text.
    fn append(&mut self, rows: Vec<Vec<String>>) {
        while self.rows.last().is_some_and(|r| r.iter().all(|c| c.is_empty())) {
            self.rows.pop();
        }
        self.rows.extend(rows);
    }
}

pub struct JsonTable {
    path: PathBuf,
    backups: BackupSet,
    grid: RwLock<Grid>,
}

impl JsonTable {
    /// The per-user table with backups beside it.
    pub async fn open_default() -> Result<Self, CoreError> {
        Self::open(paths::default_table_file()).await
    }

    pub async fn open(path: PathBuf) -> Result<Self, CoreError> {
        let backups = paths::backups_dir_for(&path);
        Self::open_with(path, backups, DEFAULT_BACKUPS).await
    }

    pub async fn open_with(path: PathBuf, backups_dir: PathBuf, keep: usize) -> Result<Self, CoreError> {
        let backups = BackupSet::for_table(&path, backups_dir, keep);
        let grid = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice::<Grid>(&bytes)
                .map_err(|e| CoreError::RemoteRead(format!("{}: {e}", path.display())))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let grid = Grid::empty();
                create_file(path.clone(), grid.clone()).await?;
                tracing::info!(path = %path.display(), "created empty json table");
                grid
            }
            Err(e) => return Err(CoreError::RemoteRead(format!("{}: {e}", path.display()))),
        };
        tracing::debug!(path = %path.display(), rows = grid.rows.len(), "opened json table");
        Ok(Self {
            path,
            backups,
            grid: RwLock::new(grid),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backups(&self) -> &BackupSet {
        &self.backups
    }

    /// Applies `edit` to the grid and writes the result out.
    async fn commit(&self, edit: impl FnOnce(&mut Grid)) -> Result<(), CoreError> {
        let image = {
            let mut grid = self.grid.write();
            edit(&mut *grid);
            grid.updated_at = Utc::now();
            grid.clone()
        };
        let path = self.path.clone();
        let backups = self.backups.clone();
        task::spawn_blocking(move || -> io::Result<()> {
            let bytes = encode(&image)?;
            backup::write_atomic(parent_dir(&path), &path, &bytes)?;
            let copy = backups.store(&bytes)?;
            tracing::trace!(backup = %copy.display(), "stored backup");
            Ok(())
        })
        .await
        .map_err(|e| CoreError::RemoteWrite(e.to_string()))?
        .map_err(|e| CoreError::RemoteWrite(format!("{}: {e}", self.path.display())))
    }
}

fn encode(grid: &Grid) -> io::Result<Vec<u8>> {
    serde_json::to_vec_pretty(grid).map_err(io::Error::from)
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

/// First write of a new table: the file only, no backup.
async fn create_file(path: PathBuf, grid: Grid) -> Result<(), CoreError> {
    task::spawn_blocking(move || -> io::Result<()> {
        let dir = parent_dir(&path);
        std::fs::create_dir_all(dir)?;
        backup::write_atomic(dir, &path, &encode(&grid)?)
    })
    .await
    .map_err(|e| CoreError::RemoteWrite(e.to_string()))?
    .map_err(|e| CoreError::RemoteWrite(e.to_string()))
}

#[async_trait]
impl SheetTable for JsonTable {
    async fn read_rows(&self) -> Result<Vec<Vec<String>>, CoreError> {
        Ok(self.grid.read().rows.clone())
    }

    async fn update_cell(&self, row: usize, col: usize, value: &str) -> Result<(), CoreError> {
        if row == 0 || col == 0 {
            return Err(CoreError::RemoteWrite(format!("invalid cell ({row}, {col})")));
        }
        self.commit(|g| g.set_cell(row, col, value)).await
    }

    async fn append_rows(&self, rows: Vec<Vec<String>>) -> Result<(), CoreError> {
        self.commit(|g| g.append(rows)).await
    }
}
