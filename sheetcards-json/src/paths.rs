use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const TABLE_FILE_NAME: &str = "flashcards.json";
pub const BACKUPS_DIR_NAME: &str = "backups";

/// Per-user data directory, or the working directory when the platform has
/// no notion of one.
pub fn data_root() -> PathBuf {
    ProjectDirs::from("com", "sheetcards", "SheetCards")
        .map(|pd| pd.data_dir().to_path_buf())
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn default_table_file() -> PathBuf {
    data_root().join(TABLE_FILE_NAME)
}

/// `backups/` next to the table file.
pub fn backups_dir_for(table: &Path) -> PathBuf {
    match table.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(BACKUPS_DIR_NAME),
        _ => PathBuf::from(BACKUPS_DIR_NAME),
    }
}
