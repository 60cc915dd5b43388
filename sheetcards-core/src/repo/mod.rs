use crate::{CoreError, Document, TableSnapshot};
use async_trait::async_trait;

pub mod memory;

pub use memory::{MemoryDocuments, MemoryTable};

/// A spreadsheet-like grid with 1-based addressing; row 1 is the header.
#[async_trait]
pub trait SheetTable: Send + Sync {
    /// Every row, header included, as cell text.
    async fn read_rows(&self) -> Result<Vec<Vec<String>>, CoreError>;
    async fn update_cell(&self, row: usize, col: usize, value: &str) -> Result<(), CoreError>;
    /// Appends after the last non-empty row in a single batch.
    async fn append_rows(&self, rows: Vec<Vec<String>>) -> Result<(), CoreError>;

    async fn snapshot(&self) -> Result<TableSnapshot, CoreError> {
        let rows = self.read_rows().await?;
        TableSnapshot::from_rows(&rows)
    }
}

#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch_document(&self, id: &str) -> Result<Document, CoreError>;
}
