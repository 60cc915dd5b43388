use crate::{CoreError, Document, DocumentSource, SheetTable};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

#[derive(Default)]
pub struct MemoryTable {
    rows: RwLock<Vec<Vec<String>>>,
    writes: RwLock<usize>,
}

impl MemoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows: RwLock::new(rows),
            writes: RwLock::new(0),
        }
    }

    pub fn rows(&self) -> Vec<Vec<String>> {
        self.rows.read().clone()
    }

    /// Number of update/append calls that reached the table.
    pub fn write_count(&self) -> usize {
        *self.writes.read()
    }
}

#[async_trait]
impl SheetTable for MemoryTable {
    async fn read_rows(&self) -> Result<Vec<Vec<String>>, CoreError> {
        Ok(self.rows.read().clone())
    }

    async fn update_cell(&self, row: usize, col: usize, value: &str) -> Result<(), CoreError> {
        if row == 0 || col == 0 {
            return Err(CoreError::RemoteWrite(format!("invalid cell ({row}, {col})")));
        }
        let mut rows = self.rows.write();
        if rows.len() < row {
            rows.resize(row, Vec::new());
        }
        let r = &mut rows[row - 1];
        if r.len() < col {
            r.resize(col, String::new());
        }
        r[col - 1] = value.to_string();
        *self.writes.write() += 1;
        Ok(())
    }

    async fn append_rows(&self, new_rows: Vec<Vec<String>>) -> Result<(), CoreError> {
        let mut rows = self.rows.write();
        while rows.last().is_some_and(|r| r.iter().all(|c| c.is_empty())) {
            rows.pop();
        }
        rows.extend(new_rows);
        *self.writes.write() += 1;
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryDocuments {
    docs: RwLock<HashMap<String, Document>>,
}

impl MemoryDocuments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, id: impl Into<String>, doc: Document) {
        self.docs.write().insert(id.into(), doc);
    }
}

#[async_trait]
impl DocumentSource for MemoryDocuments {
    async fn fetch_document(&self, id: &str) -> Result<Document, CoreError> {
        self.docs
            .read()
            .get(id)
            .cloned()
            .ok_or(CoreError::NotFound("document"))
    }
}
