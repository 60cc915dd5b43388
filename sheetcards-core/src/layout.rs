//! Header-driven mapping between raw table rows and typed records.
//!
//! Columns are looked up by header name, so their order in the table does not
//! matter. Only `Question` is mandatory; the other columns are optional:
//!
//! - no `Answer` or `Link` column: those fields read as empty;
//! - no `Difficulty` column: every record reads as Medium, and ratings are
//!   written to the first column after the header.

use crate::{CoreError, Difficulty, FlashcardRecord, QaPair, RecordId};
use std::collections::HashSet;

pub const QUESTION_HEADER: &str = "Question";
pub const ANSWER_HEADER: &str = "Answer";
pub const LINK_HEADER: &str = "Link";
pub const DIFFICULTY_HEADER: &str = "Difficulty";

/// Header written to a table that has none yet.
pub const DEFAULT_HEADER: [&str; 4] = [QUESTION_HEADER, ANSWER_HEADER, LINK_HEADER, DIFFICULTY_HEADER];

/// 1-based column positions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnLayout {
    pub question: usize,
    pub answer: Option<usize>,
    pub link: Option<usize>,
    pub difficulty: Option<usize>,
    pub width: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            question: 1,
            answer: Some(2),
            link: Some(3),
            difficulty: Some(4),
            width: DEFAULT_HEADER.len(),
        }
    }
}

impl ColumnLayout {
    pub fn from_header(header: &[String]) -> Result<Self, CoreError> {
        let find = |name: &str| header.iter().position(|h| h.trim() == name).map(|i| i + 1);
        let question = find(QUESTION_HEADER).ok_or_else(|| {
            CoreError::MalformedTable(format!("header has no {QUESTION_HEADER:?} column"))
        })?;
        Ok(Self {
            question,
            answer: find(ANSWER_HEADER),
            link: find(LINK_HEADER),
            difficulty: find(DIFFICULTY_HEADER),
            width: header.len(),
        })
    }

    pub fn difficulty_column(&self) -> usize {
        self.difficulty.unwrap_or(self.width + 1)
    }

    pub fn record_from_row(&self, id: RecordId, row: &[String]) -> FlashcardRecord {
        let link = cell(row, self.link);
        let difficulty = match self.difficulty {
            None => Some(Difficulty::Medium),
            Some(col) => Difficulty::parse(cell(row, Some(col))),
        };
        FlashcardRecord {
            id,
            question: cell(row, Some(self.question)).to_string(),
            answer: cell(row, self.answer).to_string(),
            link: (!link.is_empty()).then(|| link.to_string()),
            difficulty,
        }
    }

    /// Row for a freshly imported pair: empty link, the given difficulty.
    pub fn row_for(&self, pair: &QaPair, difficulty: Difficulty) -> Vec<String> {
        let width = self.width.max(self.difficulty_column()).max(self.question);
        let mut row = vec![String::new(); width];
        row[self.question - 1] = pair.question.clone();
        if let Some(col) = self.answer {
            row[col - 1] = pair.answer.clone();
        }
        row[self.difficulty_column() - 1] = difficulty.as_str().to_string();
        row
    }
}

fn cell(row: &[String], col: Option<usize>) -> &str {
    col.and_then(|c| row.get(c - 1))
        .map(String::as_str)
        .unwrap_or("")
}

/// Everything read from the table in one pass.
#[derive(Clone, Debug, Default)]
pub struct TableSnapshot {
    pub layout: ColumnLayout,
    pub records: Vec<FlashcardRecord>,
    pub has_header: bool,
}

impl TableSnapshot {
    /// `rows` includes the header row, if any. Blank data rows are kept so that
    /// record ids stay aligned with table rows.
    pub fn from_rows(rows: &[Vec<String>]) -> Result<Self, CoreError> {
        let Some((header, data)) = rows.split_first() else {
            return Ok(Self::default());
        };
        let layout = ColumnLayout::from_header(header)?;
        let records = data
            .iter()
            .enumerate()
            .map(|(id, row)| layout.record_from_row(id, row))
            .collect();
        Ok(Self {
            layout,
            records,
            has_header: true,
        })
    }

    /// Trimmed questions already in the table.
    pub fn questions(&self) -> HashSet<String> {
        self.records
            .iter()
            .map(|r| r.question.trim().to_string())
            .collect()
    }
}
