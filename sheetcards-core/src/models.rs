use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Position of a record among the data rows of the table (0-based).
pub type RecordId = usize;

/// Rows above the first record.
pub const HEADER_ROWS: usize = 1;

/// Draw weight of a record whose difficulty cell is empty or unrecognised.
pub const UNRATED_WEIGHT: u32 = 1;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// In the order the choice is offered to the user.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn weight(&self) -> u32 {
        match self {
            Difficulty::Hard => 3,
            Difficulty::Medium => 2,
            Difficulty::Easy => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Exact, case-sensitive match on the cell text.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Easy" => Some(Difficulty::Easy),
            "Medium" => Some(Difficulty::Medium),
            "Hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlashcardRecord {
    pub id: RecordId,
    pub question: String,
    pub answer: String,
    pub link: Option<String>,
    /// `None` when the cell holds something other than Easy/Medium/Hard.
    pub difficulty: Option<Difficulty>,
}

/// What to show once the answer is revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerView<'a> {
    Text(&'a str),
    Link(&'a str),
    Missing,
}

impl FlashcardRecord {
    pub fn new(id: RecordId, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id,
            question: question.into(),
            answer: answer.into(),
            link: None,
            difficulty: Some(Difficulty::Medium),
        }
    }

    pub fn weight(&self) -> u32 {
        self.difficulty
            .map(|d| d.weight())
            .unwrap_or(UNRATED_WEIGHT)
    }

    /// 1-based row of this record in the backing table.
    pub fn table_row(&self) -> usize {
        table_row(self.id)
    }

    pub fn answer_view(&self) -> AnswerView<'_> {
        if !self.answer.is_empty() {
            AnswerView::Text(&self.answer)
        } else if let Some(link) = self.link.as_deref().filter(|l| !l.is_empty()) {
            AnswerView::Link(link)
        } else {
            AnswerView::Missing
        }
    }
}

pub fn table_row(id: RecordId) -> usize {
    id + HEADER_ROWS + 1
}

/// Per-session bookkeeping, owned by whatever drives the study loop.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub shown: HashSet<RecordId>,
    pub current: Option<RecordId>,
    pub answer_revealed: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reveal(&mut self) {
        self.answer_revealed = true;
    }

    pub fn current_record<'a>(&self, records: &'a [FlashcardRecord]) -> Option<&'a FlashcardRecord> {
        self.current.and_then(|id| records.get(id))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

impl QaPair {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}
