//! Splits a document into question/answer pairs.
//!
//! The source documents carry no structure beyond formatting, so a paragraph
//! opens a new question when one of its runs starts with `Q.` *and* is set at
//! exactly 15pt. Everything non-empty after it, up to the next such
//! paragraph, is that question's answer. Text before the first question is
//! dropped.
//!
//! Changing the marker or the size changes which pairs existing documents
//! produce.

use crate::{Document, Paragraph, QaPair};
use std::borrow::Borrow;
use std::iter::Fuse;

pub const QUESTION_MARKER: &str = "Q.";
pub const QUESTION_FONT_SIZE: f64 = 15.0;

/// A paragraph flattened to one line of text.
#[derive(Clone, Debug, PartialEq)]
pub struct ParagraphLine {
    pub text: String,
    pub starts_question: bool,
}

pub fn read_paragraph(paragraph: &Paragraph) -> ParagraphLine {
    let mut text = String::new();
    let mut starts_question = false;
    for run in paragraph.runs() {
        let run_text = run.content.trim();
        text.push_str(run_text);
        text.push(' ');
        if run_text.starts_with(QUESTION_MARKER) && run.font_size() == Some(QUESTION_FONT_SIZE) {
            starts_question = true;
        }
    }
    ParagraphLine {
        text: text.trim().to_string(),
        starts_question,
    }
}

/// Drops the first two characters of the line, wherever the marker run sat.
fn question_text(line: &str) -> String {
    let skip = QUESTION_MARKER.chars().count();
    let rest = line
        .char_indices()
        .nth(skip)
        .map(|(i, _)| &line[i..])
        .unwrap_or("");
    rest.trim().to_string()
}

/// Single pass over paragraphs, yielding each pair once the next question
/// starts or the input ends.
pub struct QaPairs<I: Iterator> {
    paragraphs: Fuse<I>,
    open: Option<QaPair>,
}

impl<I: Iterator> QaPairs<I> {
    pub fn new(paragraphs: I) -> Self {
        Self {
            paragraphs: paragraphs.fuse(),
            open: None,
        }
    }
}

impl<I> Iterator for QaPairs<I>
where
    I: Iterator,
    I::Item: Borrow<Paragraph>,
{
    type Item = QaPair;

    fn next(&mut self) -> Option<QaPair> {
        for paragraph in self.paragraphs.by_ref() {
            let line = read_paragraph(paragraph.borrow());
            if line.starts_question {
                let started = QaPair::new(question_text(&line.text), "");
                if let Some(finished) = self.open.replace(started) {
                    return Some(finished);
                }
            } else if line.text.is_empty() {
                continue;
            } else if let Some(open) = self.open.as_mut() {
                if !open.answer.is_empty() {
                    open.answer.push(' ');
                }
                open.answer.push_str(&line.text);
            }
        }
        self.open.take()
    }
}

pub fn parse_questions(doc: &Document) -> Vec<QaPair> {
    let pairs: Vec<QaPair> = QaPairs::new(doc.paragraphs()).collect();
    tracing::debug!(pairs = pairs.len(), "parsed document");
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_text_strips_two_chars() {
        assert_eq!(question_text("Q. What is X?"), "What is X?");
        assert_eq!(question_text("Q.Why"), "Why");
        assert_eq!(question_text("Q."), "");
        assert_eq!(question_text("1. Q. Odd"), "Q. Odd");
        assert_eq!(question_text("Qé"), "");
    }
}
