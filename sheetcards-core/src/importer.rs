use crate::{
    layout::DEFAULT_HEADER, parser::parse_questions, CoreError, Difficulty, DocumentSource,
    QaPair, SheetTable,
};
use std::collections::HashSet;

/// Difficulty given to every imported question.
pub const IMPORT_DIFFICULTY: Difficulty = Difficulty::Medium;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub parsed: usize,
    pub appended: usize,
    /// The pairs that were (or, on a dry run, would be) appended.
    pub new_pairs: Vec<QaPair>,
}

/// Keeps the pairs whose trimmed question is not already known.
/// Matching is exact and case-sensitive.
pub fn filter_new(pairs: Vec<QaPair>, existing: &HashSet<String>) -> Vec<QaPair> {
    pairs
        .into_iter()
        .filter(|p| !existing.contains(p.question.trim()))
        .collect()
}

pub async fn existing_questions<T: SheetTable + ?Sized>(table: &T) -> Result<HashSet<String>, CoreError> {
    Ok(table.snapshot().await?.questions())
}

/// Appends the pairs not yet in the table, in one batch. Nothing is written
/// when every pair is already present. With `dry_run` nothing is written at all.
pub async fn import_pairs<T: SheetTable + ?Sized>(
    table: &T,
    pairs: Vec<QaPair>,
    dry_run: bool,
) -> Result<ImportReport, CoreError> {
    let parsed = pairs.len();
    let snapshot = table.snapshot().await?;
    let new_pairs = filter_new(pairs, &snapshot.questions());
    tracing::debug!(parsed, new = new_pairs.len(), "filtered parsed questions");

    if new_pairs.is_empty() || dry_run {
        return Ok(ImportReport {
            parsed,
            appended: 0,
            new_pairs,
        });
    }

    let mut rows = Vec::with_capacity(new_pairs.len() + 1);
    if !snapshot.has_header {
        rows.push(DEFAULT_HEADER.iter().map(|h| h.to_string()).collect());
    }
    rows.extend(
        new_pairs
            .iter()
            .map(|p| snapshot.layout.row_for(p, IMPORT_DIFFICULTY)),
    );
    table.append_rows(rows).await?;
    tracing::info!(appended = new_pairs.len(), "appended new questions");

    Ok(ImportReport {
        parsed,
        appended: new_pairs.len(),
        new_pairs,
    })
}

/// Fetches a document, parses it and appends its new questions.
pub async fn import_document<T, D>(
    table: &T,
    source: &D,
    document_id: &str,
    dry_run: bool,
) -> Result<ImportReport, CoreError>
where
    T: SheetTable + ?Sized,
    D: DocumentSource + ?Sized,
{
    let doc = source.fetch_document(document_id).await?;
    let pairs = parse_questions(&doc);
    import_pairs(table, pairs, dry_run).await
}
