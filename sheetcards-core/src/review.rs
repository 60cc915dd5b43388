use crate::{
    selector::pick_next, ColumnLayout, CoreError, Difficulty, FlashcardRecord, RecordId,
    SessionState, SheetTable,
};
use rand::Rng;

/// In-memory half of a review: rate the current card and mark it shown.
/// Returns the rated card's id.
pub fn apply_rating(
    records: &mut [FlashcardRecord],
    session: &mut SessionState,
    difficulty: Difficulty,
) -> Result<RecordId, CoreError> {
    let id = session.current.ok_or(CoreError::NoCurrentCard)?;
    let record = records.get_mut(id).ok_or(CoreError::NotFound("record"))?;
    record.difficulty = Some(difficulty);
    session.shown.insert(id);
    Ok(id)
}

/// Records a rating for the displayed card, saves it to the table and moves
/// on to the next card.
///
/// Memory is updated before the write. If the write fails the error is
/// returned as is and no new card is picked, so repeating the call retries
/// the same card.
pub async fn record_review<T, R>(
    table: &T,
    layout: &ColumnLayout,
    records: &mut [FlashcardRecord],
    session: &mut SessionState,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<RecordId, CoreError>
where
    T: SheetTable + ?Sized,
    R: Rng + ?Sized,
{
    let id = apply_rating(records, session, difficulty)?;
    let row = records[id].table_row();
    let col = layout.difficulty_column();
    tracing::debug!(id, row, col, %difficulty, "saving rating");
    table.update_cell(row, col, difficulty.as_str()).await?;
    pick_next(records, session, rng)
}
