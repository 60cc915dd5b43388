use crate::{CoreError, FlashcardRecord, RecordId, SessionState};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

/// Picks the next card: unseen cards first, harder cards more often.
///
/// Once every card has been shown the cycle restarts from the full set, so a
/// non-empty collection always yields a card.
pub fn pick_next<R: Rng + ?Sized>(
    records: &[FlashcardRecord],
    session: &mut SessionState,
    rng: &mut R,
) -> Result<RecordId, CoreError> {
    if records.is_empty() {
        return Err(CoreError::EmptyCollection);
    }

    let mut eligible: Vec<&FlashcardRecord> = records
        .iter()
        .filter(|r| !session.shown.contains(&r.id))
        .collect();
    if eligible.is_empty() {
        tracing::debug!(total = records.len(), "all cards shown, starting a new cycle");
        session.shown.clear();
        eligible = records.iter().collect();
    }

    let dist = WeightedIndex::<u32>::new(eligible.iter().map(|r| r.weight()))
        .map_err(|_| CoreError::EmptyCollection)?;
    let picked = eligible[dist.sample(rng)].id;

    session.current = Some(picked);
    session.answer_revealed = false;
    Ok(picked)
}
