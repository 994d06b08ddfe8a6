use crate::modules::voters::core::voter::{PollId, PollRecord, VoteId};

pub fn position_of(history: &[PollRecord], poll_id: PollId) -> Option<usize> {
    history.iter().position(|record| record.poll_id == poll_id)
}

/// Returns the first poll id that appears more than once, in history order.
pub fn first_duplicate_poll(history: &[PollRecord]) -> Option<PollId> {
    history
        .iter()
        .enumerate()
        .find(|(i, record)| history[..*i].iter().any(|r| r.poll_id == record.poll_id))
        .map(|(_, record)| record.poll_id)
}

/// Highest vote id in the history, or 0 when there is none.
pub fn highest_vote_id(history: &[PollRecord]) -> VoteId {
    history
        .iter()
        .map(|record| record.vote_id)
        .max()
        .unwrap_or(0)
}

/// `None` once `highest` is the largest representable vote id.
pub fn vote_id_after(highest: VoteId) -> Option<VoteId> {
    highest.max(0).checked_add(1)
}
