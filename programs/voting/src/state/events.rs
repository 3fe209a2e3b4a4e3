use anchor_lang::prelude::*;

#[event]
pub struct CandidateAdded {
    pub poll_id: u64,
    pub candidate: String,
}

#[event]
pub struct VoteCast {
    pub poll_id: u64,
    pub candidate: String,
    /// The candidate's tally after this vote
    pub votes: u64,
    pub timestamp: i64,
}
