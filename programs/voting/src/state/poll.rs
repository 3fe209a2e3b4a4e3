use anchor_lang::prelude::*;

use crate::{constants::ANCHOR_DISCRIMINATOR_SIZE, error::ErrorCode};

/// A poll that candidates can be registered on and voted for.
#[account]
#[derive(InitSpace)]
pub struct Poll {
    /// Unique identifier, also the PDA seed
    pub poll_id: u64,
    /// The question voters are answering (max 280 bytes)
    #[max_len(280)]
    pub description: String,
    /// Unix timestamp at which voting opens
    pub poll_start: u64,
    /// Unix timestamp after which votes are rejected
    pub poll_end: u64,
    /// Number of candidates registered so far
    pub candidate_amount: u64,
}

impl Poll {
    pub const SPACE: usize = ANCHOR_DISCRIMINATOR_SIZE + Poll::INIT_SPACE;

    /// Fails unless `now` falls inside `[poll_start, poll_end]`.
    pub fn ensure_open(&self, now: i64) -> Result<()> {
        // Pre-epoch clocks are before every start
        let now = u64::try_from(now).map_err(|_| error!(ErrorCode::PollNotStarted))?;
        require!(now >= self.poll_start, ErrorCode::PollNotStarted);
        require!(now <= self.poll_end, ErrorCode::PollEnded);
        Ok(())
    }
}
