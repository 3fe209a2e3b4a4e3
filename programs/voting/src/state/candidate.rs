use anchor_lang::prelude::*;

use crate::constants::ANCHOR_DISCRIMINATOR_SIZE;

/// A named option on a poll together with its running tally.
#[account]
#[derive(InitSpace, Debug)]
pub struct Candidate {
    #[max_len(32)]
    pub candidate_name: String,
    pub candidate_votes: u64,
}

impl Candidate {
    pub const SPACE: usize = ANCHOR_DISCRIMINATOR_SIZE + Candidate::INIT_SPACE;
}
