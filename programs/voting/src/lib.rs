// Stops Rust Analyzer complaining about missing configs
// See https://solana.stackexchange.com/questions/17777
#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod handlers;
pub mod pda;
pub mod state;

pub use handlers::*;

pub use error::ErrorCode;
pub use state::{Candidate, Poll};

declare_id!("3eioGsPP5yxvRULWdqSkyhcK3jHu2a1MqCynESYzniUE");

#[program]
pub mod voting {
    use super::*;

    pub fn initialize_poll(
        ctx: Context<InitializePoll>,
        poll_id: u64,
        description: String,
        poll_start: u64,
        poll_end: u64,
    ) -> Result<()> {
        handlers::initialize_poll::initialize_poll(ctx, poll_id, description, poll_start, poll_end)
    }

    pub fn initialize_candidate(
        ctx: Context<InitializeCandidate>,
        candidate_name: String,
        poll_id: u64,
    ) -> Result<()> {
        handlers::initialize_candidate::initialize_candidate(ctx, candidate_name, poll_id)
    }

    pub fn vote(ctx: Context<Vote>, candidate_name: String, poll_id: u64) -> Result<()> {
        handlers::vote::vote(ctx, candidate_name, poll_id)
    }
}
