use anchor_lang::prelude::*;

use crate::{
    constants::MAX_CANDIDATE_NAME_LEN,
    error::ErrorCode,
    pda::candidate_seed,
    state::{Candidate, Poll, VoteCast},
};

#[derive(Accounts)]
#[instruction(candidate_name: String, poll_id: u64)]
pub struct Vote<'info> {
    // Checked before the candidate seeds below
    #[account(
        constraint = candidate_name.len() <= MAX_CANDIDATE_NAME_LEN @ ErrorCode::CandidateNameTooLong,
    )]
    pub signer: Signer<'info>,

    #[account(
        seeds = [poll_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub poll: Account<'info, Poll>,

    #[account(
        mut,
        seeds = [poll_id.to_le_bytes().as_ref(), candidate_seed(&candidate_name)],
        bump,
    )]
    pub candidate: Account<'info, Candidate>,
}

/// Adds one vote to `candidate_name` on poll `poll_id`.
///
/// Both arguments are consumed by the PDA constraints on [`Vote`]; a candidate
/// that was never registered on the poll fails account validation.
#[allow(unused_variables)]
pub fn vote(ctx: Context<Vote>, candidate_name: String, poll_id: u64) -> Result<()> {
    let clock = Clock::get()?;
    ctx.accounts.poll.ensure_open(clock.unix_timestamp)?;

    let candidate = &mut ctx.accounts.candidate;
    candidate.candidate_votes = candidate
        .candidate_votes
        .checked_add(1)
        .ok_or(ErrorCode::Overflow)?;

    msg!(
        "Voted for {} on poll {}, tally {}",
        candidate.candidate_name,
        ctx.accounts.poll.poll_id,
        candidate.candidate_votes
    );

    emit!(VoteCast {
        poll_id: ctx.accounts.poll.poll_id,
        candidate: candidate.candidate_name.clone(),
        votes: candidate.candidate_votes,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
