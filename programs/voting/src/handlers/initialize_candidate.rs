use anchor_lang::prelude::*;

use crate::{
    constants::MAX_CANDIDATE_NAME_LEN,
    error::ErrorCode,
    pda::candidate_seed,
    state::{Candidate, CandidateAdded, Poll},
};

#[derive(Accounts)]
#[instruction(candidate_name: String, poll_id: u64)]
pub struct InitializeCandidate<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [poll_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub poll: Account<'info, Poll>,

    #[account(
        init,
        payer = signer,
        space = Candidate::SPACE,
        seeds = [poll_id.to_le_bytes().as_ref(), candidate_seed(&candidate_name)],
        bump,
    )]
    pub candidate: Account<'info, Candidate>,

    pub system_program: Program<'info, System>,
}

/// Registers `candidate_name` on poll `poll_id` with zero votes.
///
/// `poll_id` only feeds the PDA constraints on [`InitializeCandidate`].
/// `init` runs before any other account constraint, so the name checks live
/// here; the clamped seed keeps derivation from aborting on long names.
#[allow(unused_variables)]
pub fn initialize_candidate(
    ctx: Context<InitializeCandidate>,
    candidate_name: String,
    poll_id: u64,
) -> Result<()> {
    require!(!candidate_name.is_empty(), ErrorCode::EmptyCandidateName);
    require!(
        candidate_name.len() <= MAX_CANDIDATE_NAME_LEN,
        ErrorCode::CandidateNameTooLong
    );

    let poll = &mut ctx.accounts.poll;
    poll.candidate_amount = poll
        .candidate_amount
        .checked_add(1)
        .ok_or(ErrorCode::Overflow)?;

    let candidate = &mut ctx.accounts.candidate;
    candidate.candidate_name = candidate_name.clone();
    candidate.candidate_votes = 0;

    emit!(CandidateAdded {
        poll_id: poll.poll_id,
        candidate: candidate_name,
    });

    Ok(())
}
