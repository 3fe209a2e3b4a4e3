use anchor_lang::prelude::*;

use crate::{constants::MAX_DESCRIPTION_LEN, error::ErrorCode, state::Poll};

#[derive(Accounts)]
#[instruction(poll_id: u64)]
pub struct InitializePoll<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        init,
        payer = signer,
        space = Poll::SPACE,
        seeds = [poll_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub poll: Account<'info, Poll>,

    pub system_program: Program<'info, System>,
}

/// Creates a poll that accepts votes between `poll_start` and `poll_end`.
///
/// # Arguments
/// * `poll_id` - Unique identifier, used as the poll account's PDA seed
/// * `description` - The question voters will respond to
/// * `poll_start` - Unix timestamp at which voting opens
/// * `poll_end` - Unix timestamp after which votes are rejected
pub fn initialize_poll(
    ctx: Context<InitializePoll>,
    poll_id: u64,
    description: String,
    poll_start: u64,
    poll_end: u64,
) -> Result<()> {
    require!(poll_start < poll_end, ErrorCode::InvalidPollWindow);
    require!(
        description.len() <= MAX_DESCRIPTION_LEN,
        ErrorCode::DescriptionTooLong
    );

    msg!("Creating poll {}", poll_id);

    let poll = &mut ctx.accounts.poll;
    poll.poll_id = poll_id;
    poll.description = description;
    poll.poll_start = poll_start;
    poll.poll_end = poll_end;
    poll.candidate_amount = 0;

    Ok(())
}
