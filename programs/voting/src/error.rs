use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("The poll must start before it ends")]
    InvalidPollWindow,
    #[msg("The poll description is too long")]
    DescriptionTooLong,
    #[msg("The candidate name must not be empty")]
    EmptyCandidateName,
    #[msg("The candidate name is too long")]
    CandidateNameTooLong,
    #[msg("Voting has not started yet")]
    PollNotStarted,
    #[msg("Voting has ended")]
    PollEnded,
    #[msg("Counter overflow")]
    Overflow,
}
