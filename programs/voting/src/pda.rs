//! Derivation of the program's account addresses.
//!
//! The seeds here must stay in sync with the `seeds = [...]` constraints in
//! `handlers`. A candidate name is used verbatim as a seed, so names longer
//! than [`MAX_SEED_LEN`] have no address: the off-chain helpers return `None`
//! for them instead of panicking inside `find_program_address`.

use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::pubkey::MAX_SEED_LEN;

use crate::constants::MAX_CANDIDATE_NAME_LEN;

pub fn poll_seed(poll_id: u64) -> [u8; 8] {
    poll_id.to_le_bytes()
}

/// Candidate name bytes as used in the account constraints.
///
/// Clamped to [`MAX_CANDIDATE_NAME_LEN`] so that account validation can derive
/// an address for any instruction argument; the handlers then reject the
/// over-long name with `CandidateNameTooLong`.
pub fn candidate_seed(candidate_name: &str) -> &[u8] {
    let bytes = candidate_name.as_bytes();
    &bytes[..bytes.len().min(MAX_CANDIDATE_NAME_LEN)]
}

pub fn poll_address(poll_id: u64) -> Pubkey {
    poll_address_with_program(&crate::ID, poll_id)
}

pub fn poll_address_with_program(program_id: &Pubkey, poll_id: u64) -> Pubkey {
    Pubkey::find_program_address(&[&poll_seed(poll_id)], program_id).0
}

pub fn candidate_address(poll_id: u64, candidate_name: &str) -> Option<Pubkey> {
    candidate_address_with_program(&crate::ID, poll_id, candidate_name)
}

/// `None` when `candidate_name` is longer than a PDA seed may be.
pub fn candidate_address_with_program(
    program_id: &Pubkey,
    poll_id: u64,
    candidate_name: &str,
) -> Option<Pubkey> {
    if candidate_name.len() > MAX_SEED_LEN {
        return None;
    }
    Pubkey::try_find_program_address(
        &[&poll_seed(poll_id), candidate_name.as_bytes()],
        program_id,
    )
    .map(|(address, _bump)| address)
}
