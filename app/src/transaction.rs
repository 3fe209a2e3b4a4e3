//! Instruction and transaction builders for the `voting` program.
//!
//! Addresses are derived against the given program id so a redeployed
//! program (see `ActionsConfig::program_id`) resolves the same PDAs.
//! Candidate builders fail for names that cannot be a PDA seed.

use anchor_lang::{InstructionData, ToAccountMetas};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use solana_sdk::{
    hash::Hash, instruction::Instruction, pubkey::Pubkey, system_program,
    transaction::Transaction,
};
use voting::pda;

use crate::error::CandidateNameError;

#[derive(Debug, Clone)]
pub struct InitializePollParams {
    pub poll_id: u64,
    pub description: String,
    pub poll_start: u64,
    pub poll_end: u64,
}

pub fn initialize_poll_instruction(
    program_id: &Pubkey,
    signer: Pubkey,
    params: &InitializePollParams,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: voting::accounts::InitializePoll {
            signer,
            poll: pda::poll_address_with_program(program_id, params.poll_id),
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: voting::instruction::InitializePoll {
            poll_id: params.poll_id,
            description: params.description.clone(),
            poll_start: params.poll_start,
            poll_end: params.poll_end,
        }
        .data(),
    }
}

pub fn initialize_candidate_instruction(
    program_id: &Pubkey,
    signer: Pubkey,
    poll_id: u64,
    candidate_name: &str,
) -> Result<Instruction, CandidateNameError> {
    Ok(Instruction {
        program_id: *program_id,
        accounts: voting::accounts::InitializeCandidate {
            signer,
            poll: pda::poll_address_with_program(program_id, poll_id),
            candidate: candidate_address(program_id, poll_id, candidate_name)?,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: voting::instruction::InitializeCandidate {
            candidate_name: candidate_name.to_string(),
            poll_id,
        }
        .data(),
    })
}

pub fn vote_instruction(
    program_id: &Pubkey,
    signer: Pubkey,
    poll_id: u64,
    candidate_name: &str,
) -> Result<Instruction, CandidateNameError> {
    Ok(Instruction {
        program_id: *program_id,
        accounts: voting::accounts::Vote {
            signer,
            poll: pda::poll_address_with_program(program_id, poll_id),
            candidate: candidate_address(program_id, poll_id, candidate_name)?,
        }
        .to_account_metas(None),
        data: voting::instruction::Vote {
            candidate_name: candidate_name.to_string(),
            poll_id,
        }
        .data(),
    })
}

pub fn candidate_address(
    program_id: &Pubkey,
    poll_id: u64,
    candidate_name: &str,
) -> Result<Pubkey, CandidateNameError> {
    pda::candidate_address_with_program(program_id, poll_id, candidate_name)
        .ok_or_else(|| CandidateNameError(candidate_name.to_string()))
}

/// Builds a legacy transaction with no signatures filled in.
///
/// The wallet that receives it signs as `fee_payer` before submitting.
pub fn unsigned_transaction(
    instructions: &[Instruction],
    fee_payer: &Pubkey,
    recent_blockhash: Hash,
) -> Transaction {
    let mut transaction = Transaction::new_with_payer(instructions, Some(fee_payer));
    transaction.message.recent_blockhash = recent_blockhash;
    transaction
}

/// Wire-format (bincode) transaction, base64 encoded.
pub fn encode_transaction(transaction: &Transaction) -> Result<String, bincode::Error> {
    let bytes = bincode::serialize(transaction)?;
    Ok(STANDARD.encode(bytes))
}

pub fn decode_transaction(encoded: &str) -> Option<Transaction> {
    let bytes = STANDARD.decode(encoded).ok()?;
    bincode::deserialize(&bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signature::Signature;

    #[test]
    fn vote_instruction_targets_poll_and_candidate() {
        let voter = Pubkey::new_unique();
        let ix = vote_instruction(&voting::ID, voter, 1, "Trump").unwrap();

        assert_eq!(ix.program_id, voting::ID);
        assert_eq!(ix.accounts.len(), 3);
        assert_eq!(ix.accounts[0].pubkey, voter);
        assert!(ix.accounts[0].is_signer);
        assert_eq!(ix.accounts[1].pubkey, pda::poll_address(1));
        assert!(!ix.accounts[1].is_writable);
        assert_eq!(Some(ix.accounts[2].pubkey), pda::candidate_address(1, "Trump"));
        assert!(ix.accounts[2].is_writable);
    }

    #[test]
    fn vote_data_is_discriminator_then_borsh_args() {
        let ix = vote_instruction(&voting::ID, Pubkey::new_unique(), 1, "Biden").unwrap();
        // 8-byte discriminator, u32 length + "Biden", u64 poll id
        assert_eq!(ix.data.len(), 8 + 4 + 5 + 8);
        assert_eq!(&ix.data[8..12], &5u32.to_le_bytes());
        assert_eq!(&ix.data[12..17], b"Biden");
        assert_eq!(&ix.data[17..], &1u64.to_le_bytes());
    }

    #[test]
    fn initialize_instructions_include_system_program() {
        let signer = Pubkey::new_unique();
        let params = InitializePollParams {
            poll_id: 9,
            description: "Best color?".to_string(),
            poll_start: 0,
            poll_end: 100,
        };
        let poll_ix = initialize_poll_instruction(&voting::ID, signer, &params);
        assert_eq!(poll_ix.accounts[1].pubkey, pda::poll_address(9));
        assert_eq!(poll_ix.accounts[2].pubkey, system_program::ID);

        let candidate_ix = initialize_candidate_instruction(&voting::ID, signer, 9, "Red").unwrap();
        assert_eq!(candidate_ix.accounts[1].pubkey, pda::poll_address(9));
        assert!(candidate_ix.accounts[1].is_writable);
        assert_eq!(Some(candidate_ix.accounts[2].pubkey), pda::candidate_address(9, "Red"));
        assert_eq!(candidate_ix.accounts[3].pubkey, system_program::ID);
    }

    #[test]
    fn unsigned_transaction_survives_encoding() {
        let voter = Pubkey::new_unique();
        let blockhash = Hash::new_unique();
        let ix = vote_instruction(&voting::ID, voter, 1, "Trump").unwrap();
        let tx = unsigned_transaction(&[ix.clone()], &voter, blockhash);

        let decoded = decode_transaction(&encode_transaction(&tx).unwrap()).unwrap();
        assert_eq!(decoded.message.account_keys[0], voter);
        assert_eq!(decoded.message.recent_blockhash, blockhash);
        assert_eq!(decoded.signatures.len(), 1);
        assert_eq!(decoded.signatures[0], Signature::default());
        assert_eq!(decoded.message.instructions[0].data, ix.data);
    }

    #[test]
    fn over_long_candidate_name_is_an_error() {
        let name = "n".repeat(voting::constants::MAX_CANDIDATE_NAME_LEN + 1);
        let signer = Pubkey::new_unique();

        let err = vote_instruction(&voting::ID, signer, 1, &name).unwrap_err();
        assert_eq!(err, CandidateNameError(name.clone()));
        assert!(initialize_candidate_instruction(&voting::ID, signer, 1, &name).is_err());

        let longest = "n".repeat(voting::constants::MAX_CANDIDATE_NAME_LEN);
        assert!(vote_instruction(&voting::ID, signer, 1, &longest).is_ok());
    }
}
