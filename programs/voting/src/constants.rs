/// Size of the account discriminator Anchor prepends to every account.
pub const ANCHOR_DISCRIMINATOR_SIZE: usize = 8;

// Must match the `max_len` attributes on the account structs
pub const MAX_DESCRIPTION_LEN: usize = 280;
pub const MAX_CANDIDATE_NAME_LEN: usize = 32;
