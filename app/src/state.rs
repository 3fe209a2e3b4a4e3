use std::sync::Arc;

use solana_sdk::pubkey::Pubkey;

use crate::blockhash::BlockhashSource;
use crate::config::ActionsConfig;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub config: ActionsConfig,
    pub program_id: Pubkey,
    pub blockhash: Arc<dyn BlockhashSource>,
}

impl AppStateInner {
    pub fn new(config: ActionsConfig, program_id: Pubkey, blockhash: Arc<dyn BlockhashSource>) -> Self {
        Self {
            config,
            program_id,
            blockhash,
        }
    }
}
