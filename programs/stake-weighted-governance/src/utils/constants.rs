/// Stake constants
pub const MIN_STAKE: u64 = 1_000_000_000; // 1 SOL in lamports
pub const UNSTAKE_COOLDOWN: i64 = 5 * 24 * 60 * 60; // 432_000 seconds

/// Proposal constants
pub const VOTING_PERIOD: i64 = 3 * 24 * 60 * 60;
pub const MAX_METADATA_URI_LEN: usize = 200;

/// PDA seed constants
pub const VOTE_RECORD_SEED: &[u8] = b"vote";
