pub mod cast_vote;
pub mod claim_unstake;
pub mod deposit_stake;
pub mod finalize_proposal;
pub mod initialize_proposal;
pub mod request_unstake;

pub use cast_vote::*;
pub use claim_unstake::*;
pub use deposit_stake::*;
pub use finalize_proposal::*;
pub use initialize_proposal::*;
pub use request_unstake::*;
