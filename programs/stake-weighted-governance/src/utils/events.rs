use anchor_lang::prelude::*;
use crate::state::proposal::ProposalOutcome;
use crate::state::vote_record::VoteChoice;

#[event]
pub struct StakeDeposited {
    pub stake_account: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct UnstakeRequested {
    pub stake_account: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub requested_at: i64,
    pub claimable_at: i64,
}

#[event]
pub struct UnstakeClaimed {
    pub stake_account: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct ProposalCreated {
    pub proposal: Pubkey,
    pub owner: Pubkey,
    pub metadata_uri: String,
    pub start_time: i64,
    pub end_time: i64,
}

#[event]
pub struct VoteCast {
    pub proposal: Pubkey,
    pub voter: Pubkey,
    pub vote_record: Pubkey,
    pub choice: VoteChoice,
    pub weight: u64,
    pub yes_votes: u64,
    pub no_votes: u64,
    pub timestamp: i64,
}

#[event]
pub struct ProposalFinalized {
    pub proposal: Pubkey,
    pub finalized_by: Pubkey,
    pub outcome: ProposalOutcome,
    pub yes_votes: u64,
    pub no_votes: u64,
    pub voter_count: u32,
    pub timestamp: i64,
}
