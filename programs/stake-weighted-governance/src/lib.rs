#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;
use state::vote_record::VoteChoice;

declare_id!("8vDcMPAPjXDCy7zgNmN9u3JNTWJAvBzuwt9Lhztub82Y");

#[program]
pub mod stake_weighted_governance {
    use super::*;

    pub fn deposit_stake(ctx: Context<DepositStake>, amount: u64) -> Result<()> {
        instructions::deposit_stake::deposit_stake(ctx, amount)
    }

    pub fn request_unstake(ctx: Context<RequestUnstake>) -> Result<()> {
        instructions::request_unstake::request_unstake(ctx)
    }

    pub fn claim_unstake(ctx: Context<ClaimUnstake>) -> Result<()> {
        instructions::claim_unstake::claim_unstake(ctx)
    }

    pub fn initialize_proposal(
        ctx: Context<InitializeProposal>,
        metadata_uri: String,
    ) -> Result<()> {
        instructions::initialize_proposal::initialize_proposal(ctx, metadata_uri)
    }

    pub fn cast_vote(ctx: Context<CastVote>, choice: VoteChoice) -> Result<()> {
        instructions::cast_vote::cast_vote(ctx, choice)
    }

    pub fn finalize_proposal(ctx: Context<FinalizeProposal>) -> Result<()> {
        instructions::finalize_proposal::finalize_proposal(ctx)
    }
}
