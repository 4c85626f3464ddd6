use crate::state::proposal::{validate_metadata_uri, Proposal};
use crate::state::stake_account::StakeAccount;
use crate::utils::events::ProposalCreated;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct InitializeProposal<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + Proposal::INIT_SPACE,
    )]
    pub proposal: AccountLoader<'info, Proposal>,

    /// Qualifying stake of the proposer; read only.
    pub stake_account: AccountLoader<'info, StakeAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Creates a proposal open for voting over the next `VOTING_PERIOD` seconds.
///
/// All checks against the stake position and the URI run before the new
/// account is written.
pub fn initialize_proposal(ctx: Context<InitializeProposal>, metadata_uri: String) -> Result<()> {
    let timestamp_now = Clock::get()?.unix_timestamp;
    let owner = ctx.accounts.owner.key();

    {
        let stake_account = ctx.accounts.stake_account.load()?;
        stake_account.authorize(&owner)?;
        stake_account.ensure_can_propose()?;
    }
    validate_metadata_uri(&metadata_uri)?;

    let mut proposal = ctx.accounts.proposal.load_init()?;
    proposal.open(owner, &metadata_uri, timestamp_now)?;

    emit!(ProposalCreated {
        proposal: ctx.accounts.proposal.key(),
        owner,
        start_time: proposal.start_time,
        end_time: proposal.end_time,
        metadata_uri,
    });

    Ok(())
}
