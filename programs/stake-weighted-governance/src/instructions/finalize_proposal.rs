use crate::state::proposal::Proposal;
use crate::utils::events::ProposalFinalized;
use anchor_lang::prelude::*;

/// Permissionless crank; `caller` only pays the fee and is logged.
#[derive(Accounts)]
pub struct FinalizeProposal<'info> {
    #[account(mut)]
    pub proposal: AccountLoader<'info, Proposal>,

    pub caller: Signer<'info>,
}

pub fn finalize_proposal(ctx: Context<FinalizeProposal>) -> Result<()> {
    let timestamp_now = Clock::get()?.unix_timestamp;

    let mut proposal = ctx.accounts.proposal.load_mut()?;
    let outcome = proposal.finalize(timestamp_now)?;

    emit!(ProposalFinalized {
        proposal: ctx.accounts.proposal.key(),
        finalized_by: ctx.accounts.caller.key(),
        outcome,
        yes_votes: proposal.yes_votes,
        no_votes: proposal.no_votes,
        voter_count: proposal.voter_count,
        timestamp: timestamp_now,
    });

    Ok(())
}
