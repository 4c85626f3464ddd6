use crate::error::GovernanceError;
use crate::state::proposal::Proposal;
use crate::state::stake_account::StakeAccount;
use crate::state::vote_record::{VoteChoice, VoteRecord};
use crate::utils::account_store::{create_pda_account, is_vacant, write_zero_copy};
use crate::utils::constants::VOTE_RECORD_SEED;
use crate::utils::events::VoteCast;
use anchor_lang::prelude::*;

/// Accounts for a stake-weighted vote.
///
/// `vote_record` is pinned to `["vote", proposal, owner]` by the seeds
/// constraint but deliberately left unchecked: the handler creates it, and an
/// address that is already occupied is reported as `AlreadyVoted`.
#[derive(Accounts)]
pub struct CastVote<'info> {
    #[account(mut)]
    pub proposal: AccountLoader<'info, Proposal>,

    /// CHECK: address verified by seeds; vacancy checked and account created in the handler
    #[account(
        mut,
        seeds = [VOTE_RECORD_SEED, proposal.key().as_ref(), owner.key().as_ref()],
        bump,
    )]
    pub vote_record: UncheckedAccount<'info>,

    /// Source of vote weight; read only, never locked.
    pub stake_account: AccountLoader<'info, StakeAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn cast_vote(ctx: Context<CastVote>, choice: VoteChoice) -> Result<()> {
    let timestamp_now = Clock::get()?.unix_timestamp;
    let proposal_key = ctx.accounts.proposal.key();
    let voter = ctx.accounts.owner.key();

    // Weight is captured by value; later unstaking cannot touch it.
    let weight = {
        let stake_account = ctx.accounts.stake_account.load()?;
        stake_account.authorize(&voter)?;
        stake_account.vote_weight()?
    };

    let vote_record_info = ctx.accounts.vote_record.to_account_info();
    if !is_vacant(vote_record_info.owner, vote_record_info.data_len()) {
        msg!("Vote record {} already exists", vote_record_info.key);
        return Err(GovernanceError::AlreadyVoted.into());
    }

    let (yes_votes, no_votes) = {
        let mut proposal = ctx.accounts.proposal.load_mut()?;
        proposal.record_vote(choice, weight, timestamp_now)?;
        (proposal.yes_votes, proposal.no_votes)
    };

    let bump = ctx.bumps.vote_record;
    let bump_seed = [bump];
    let signer_seeds: &[&[u8]] = &[
        VOTE_RECORD_SEED,
        proposal_key.as_ref(),
        voter.as_ref(),
        &bump_seed,
    ];

    create_pda_account(
        &vote_record_info,
        &ctx.accounts.owner.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        8 + VoteRecord::INIT_SPACE,
        signer_seeds,
        ctx.program_id,
    )?;

    let record = VoteRecord::new(proposal_key, voter, choice, weight, timestamp_now, bump);
    {
        let mut data = vote_record_info.try_borrow_mut_data()?;
        write_zero_copy(&mut data, &record)?;
    }

    emit!(VoteCast {
        proposal: proposal_key,
        voter,
        vote_record: vote_record_info.key(),
        choice,
        weight,
        yes_votes,
        no_votes,
        timestamp: timestamp_now,
    });

    Ok(())
}
