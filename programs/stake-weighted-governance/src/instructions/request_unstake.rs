use crate::error::GovernanceError;
use crate::state::stake_account::StakeAccount;
use crate::utils::constants::UNSTAKE_COOLDOWN;
use crate::utils::events::UnstakeRequested;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct RequestUnstake<'info> {
    #[account(mut)]
    pub stake_account: AccountLoader<'info, StakeAccount>,

    pub owner: Signer<'info>,
}

pub fn request_unstake(ctx: Context<RequestUnstake>) -> Result<()> {
    let timestamp_now = Clock::get()?.unix_timestamp;
    let claimable_at = timestamp_now
        .checked_add(UNSTAKE_COOLDOWN)
        .ok_or(GovernanceError::MathOverflow)?;

    let mut stake_account = ctx.accounts.stake_account.load_mut()?;
    stake_account.authorize(&ctx.accounts.owner.key())?;
    stake_account.request_unstake(timestamp_now)?;

    emit!(UnstakeRequested {
        stake_account: ctx.accounts.stake_account.key(),
        owner: stake_account.owner,
        amount: stake_account.staked_amount,
        requested_at: timestamp_now,
        claimable_at,
    });

    Ok(())
}
