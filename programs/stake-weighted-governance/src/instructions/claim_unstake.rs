use crate::error::GovernanceError;
use crate::state::stake_account::StakeAccount;
use crate::utils::events::UnstakeClaimed;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct ClaimUnstake<'info> {
    #[account(mut)]
    pub stake_account: AccountLoader<'info, StakeAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,
}

/// Returns custodied lamports to the owner once the cooldown has elapsed.
///
/// The stake account is owned by this program, so lamports are debited
/// directly instead of through a system-program CPI. Only `staked_amount`
/// moves; the rent-exempt reserve stays with the (now empty) position.
pub fn claim_unstake(ctx: Context<ClaimUnstake>) -> Result<()> {
    let timestamp_now = Clock::get()?.unix_timestamp;

    let amount = {
        let mut stake_account = ctx.accounts.stake_account.load_mut()?;
        stake_account.authorize(&ctx.accounts.owner.key())?;

        match stake_account.claim_unstake(timestamp_now) {
            Ok(amount) => amount,
            Err(err) => {
                if let Some(unlock) = stake_account.claimable_at()? {
                    msg!("Unstake claimable at {}, now {}", unlock, timestamp_now);
                }
                return Err(err);
            }
        }
    };

    let stake_info = ctx.accounts.stake_account.to_account_info();
    let owner_info = ctx.accounts.owner.to_account_info();

    let remaining = stake_info
        .lamports()
        .checked_sub(amount)
        .ok_or(GovernanceError::MathOverflow)?;
    let credited = owner_info
        .lamports()
        .checked_add(amount)
        .ok_or(GovernanceError::MathOverflow)?;

    **stake_info.try_borrow_mut_lamports()? = remaining;
    **owner_info.try_borrow_mut_lamports()? = credited;

    emit!(UnstakeClaimed {
        stake_account: ctx.accounts.stake_account.key(),
        owner: ctx.accounts.owner.key(),
        amount,
        timestamp: timestamp_now,
    });

    Ok(())
}
