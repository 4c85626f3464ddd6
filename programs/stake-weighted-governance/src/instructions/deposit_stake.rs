use crate::state::stake_account::{validate_stake_amount, StakeAccount};
use crate::utils::events::StakeDeposited;
use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

/// Opens a new staking position at a fresh, caller-provided address.
///
/// `init` fails if the address is already in use, so a position can never be
/// topped up or reopened after a claim.
#[derive(Accounts)]
pub struct DepositStake<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + StakeAccount::INIT_SPACE,
    )]
    pub stake_account: AccountLoader<'info, StakeAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn deposit_stake(ctx: Context<DepositStake>, amount: u64) -> Result<()> {
    validate_stake_amount(amount)?;
    let timestamp_now = Clock::get()?.unix_timestamp;

    // Stake is custodied on top of the rent-exempt reserve paid by `init`.
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.owner.to_account_info(),
                to: ctx.accounts.stake_account.to_account_info(),
            },
        ),
        amount,
    )?;

    let mut stake_account = ctx.accounts.stake_account.load_init()?;
    stake_account.open(ctx.accounts.owner.key(), amount, timestamp_now)?;

    emit!(StakeDeposited {
        stake_account: ctx.accounts.stake_account.key(),
        owner: ctx.accounts.owner.key(),
        amount,
        timestamp: timestamp_now,
    });

    Ok(())
}
