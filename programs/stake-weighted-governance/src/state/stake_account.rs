use crate::error::GovernanceError;
use crate::utils::constants::{MIN_STAKE, UNSTAKE_COOLDOWN};
use anchor_lang::prelude::*;

/// A single time-locked staking position.
///
/// # Lifecycle
///
/// ```text
/// Unstaked(0) --deposit--> Staked --request_unstake--> PendingWithdrawal
///      ^                                                      |
///      +------------------ claim (after cooldown) ------------+
/// ```
///
/// `Staked` and `PendingWithdrawal` share one stored shape and differ only in
/// `unstake_requested`; see [`StakeStatus`] for the derived view. A drained
/// position stays on-chain with a zero balance and is never reopened: every new
/// position is a fresh account.
///
/// # Custody
///
/// The account holds `staked_amount` lamports on top of its rent-exempt reserve.
/// Claiming moves exactly `staked_amount` back to the owner and leaves the reserve.
///
/// # Invariants
///
/// - `staked_amount == 0` implies `unstake_requested == 0`.
/// - `unstake_timestamp` is meaningful only while `unstake_requested == 1`.
#[account(zero_copy)]
#[derive(InitSpace)]
#[repr(C)]
pub struct StakeAccount {
    /// Depositor; the only key allowed to unstake, propose, or vote with this position.
    pub owner: Pubkey,

    /// Lamports held in custody for the owner.
    pub staked_amount: u64,

    /// Clock timestamp of the deposit that opened this position.
    pub stake_timestamp: i64,

    /// Clock timestamp of the pending unstake request. Zero when none is pending.
    pub unstake_timestamp: i64,

    /// 1 while an unstake request is pending, 0 otherwise.
    pub unstake_requested: u8,

    pub _padding: [u8; 7],

    /// Reserved for future fields without a layout migration.
    pub reserved: [u64; 4],
}

/// Derived lifecycle view over the stored fields of a [`StakeAccount`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StakeStatus {
    Unstaked,
    Staked,
    PendingWithdrawal,
}

/// Validates a deposit amount before any lamports move.
#[inline(always)]
pub fn validate_stake_amount(amount: u64) -> Result<()> {
    require!(amount >= MIN_STAKE, GovernanceError::InsufficientStake);
    Ok(())
}

impl StakeAccount {
    /// Opens the position for `owner` with its initial stake.
    pub fn open(&mut self, owner: Pubkey, amount: u64, now: i64) -> Result<()> {
        validate_stake_amount(amount)?;

        self.owner = owner;
        self.staked_amount = amount;
        self.stake_timestamp = now;
        self.unstake_timestamp = 0;
        self.unstake_requested = 0;
        Ok(())
    }

    /// Rejects any caller other than the position owner.
    #[inline(always)]
    pub fn authorize(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(self.owner, *caller, GovernanceError::Unauthorized);
        Ok(())
    }

    #[inline(always)]
    pub fn is_unstake_requested(&self) -> bool {
        self.unstake_requested != 0
    }

    /// Timestamp of the pending request, if any.
    #[inline(always)]
    pub fn unstake_timestamp(&self) -> Option<i64> {
        if self.is_unstake_requested() {
            Some(self.unstake_timestamp)
        } else {
            None
        }
    }

    pub fn status(&self) -> StakeStatus {
        if self.staked_amount == 0 {
            StakeStatus::Unstaked
        } else if self.is_unstake_requested() {
            StakeStatus::PendingWithdrawal
        } else {
            StakeStatus::Staked
        }
    }

    /// Earliest timestamp at which the pending request can be claimed.
    pub fn claimable_at(&self) -> Result<Option<i64>> {
        match self.unstake_timestamp() {
            Some(requested_at) => {
                let unlock = requested_at
                    .checked_add(UNSTAKE_COOLDOWN)
                    .ok_or(GovernanceError::MathOverflow)?;
                Ok(Some(unlock))
            }
            None => Ok(None),
        }
    }

    /// Starts the cooldown. A second request while one is pending is rejected
    /// and the original timestamp is kept.
    pub fn request_unstake(&mut self, now: i64) -> Result<()> {
        require!(self.staked_amount > 0, GovernanceError::InsufficientStake);
        require!(
            !self.is_unstake_requested(),
            GovernanceError::UnstakeAlreadyRequested
        );

        self.unstake_requested = 1;
        self.unstake_timestamp = now;
        Ok(())
    }

    /// Completes a pending withdrawal once `now >= unstake_timestamp + UNSTAKE_COOLDOWN`.
    ///
    /// Returns the lamports the caller must move back to the owner. The account
    /// is zeroed before returning, so a replayed claim finds no pending request.
    pub fn claim_unstake(&mut self, now: i64) -> Result<u64> {
        let unlock = self
            .claimable_at()?
            .ok_or(GovernanceError::NoUnstakeRequested)?;
        require!(now >= unlock, GovernanceError::CooldownNotPassed);

        let amount = self.staked_amount;
        self.staked_amount = 0;
        self.unstake_requested = 0;
        self.unstake_timestamp = 0;
        Ok(amount)
    }

    /// Live balance used as vote weight.
    pub fn vote_weight(&self) -> Result<u64> {
        require!(self.staked_amount > 0, GovernanceError::ZeroWeightVote);
        Ok(self.staked_amount)
    }

    /// Proposals require a qualifying stake. Deposits below `MIN_STAKE` are
    /// impossible and claims drain to zero, so this is equivalent to a non-zero balance.
    pub fn ensure_can_propose(&self) -> Result<()> {
        require!(
            self.staked_amount >= MIN_STAKE,
            GovernanceError::InsufficientStake
        );
        Ok(())
    }
}
