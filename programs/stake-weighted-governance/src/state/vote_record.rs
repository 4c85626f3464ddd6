use crate::error::GovernanceError;
use anchor_lang::prelude::*;

/// Proof that `voter` has voted on `proposal`.
///
/// Lives at the program-derived address `["vote", proposal, voter]`, so its
/// existence is the double-vote guard. Written once by `cast_vote` and never
/// mutated afterwards; `vote_weight` is captured by value and does not follow
/// later changes to the voter's stake.
#[account(zero_copy)]
#[derive(InitSpace)]
#[repr(C)]
pub struct VoteRecord {
    pub proposal: Pubkey,
    pub voter: Pubkey,
    pub vote_weight: u64,
    pub voted_at: i64,
    /// Encoded [`VoteChoice`].
    pub vote_choice: u8,
    pub bump: u8,
    pub _padding: [u8; 6],
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoteChoice {
    Yes,
    No,
}

impl VoteChoice {
    #[inline(always)]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Yes => 1,
            Self::No => 2,
        }
    }

    pub fn try_from_u8(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Self::Yes),
            2 => Ok(Self::No),
            _ => Err(GovernanceError::InvalidAccountData.into()),
        }
    }
}

impl VoteRecord {
    pub fn new(
        proposal: Pubkey,
        voter: Pubkey,
        choice: VoteChoice,
        vote_weight: u64,
        voted_at: i64,
        bump: u8,
    ) -> Self {
        Self {
            proposal,
            voter,
            vote_weight,
            voted_at,
            vote_choice: choice.as_u8(),
            bump,
            _padding: [0; 6],
        }
    }

    #[inline(always)]
    pub fn vote_choice(&self) -> Result<VoteChoice> {
        VoteChoice::try_from_u8(self.vote_choice)
    }
}
