use crate::error::GovernanceError;
use crate::state::vote_record::VoteChoice;
use crate::utils::constants::{MAX_METADATA_URI_LEN, VOTING_PERIOD};
use anchor_lang::prelude::*;

/// A governance item whose votes are weighted by live stake.
///
/// # State Machine
///
/// `Active` accepts votes while `now < end_time`. Once `now >= end_time` anyone
/// may finalize it, which freezes the tallies, records the outcome, and moves it
/// to the terminal `Finalized` state. The voting window and the finalization
/// window never overlap, so no vote can land after the outcome is written.
///
/// # Storage
///
/// The metadata URI lives in a fixed buffer so the account stays `Pod`; only the
/// first `metadata_uri_len` bytes are meaningful. Status and outcome are stored
/// as raw bytes and decoded through [`ProposalStatus`] and [`ProposalOutcome`].
#[account(zero_copy)]
#[derive(InitSpace)]
#[repr(C)]
pub struct Proposal {
    /// Creator of the proposal.
    pub owner: Pubkey,

    /// Clock timestamp at creation; voting opens immediately.
    pub start_time: i64,

    /// Votes are accepted strictly before this timestamp; finalization at or after it.
    pub end_time: i64,

    /// Clock timestamp of finalization. Zero while active.
    pub finalized_at: i64,

    /// Accumulated stake weight voting yes.
    pub yes_votes: u64,

    /// Accumulated stake weight voting no.
    pub no_votes: u64,

    /// Number of accepted votes.
    pub voter_count: u32,

    pub metadata_uri_len: u16,

    /// Encoded [`ProposalStatus`].
    pub status: u8,

    /// Encoded [`ProposalOutcome`]; `OUTCOME_UNDECIDED` until finalized.
    pub outcome: u8,

    pub metadata_uri: [u8; MAX_METADATA_URI_LEN],

    /// Reserved for future fields without a layout migration.
    pub reserved: [u64; 4],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ProposalStatus {
    Active = 0,
    Finalized = 1,
}

impl ProposalStatus {
    #[inline(always)]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn try_from_u8(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Active),
            1 => Ok(Self::Finalized),
            _ => Err(GovernanceError::InvalidAccountData.into()),
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProposalOutcome {
    /// Yes weight strictly exceeded no weight.
    Passed,
    /// Everything else, ties included.
    Rejected,
}

pub const OUTCOME_UNDECIDED: u8 = 0;

impl ProposalOutcome {
    #[inline(always)]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Passed => 1,
            Self::Rejected => 2,
        }
    }

    pub fn from_tally(yes_votes: u64, no_votes: u64) -> Self {
        if yes_votes > no_votes {
            Self::Passed
        } else {
            Self::Rejected
        }
    }
}

/// Metadata URIs are opaque, but must be present and fit the fixed buffer.
#[inline(always)]
pub fn validate_metadata_uri(metadata_uri: &str) -> Result<()> {
    require!(
        !metadata_uri.is_empty() && metadata_uri.len() <= MAX_METADATA_URI_LEN,
        GovernanceError::InvalidMetadataUri
    );
    Ok(())
}

impl Proposal {
    /// Opens voting for `VOTING_PERIOD` seconds starting at `now`.
    pub fn open(&mut self, owner: Pubkey, metadata_uri: &str, now: i64) -> Result<()> {
        validate_metadata_uri(metadata_uri)?;
        let end_time = now
            .checked_add(VOTING_PERIOD)
            .ok_or(GovernanceError::MathOverflow)?;

        let bytes = metadata_uri.as_bytes();
        self.metadata_uri = [0u8; MAX_METADATA_URI_LEN];
        self.metadata_uri[..bytes.len()].copy_from_slice(bytes);
        self.metadata_uri_len = bytes.len() as u16;

        self.owner = owner;
        self.start_time = now;
        self.end_time = end_time;
        self.finalized_at = 0;
        self.yes_votes = 0;
        self.no_votes = 0;
        self.voter_count = 0;
        self.status = ProposalStatus::Active.as_u8();
        self.outcome = OUTCOME_UNDECIDED;
        Ok(())
    }

    pub fn metadata_uri(&self) -> Result<&str> {
        let len = self.metadata_uri_len as usize;
        require!(
            len <= MAX_METADATA_URI_LEN,
            GovernanceError::InvalidAccountData
        );
        core::str::from_utf8(&self.metadata_uri[..len])
            .map_err(|_| GovernanceError::InvalidAccountData.into())
    }

    #[inline(always)]
    pub fn status(&self) -> Result<ProposalStatus> {
        ProposalStatus::try_from_u8(self.status)
    }

    pub fn outcome(&self) -> Result<Option<ProposalOutcome>> {
        match self.outcome {
            OUTCOME_UNDECIDED => Ok(None),
            1 => Ok(Some(ProposalOutcome::Passed)),
            2 => Ok(Some(ProposalOutcome::Rejected)),
            _ => Err(GovernanceError::InvalidAccountData.into()),
        }
    }

    pub fn total_votes(&self) -> Result<u64> {
        self.yes_votes
            .checked_add(self.no_votes)
            .ok_or(GovernanceError::MathOverflow.into())
    }

    pub fn accepts_votes_at(&self, now: i64) -> Result<bool> {
        Ok(self.status()? == ProposalStatus::Active && now < self.end_time)
    }

    /// Adds `weight` to the chosen tally. All arithmetic is checked before any
    /// field is written, so a failed vote leaves the proposal untouched.
    pub fn record_vote(&mut self, choice: VoteChoice, weight: u64, now: i64) -> Result<()> {
        require!(self.accepts_votes_at(now)?, GovernanceError::VotingClosed);
        require!(weight > 0, GovernanceError::ZeroWeightVote);

        let voter_count = self
            .voter_count
            .checked_add(1)
            .ok_or(GovernanceError::MathOverflow)?;

        match choice {
            VoteChoice::Yes => {
                self.yes_votes = self
                    .yes_votes
                    .checked_add(weight)
                    .ok_or(GovernanceError::MathOverflow)?;
            }
            VoteChoice::No => {
                self.no_votes = self
                    .no_votes
                    .checked_add(weight)
                    .ok_or(GovernanceError::MathOverflow)?;
            }
        }
        self.voter_count = voter_count;
        Ok(())
    }

    /// Closes the proposal for good and records the outcome of the frozen tallies.
    pub fn finalize(&mut self, now: i64) -> Result<ProposalOutcome> {
        require!(
            self.status()? == ProposalStatus::Active,
            GovernanceError::AlreadyFinalized
        );
        require!(now >= self.end_time, GovernanceError::ProposalNotEnded);

        let outcome = ProposalOutcome::from_tally(self.yes_votes, self.no_votes);
        self.status = ProposalStatus::Finalized.as_u8();
        self.outcome = outcome.as_u8();
        self.finalized_at = now;
        Ok(outcome)
    }
}
