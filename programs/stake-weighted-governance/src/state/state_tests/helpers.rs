use crate::error::GovernanceError;
use crate::state::proposal::Proposal;
use crate::state::stake_account::StakeAccount;
use anchor_lang::error::Error;
use anchor_lang::prelude::{Pubkey, Result as AnchorResult};
use bytemuck::Zeroable;

/// Fixed clock origin used by every suite. Any realistic unix timestamp works;
/// a fixed one keeps failures reproducible.
pub(crate) const GENESIS: i64 = 1_700_000_000;

/// One SOL in lamports, the minimum deposit.
pub(crate) const ONE_SOL: u64 = 1_000_000_000;

/// Deterministic, non-default pubkey derived from a one-byte seed.
pub(crate) fn deterministic_pubkey(seed: u8) -> Pubkey {
    let mut bytes = [0u8; 32];
    for (idx, byte) in bytes.iter_mut().enumerate() {
        *byte = seed
            .wrapping_add((idx as u8).wrapping_mul(37))
            .wrapping_add(1);
    }
    Pubkey::new_from_array(bytes)
}

/// A freshly opened position, as `deposit_stake` leaves it.
pub(crate) fn staked_fixture(owner: Pubkey, amount: u64, now: i64) -> StakeAccount {
    let mut stake = StakeAccount::zeroed();
    stake
        .open(owner, amount, now)
        .expect("fixture deposit must clear the minimum");
    stake
}

/// A freshly opened proposal, as `initialize_proposal` leaves it.
pub(crate) fn proposal_fixture(owner: Pubkey, metadata_uri: &str, now: i64) -> Proposal {
    let mut proposal = Proposal::zeroed();
    proposal
        .open(owner, metadata_uri, now)
        .expect("fixture proposal must open");
    proposal
}

/// Asserts that `result` failed with exactly `expected`, compared by Anchor error code.
pub(crate) fn assert_governance_error<T: std::fmt::Debug>(
    result: AnchorResult<T>,
    expected: GovernanceError,
) {
    let err = result.expect_err("expected error result");
    let expected_error: Error = expected.into();

    let actual_code = error_code_number(&err).expect("expected anchor error code");
    let expected_code = error_code_number(&expected_error).expect("expected anchor error code");
    assert_eq!(actual_code, expected_code, "unexpected error variant: {err:?}");
}

pub(crate) fn error_code_number(err: &Error) -> Option<u32> {
    match err {
        Error::AnchorError(anchor_err) => Some(anchor_err.error_code_number),
        Error::ProgramError(_) => None,
    }
}
