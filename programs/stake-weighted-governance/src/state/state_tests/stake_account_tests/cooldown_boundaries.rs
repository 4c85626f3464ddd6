//! Boundary tests for the unstake cooldown gate.
//!
//! The claim gate is `now >= unstake_timestamp + UNSTAKE_COOLDOWN`. These tests
//! pin the exact second the gate opens and check that the cooldown arithmetic
//! refuses to wrap for timestamps near `i64::MAX`.

use super::super::helpers::{
    assert_governance_error, deterministic_pubkey, staked_fixture, GENESIS, ONE_SOL,
};
use crate::error::GovernanceError;
use crate::utils::constants::UNSTAKE_COOLDOWN;

#[test]
fn cooldown_is_five_days() {
    assert_eq!(UNSTAKE_COOLDOWN, 432_000);
    assert_eq!(UNSTAKE_COOLDOWN, 5 * 24 * 3600);
}

#[test]
fn claim_one_second_early_is_rejected() {
    let mut stake = staked_fixture(deterministic_pubkey(20), ONE_SOL, GENESIS);
    stake.request_unstake(GENESIS).expect("request");

    assert_governance_error(
        stake.claim_unstake(GENESIS + UNSTAKE_COOLDOWN - 1),
        GovernanceError::CooldownNotPassed,
    );
    // Rejected claims leave the pending request intact.
    assert!(stake.is_unstake_requested());
    assert_eq!(stake.staked_amount, ONE_SOL);
}

#[test]
fn claim_at_exact_boundary_succeeds() {
    let mut stake = staked_fixture(deterministic_pubkey(21), ONE_SOL, GENESIS);
    stake.request_unstake(GENESIS).expect("request");

    let released = stake
        .claim_unstake(GENESIS + UNSTAKE_COOLDOWN)
        .expect("claim at boundary");
    assert_eq!(released, ONE_SOL);
}

#[test]
fn immediate_claim_is_rejected() {
    let mut stake = staked_fixture(deterministic_pubkey(22), ONE_SOL, GENESIS);
    stake.request_unstake(GENESIS + 5).expect("request");

    assert_governance_error(
        stake.claim_unstake(GENESIS + 5),
        GovernanceError::CooldownNotPassed,
    );
}

#[test]
fn cooldown_counts_from_request_not_deposit() {
    let mut stake = staked_fixture(deterministic_pubkey(23), ONE_SOL, GENESIS);
    let requested_at = GENESIS + 30 * 24 * 3600;
    stake.request_unstake(requested_at).expect("request");

    assert_governance_error(
        stake.claim_unstake(GENESIS + UNSTAKE_COOLDOWN),
        GovernanceError::CooldownNotPassed,
    );
    assert!(stake.claim_unstake(requested_at + UNSTAKE_COOLDOWN).is_ok());
}

#[test]
fn cooldown_overflow_is_reported_not_wrapped() {
    let mut stake = staked_fixture(deterministic_pubkey(24), ONE_SOL, GENESIS);
    stake.request_unstake(i64::MAX - 1).expect("request");

    assert_governance_error(stake.claimable_at(), GovernanceError::MathOverflow);
    assert_governance_error(
        stake.claim_unstake(i64::MAX),
        GovernanceError::MathOverflow,
    );
    assert!(stake.is_unstake_requested());
}
