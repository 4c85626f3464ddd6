//! The vote record address is a pure function of (proposal, voter), so its
//! occupancy is the only thing standing between a voter and a second tally.

use super::super::helpers::{assert_governance_error, deterministic_pubkey, GENESIS, ONE_SOL};
use super::ledger::{Ledger, StoredAccount};
use crate::error::GovernanceError;
use crate::state::proposal::Proposal;
use crate::state::vote_record::{VoteChoice, VoteRecord};
use crate::utils::account_store::{is_vacant, vote_record_address};
use crate::utils::constants::VOTE_RECORD_SEED;
use anchor_lang::prelude::{Pubkey, System};
use anchor_lang::Id;

const URI: &str = "https://example.com/proposal/guard";

fn staked_ledger(voters: &[Pubkey]) -> (Ledger, Vec<Pubkey>, Pubkey) {
    let mut ledger = Ledger::new(GENESIS);
    let mut stakes = Vec::with_capacity(voters.len());
    for (idx, voter) in voters.iter().enumerate() {
        ledger.airdrop(*voter, 100 * ONE_SOL);
        stakes.push(ledger.deposit_stake(*voter, (idx as u64 + 1) * ONE_SOL).unwrap());
    }
    let proposal_key = ledger
        .initialize_proposal(&stakes[0], voters[0], URI)
        .unwrap();
    (ledger, stakes, proposal_key)
}

#[test]
fn address_derivation_is_stable_and_pair_specific() {
    let proposal = deterministic_pubkey(10);
    let voter = deterministic_pubkey(11);
    let other_voter = deterministic_pubkey(12);
    let other_proposal = deterministic_pubkey(13);

    let (first, first_bump) = vote_record_address(&proposal, &voter);
    let (again, again_bump) = vote_record_address(&proposal, &voter);
    assert_eq!(first, again);
    assert_eq!(first_bump, again_bump);

    assert_ne!(first, vote_record_address(&proposal, &other_voter).0);
    assert_ne!(first, vote_record_address(&other_proposal, &voter).0);

    let expected = Pubkey::create_program_address(
        &[VOTE_RECORD_SEED, proposal.as_ref(), voter.as_ref(), &[first_bump]],
        &crate::ID,
    )
    .unwrap();
    assert_eq!(first, expected);
}

#[test]
fn vacancy_requires_system_owner_and_no_data() {
    assert!(is_vacant(&System::id(), 0));
    assert!(!is_vacant(&System::id(), 1));
    assert!(!is_vacant(&crate::ID, 0));
    assert!(!is_vacant(&crate::ID, 96));
}

#[test]
fn second_vote_is_rejected_and_tallies_unchanged() {
    let voter = deterministic_pubkey(14);
    let (mut ledger, stakes, proposal_key) = staked_ledger(&[voter]);

    ledger
        .cast_vote(&proposal_key, &stakes[0], voter, VoteChoice::Yes)
        .unwrap();
    let wallet_after_first = ledger.lamports(&voter);

    assert_governance_error(
        ledger.cast_vote(&proposal_key, &stakes[0], voter, VoteChoice::Yes),
        GovernanceError::AlreadyVoted,
    );
    assert_governance_error(
        ledger.cast_vote(&proposal_key, &stakes[0], voter, VoteChoice::No),
        GovernanceError::AlreadyVoted,
    );

    let proposal: Proposal = ledger.load(&proposal_key).unwrap();
    assert_eq!(proposal.yes_votes, ONE_SOL);
    assert_eq!(proposal.no_votes, 0);
    assert_eq!(proposal.voter_count, 1);
    assert_eq!(ledger.lamports(&voter), wallet_after_first);
}

#[test]
fn prefunded_record_address_still_accepts_first_vote() {
    let voter = deterministic_pubkey(15);
    let (mut ledger, stakes, proposal_key) = staked_ledger(&[voter]);

    let (record_key, _) = vote_record_address(&proposal_key, &voter);
    ledger.airdrop(record_key, 1_000);

    ledger
        .cast_vote(&proposal_key, &stakes[0], voter, VoteChoice::No)
        .unwrap();
    let record: VoteRecord = ledger.load(&record_key).unwrap();
    assert_eq!(record.vote_weight, ONE_SOL);
}

#[test]
fn occupied_record_address_blocks_vote() {
    let voter = deterministic_pubkey(16);
    let (mut ledger, stakes, proposal_key) = staked_ledger(&[voter]);

    let (record_key, _) = vote_record_address(&proposal_key, &voter);
    ledger.accounts.insert(
        record_key,
        StoredAccount {
            owner: crate::ID,
            lamports: 1,
            data: vec![0u8; 8],
        },
    );

    assert_governance_error(
        ledger.cast_vote(&proposal_key, &stakes[0], voter, VoteChoice::Yes),
        GovernanceError::AlreadyVoted,
    );
}

#[test]
fn each_voter_gets_one_record_per_proposal() {
    let voters = [
        deterministic_pubkey(17),
        deterministic_pubkey(18),
        deterministic_pubkey(19),
    ];
    let (mut ledger, stakes, proposal_key) = staked_ledger(&voters);
    let second_proposal = ledger
        .initialize_proposal(&stakes[1], voters[1], "ipfs://second")
        .unwrap();

    for (voter, stake) in voters.iter().zip(&stakes) {
        ledger
            .cast_vote(&proposal_key, stake, *voter, VoteChoice::Yes)
            .unwrap();
        ledger
            .cast_vote(&second_proposal, stake, *voter, VoteChoice::No)
            .unwrap();
    }

    let first: Proposal = ledger.load(&proposal_key).unwrap();
    let second: Proposal = ledger.load(&second_proposal).unwrap();
    assert_eq!(first.yes_votes, 6 * ONE_SOL);
    assert_eq!(second.no_votes, 6 * ONE_SOL);
    assert_eq!(first.voter_count, 3);
    assert_eq!(second.voter_count, 3);
}

#[test]
fn voting_with_someone_elses_stake_is_unauthorized() {
    let owner = deterministic_pubkey(20);
    let thief = deterministic_pubkey(21);
    let (mut ledger, stakes, proposal_key) = staked_ledger(&[owner]);
    ledger.airdrop(thief, ONE_SOL);

    assert_governance_error(
        ledger.cast_vote(&proposal_key, &stakes[0], thief, VoteChoice::Yes),
        GovernanceError::Unauthorized,
    );
    let proposal: Proposal = ledger.load(&proposal_key).unwrap();
    assert_eq!(proposal.voter_count, 0);
}
