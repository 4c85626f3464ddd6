//! Create-if-absent primitives over the Solana account model.
//!
//! Anchor's `init` constraint aborts with a generic "account already in use"
//! error when the target address is occupied. Vote records need that collision
//! surfaced as `AlreadyVoted`, so the cast-vote path pins the address with a
//! `seeds` constraint and performs creation itself through these helpers.

use crate::error::GovernanceError;
use crate::utils::constants::VOTE_RECORD_SEED;
use anchor_lang::error::ErrorCode;
use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};
use anchor_lang::Discriminator;
use bytemuck::Pod;
use core::mem::size_of;

/// Derives the vote record address for a (proposal, voter) pair.
///
/// Re-deriving with the same inputs always yields the same address, which is
/// what turns "create if absent" into "reject duplicate vote".
pub fn vote_record_address(proposal: &Pubkey, voter: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[VOTE_RECORD_SEED, proposal.as_ref(), voter.as_ref()],
        &crate::ID,
    )
}

/// An address is vacant while it is still system-owned and carries no data.
/// Lamports alone do not count: anyone can pre-fund an address they do not own.
#[inline(always)]
pub fn is_vacant(owner: &Pubkey, data_len: usize) -> bool {
    *owner == System::id() && data_len == 0
}

/// Allocates `space` bytes at a program-derived address and assigns it to
/// `program_id`, paying rent from `payer`.
///
/// Mirrors the two paths of Anchor's own `init`: a plain `create_account` for
/// an untouched address, and transfer/allocate/assign when the address was
/// already funded by someone else.
pub fn create_pda_account<'info>(
    target: &AccountInfo<'info>,
    payer: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    space: usize,
    signer_seeds: &[&[u8]],
    program_id: &Pubkey,
) -> Result<()> {
    require!(
        is_vacant(target.owner, target.data_len()),
        GovernanceError::AlreadyVoted
    );

    let rent_exempt = Rent::get()?.minimum_balance(space);
    let signer = &[signer_seeds];
    let current_lamports = target.lamports();

    if current_lamports == 0 {
        system_program::create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                CreateAccount {
                    from: payer.clone(),
                    to: target.clone(),
                },
                signer,
            ),
            rent_exempt,
            space as u64,
            program_id,
        )?;
        return Ok(());
    }

    let shortfall = rent_exempt.saturating_sub(current_lamports);
    if shortfall > 0 {
        system_program::transfer(
            CpiContext::new(
                system_program.clone(),
                Transfer {
                    from: payer.clone(),
                    to: target.clone(),
                },
            ),
            shortfall,
        )?;
    }

    system_program::allocate(
        CpiContext::new_with_signer(
            system_program.clone(),
            Allocate {
                account_to_allocate: target.clone(),
            },
            signer,
        ),
        space as u64,
    )?;

    system_program::assign(
        CpiContext::new_with_signer(
            system_program.clone(),
            Assign {
                account_to_assign: target.clone(),
            },
            signer,
        ),
        program_id,
    )?;

    Ok(())
}

/// Writes the Anchor discriminator followed by the raw zero-copy image of `value`.
pub fn write_zero_copy<T: Pod + Discriminator>(data: &mut [u8], value: &T) -> Result<()> {
    let header = T::DISCRIMINATOR.len();
    let end = header + size_of::<T>();
    require!(data.len() >= end, ErrorCode::AccountDidNotSerialize);

    data[..header].copy_from_slice(T::DISCRIMINATOR);
    data[header..end].copy_from_slice(bytemuck::bytes_of(value));
    Ok(())
}

/// Reads back an account image produced by `write_zero_copy` (or by `AccountLoader`).
pub fn read_zero_copy<T: Pod + Discriminator>(data: &[u8]) -> Result<T> {
    let header = T::DISCRIMINATOR.len();
    let end = header + size_of::<T>();
    require!(data.len() >= end, ErrorCode::AccountDidNotDeserialize);
    require!(
        &data[..header] == T::DISCRIMINATOR,
        ErrorCode::AccountDiscriminatorMismatch
    );

    Ok(bytemuck::pod_read_unaligned(&data[header..end]))
}
