// Staker Helper Functions
//
// Invariant checks and token CPI wrappers shared by stake and unstake.

use anchor_lang::prelude::*;
use anchor_spl::token::{Burn, MintTo, Transfer, burn, mint_to, transfer};

use crate::errors::*;

// VALIDATION HELPERS

// Caller-supplied bumps must be the canonical ones found by find_program_address
pub fn require_canonical_bump(supplied: u8, canonical: u8) -> Result<()> {
    require_eq!(supplied, canonical, StakerError::InvalidBump);
    Ok(())
}

// Every stake token in circulation is backed by one beef in escrow
pub fn ensure_backed(stake_supply: u64, escrow_balance: u64) -> Result<()> {
    require!(stake_supply <= escrow_balance, StakerError::BackingViolated);
    Ok(())
}

// Balance after a deposit, rejecting wrap-around
pub fn checked_deposit(balance: u64, amount: u64) -> Result<u64> {
    balance
        .checked_add(amount)
        .ok_or_else(|| error!(StakerError::Overflow))
}

// CPI HELPERS

// Move tokens out of an account the signer owns
pub fn transfer_tokens<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
) -> Result<()> {
    transfer(
        CpiContext::new(
            token_program.clone(),
            Transfer {
                from: from.clone(),
                to: to.clone(),
                authority: authority.clone(),
            },
        ),
        amount,
    )
}

// Move tokens out of the escrow; the escrow is its own authority
pub fn transfer_from_escrow<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    escrow: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    escrow_seeds: &[&[u8]],
) -> Result<()> {
    let signer_seeds = &[escrow_seeds];

    transfer(
        CpiContext::new_with_signer(
            token_program.clone(),
            Transfer {
                from: escrow.clone(),
                to: to.clone(),
                authority: escrow.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}

// Mint stake tokens, signed by the derived mint authority
pub fn mint_stake_tokens<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    mint: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    authority_seeds: &[&[u8]],
) -> Result<()> {
    let signer_seeds = &[authority_seeds];

    mint_to(
        CpiContext::new_with_signer(
            token_program.clone(),
            MintTo {
                mint: mint.clone(),
                to: to.clone(),
                authority: authority.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}

// Burn stake tokens held by the signer
pub fn burn_stake_tokens<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    mint: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
) -> Result<()> {
    burn(
        CpiContext::new(
            token_program.clone(),
            Burn {
                mint: mint.clone(),
                from: from.clone(),
                authority: authority.clone(),
            },
        ),
        amount,
    )
}
