// Stake Pool State
//
// One per beef mint. Records the only stake mint that may be minted against
// or redeemed from that beef mint's escrow.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::Mint;

use crate::errors::*;

#[account]
#[derive(InitSpace)]
pub struct StakePool {
    pub beef_mint: Pubkey,
    pub stake_mint: Pubkey,
    pub pool_bump: u8,
    pub beef_bag_bump: u8,
    pub stake_mint_authority_bump: u8,
}

impl StakePool {
    // A stake mint can back a pool only if the program alone can ever mint it
    // and nothing has been minted yet
    pub fn assert_fresh_stake_mint(
        beef_mint: &Pubkey,
        stake_mint_key: &Pubkey,
        stake_mint: &Mint,
        stake_mint_authority: &Pubkey,
    ) -> Result<()> {
        require_keys_neq!(*beef_mint, *stake_mint_key, StakerError::IdenticalMints);
        require!(
            stake_mint.mint_authority == COption::Some(*stake_mint_authority),
            StakerError::InvalidMintAuthority
        );
        require!(
            stake_mint.freeze_authority.is_none(),
            StakerError::StakeMintFreezable
        );
        require!(stake_mint.supply == 0, StakerError::StakeMintNotEmpty);
        Ok(())
    }
}
