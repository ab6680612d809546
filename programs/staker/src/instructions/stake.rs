// Stake Instruction
//
// Swaps $🐮 for $🥩 at 1:1.
// 1. Transfer `amount` beef from the user into the program beef token bag
// 2. Mint `amount` stake to the user, signed by the derived mint authority
//
// The user's stake token bag is created on first use.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, errors::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct Stake<'info> {
    // Pays for the stake token bag if it does not exist yet
    #[account(mut)]
    pub user: Signer<'info>,

    pub beef_mint: Box<Account<'info, Mint>>,

    #[account(
        seeds = [STAKE_POOL_SEED, beef_mint.key().as_ref()],
        bump = stake_pool.pool_bump,
        has_one = beef_mint @ StakerError::BeefMintMismatch,
    )]
    pub stake_pool: Box<Account<'info, StakePool>>,

    // MINTING 🥩 TO USERS
    #[account(
        mut,
        address = stake_pool.stake_mint @ StakerError::StakeMintMismatch,
    )]
    pub stake_mint: Box<Account<'info, Mint>>,

    /// CHECK: PDA signer for minting, never read
    #[account(
        seeds = [
            STAKE_MINT_AUTHORITY_SEED,
            beef_mint.key().as_ref(),
            stake_mint.key().as_ref(),
        ],
        bump = stake_pool.stake_mint_authority_bump,
    )]
    pub stake_mint_authority: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = stake_mint,
        associated_token::authority = user,
    )]
    pub user_stake_token_bag: Box<Account<'info, TokenAccount>>,

    // TRANSFERRING 🐮 FROM USERS
    #[account(
        mut,
        token::mint = beef_mint,
        token::authority = user,
    )]
    pub user_beef_token_bag: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [beef_mint.key().as_ref()],
        bump = stake_pool.beef_bag_bump,
        token::mint = beef_mint,
        token::authority = program_beef_token_bag,
    )]
    pub program_beef_token_bag: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> Stake<'info> {
    pub fn stake(
        &mut self,
        stake_mint_authority_bump: u8,
        program_beef_bag_bump: u8,
        amount: u64,
    ) -> Result<()> {
        require!(amount > 0, StakerError::ZeroAmount);

        require_canonical_bump(
            stake_mint_authority_bump,
            self.stake_pool.stake_mint_authority_bump,
        )?;
        require_canonical_bump(program_beef_bag_bump, self.stake_pool.beef_bag_bump)?;

        require!(
            self.user_beef_token_bag.amount >= amount,
            StakerError::InsufficientDeposit
        );

        let expected_escrow = checked_deposit(self.program_beef_token_bag.amount, amount)?;
        let expected_supply = checked_deposit(self.stake_mint.supply, amount)?;

        transfer_tokens(
            amount,
            &self.token_program.to_account_info(),
            &self.user_beef_token_bag.to_account_info(),
            &self.program_beef_token_bag.to_account_info(),
            &self.user.to_account_info(),
        )?;

        let beef_mint_key = self.beef_mint.key();
        let stake_mint_key = self.stake_mint.key();
        let authority_seeds = &[
            STAKE_MINT_AUTHORITY_SEED,
            beef_mint_key.as_ref(),
            stake_mint_key.as_ref(),
            &[stake_mint_authority_bump],
        ];

        mint_stake_tokens(
            amount,
            &self.token_program.to_account_info(),
            &self.stake_mint.to_account_info(),
            &self.user_stake_token_bag.to_account_info(),
            &self.stake_mint_authority.to_account_info(),
            authority_seeds,
        )?;

        self.program_beef_token_bag.reload()?;
        self.stake_mint.reload()?;

        require_eq!(
            self.program_beef_token_bag.amount,
            expected_escrow,
            StakerError::BackingViolated
        );
        require_eq!(
            self.stake_mint.supply,
            expected_supply,
            StakerError::BackingViolated
        );
        ensure_backed(self.stake_mint.supply, self.program_beef_token_bag.amount)?;

        msg!("Staked {} beef for {} stake", amount, amount);
        msg!("Beef token bag now holds {}", self.program_beef_token_bag.amount);

        Ok(())
    }
}
