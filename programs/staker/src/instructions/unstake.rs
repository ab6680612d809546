// Unstake Instruction
//
// Redeems $🥩 for $🐮 at 1:1.
// 1. Burn `amount` stake from the user
// 2. Transfer `amount` beef from the program beef token bag back to the user

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, errors::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct Unstake<'info> {
    pub user: Signer<'info>,

    pub beef_mint: Box<Account<'info, Mint>>,

    #[account(
        seeds = [STAKE_POOL_SEED, beef_mint.key().as_ref()],
        bump = stake_pool.pool_bump,
        has_one = beef_mint @ StakerError::BeefMintMismatch,
    )]
    pub stake_pool: Box<Account<'info, StakePool>>,

    // BURNING USER'S 🥩
    #[account(
        mut,
        address = stake_pool.stake_mint @ StakerError::StakeMintMismatch,
    )]
    pub stake_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        token::mint = stake_mint,
        token::authority = user,
    )]
    pub user_stake_token_bag: Box<Account<'info, TokenAccount>>,

    // TRANSFER 🐮 TO USERS
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
}

impl<'info> Unstake<'info> {
    pub fn unstake(&mut self, program_beef_bag_bump: u8, amount: u64) -> Result<()> {
        require!(amount > 0, StakerError::ZeroAmount);

        require_canonical_bump(program_beef_bag_bump, self.stake_pool.beef_bag_bump)?;

        require!(
            self.user_stake_token_bag.amount >= amount,
            StakerError::InsufficientReward
        );
        require!(
            self.program_beef_token_bag.amount >= amount,
            StakerError::InsufficientEscrow
        );

        burn_stake_tokens(
            amount,
            &self.token_program.to_account_info(),
            &self.stake_mint.to_account_info(),
            &self.user_stake_token_bag.to_account_info(),
            &self.user.to_account_info(),
        )?;

        let beef_mint_key = self.beef_mint.key();
        let escrow_seeds: &[&[u8]] = &[beef_mint_key.as_ref(), &[program_beef_bag_bump]];

        transfer_from_escrow(
            amount,
            &self.token_program.to_account_info(),
            &self.program_beef_token_bag.to_account_info(),
            &self.user_beef_token_bag.to_account_info(),
            escrow_seeds,
        )?;

        self.program_beef_token_bag.reload()?;
        self.stake_mint.reload()?;
        ensure_backed(self.stake_mint.supply, self.program_beef_token_bag.amount)?;

        msg!("Redeemed {} stake for {} beef", amount, amount);
        msg!("Beef token bag now holds {}", self.program_beef_token_bag.amount);

        Ok(())
    }
}
