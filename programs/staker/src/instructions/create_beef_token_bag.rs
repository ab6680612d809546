// Create Beef Token Bag Instruction
//
// Creates the program escrow for a beef mint and the stake pool that binds it
// to a single stake mint. The escrow is a token account at a PDA and is its
// own authority, so only this program can move funds out.
// There is exactly one per beef mint; a second call fails with "already in use".

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct CreateBeefTokenBag<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    pub beef_mint: Box<Account<'info, Mint>>,

    pub stake_mint: Box<Account<'info, Mint>>,

    /// CHECK: PDA that must already hold the stake mint authority
    #[account(
        seeds = [
            STAKE_MINT_AUTHORITY_SEED,
            beef_mint.key().as_ref(),
            stake_mint.key().as_ref(),
        ],
        bump,
    )]
    pub stake_mint_authority: UncheckedAccount<'info>,

    #[account(
        init,
        payer = payer,
        space = ANCHOR_DISCRIMINATOR + StakePool::INIT_SPACE,
        seeds = [STAKE_POOL_SEED, beef_mint.key().as_ref()],
        bump,
    )]
    pub stake_pool: Box<Account<'info, StakePool>>,

    #[account(
        init,
        payer = payer,
        seeds = [beef_mint.key().as_ref()],
        bump,
        token::mint = beef_mint,
        token::authority = program_beef_token_bag,
    )]
    pub program_beef_token_bag: Box<Account<'info, TokenAccount>>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}

impl<'info> CreateBeefTokenBag<'info> {
    pub fn create_beef_token_bag(&mut self, bumps: &CreateBeefTokenBagBumps) -> Result<()> {
        StakePool::assert_fresh_stake_mint(
            &self.beef_mint.key(),
            &self.stake_mint.key(),
            &self.stake_mint,
            &self.stake_mint_authority.key(),
        )?;

        self.stake_pool.set_inner(StakePool {
            beef_mint: self.beef_mint.key(),
            stake_mint: self.stake_mint.key(),
            pool_bump: bumps.stake_pool,
            beef_bag_bump: bumps.program_beef_token_bag,
            stake_mint_authority_bump: bumps.stake_mint_authority,
        });

        msg!(
            "Beef token bag {} created for mint {}",
            self.program_beef_token_bag.key(),
            self.beef_mint.key()
        );
        msg!("Bound to stake mint {}", self.stake_mint.key());

        Ok(())
    }
}
