// Beef Staker Program
//
// Swaps $🐮 (beef) for $🥩 (stake) at a fixed 1:1 rate.
// Deposited beef is pooled in a single program-owned token bag per beef mint;
// a user's claim on the pool is their stake balance. Each bag is bound to one
// stake mint when it is created.
//
// Instructions:
// - create_beef_token_bag: Create the program escrow and bind the stake mint
// - stake: Lock beef in the escrow, mint the same amount of stake
// - unstake: Burn stake, release the same amount of beef

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod helpers;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("94Xr8aghzD861G7R1znVDDsJ1tjxiktCpTkox1renGZm");

#[program]
pub mod staker {
    use super::*;

    pub fn create_beef_token_bag(ctx: Context<CreateBeefTokenBag>) -> Result<()> {
        ctx.accounts.create_beef_token_bag(&ctx.bumps)
    }

    // Both bumps are the caller's view of the canonical PDAs and are checked
    // against the bumps recorded in the stake pool
    pub fn stake(
        ctx: Context<Stake>,
        stake_mint_authority_bump: u8,
        program_beef_bag_bump: u8,
        amount: u64,
    ) -> Result<()> {
        ctx.accounts.stake(
            stake_mint_authority_bump,
            program_beef_bag_bump,
            amount,
        )
    }

    pub fn unstake(ctx: Context<Unstake>, program_beef_bag_bump: u8, amount: u64) -> Result<()> {
        ctx.accounts.unstake(program_beef_bag_bump, amount)
    }
}
