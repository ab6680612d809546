// Staker Program Constants

// Escrow token account: [beef_mint] (no prefix, matches existing clients)

// Stake pool binding a beef mint to its stake mint: [STAKE_POOL_SEED, beef_mint]
pub const STAKE_POOL_SEED: &[u8] = b"stake_pool";

// Stake mint authority: [STAKE_MINT_AUTHORITY_SEED, beef_mint, stake_mint]
pub const STAKE_MINT_AUTHORITY_SEED: &[u8] = b"stake_mint_authority";

pub const ANCHOR_DISCRIMINATOR: usize = 8;
