use anchor_lang::prelude::*;

#[error_code]
pub enum StakerError {
    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Not enough beef in the user token bag")]
    InsufficientDeposit,

    #[msg("Not enough stake in the user token bag")]
    InsufficientReward,

    #[msg("Program beef token bag cannot cover this redemption")]
    InsufficientEscrow,

    #[msg("Supplied bump does not match the canonical PDA bump")]
    InvalidBump,

    #[msg("Stake mint is not controlled by the program mint authority")]
    InvalidMintAuthority,

    #[msg("Beef mint and stake mint must be different")]
    IdenticalMints,

    #[msg("Stake mint must not have a freeze authority")]
    StakeMintFreezable,

    #[msg("Stake mint already has supply")]
    StakeMintNotEmpty,

    #[msg("Beef mint does not belong to this stake pool")]
    BeefMintMismatch,

    #[msg("Stake mint does not belong to this stake pool")]
    StakeMintMismatch,

    #[msg("Stake supply exceeds the beef held in escrow")]
    BackingViolated,

    #[msg("Arithmetic overflow occurred")]
    Overflow,
}
