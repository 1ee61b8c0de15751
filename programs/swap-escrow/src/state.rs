use anchor_lang::prelude::*;

/// Escrow account that stores the terms of one pending exchange.
/// Created by `make`, closed by whichever of `take`/`refund` runs first.
#[account]
#[derive(InitSpace)]
pub struct Escrow {
    /// Maker-chosen disambiguator so one maker can run several escrows;
    /// part of the PDA seeds
    pub seed: u64,
    /// Wallet that created the escrow and deposited Token A
    pub maker: Pubkey,
    /// Mint of the deposited token
    pub mint_a: Pubkey,
    /// Mint of the token the maker wants in return
    pub mint_b: Pubkey,
    /// Amount of Token B the maker must be paid
    pub receive: u64,
    /// Cached bump so later instructions can re-derive the PDA cheaply
    pub bump: u8,
}
