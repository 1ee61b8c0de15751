use anchor_lang::prelude::*;

mod errors;
mod instructions;
mod state;

use instructions::*;

declare_id!("8pAya1yV3Qq3vtuRnLDyBw1pgvWKhopJKVKpZTFubEkc");

#[program]
pub mod swap_escrow {
    use super::*;

    /// Open a new escrow: the maker deposits Token A and records how much
    /// Token B it wants in return
    pub fn make(ctx: Context<Make>, seed: u64, receive: u64, amount: u64) -> Result<()> {
        instructions::make::handler(ctx, seed, receive, amount)
    }

    /// Settle the escrow: the taker pays the recorded amount of Token B to
    /// the maker and receives the full vault balance of Token A
    pub fn take(ctx: Context<Take>, amount: u64) -> Result<()> {
        instructions::take::handler(ctx, amount)
    }

    /// Cancel the escrow: the maker reclaims the deposited Token A
    pub fn refund(ctx: Context<Refund>) -> Result<()> {
        instructions::refund::handler(ctx)
    }
}
