#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod contexts;
use contexts::*;

pub mod errors;
pub mod events;
pub mod pda;
pub mod state;

pub use state::Escrow;

declare_id!("59GtTsmaBRiCQSLV1xBzsYCFRyZiuvvDKKuwaAEv7788");

#[program]
pub mod token_escrow {
    use super::*;

    /// Opens a trade: locks `deposit_amount` of mint A in the vault and
    /// records the `receive_amount` of mint B the maker wants back.
    pub fn make(
        ctx: Context<Make>,
        seed: u64,
        receive_amount: u64,
        deposit_amount: u64,
    ) -> Result<()> {
        ctx.accounts.validate(receive_amount, deposit_amount)?;
        ctx.accounts.save_escrow(seed, receive_amount, &ctx.bumps)?;
        ctx.accounts.deposit(deposit_amount)
    }

    /// Fulfills a trade. Pays the maker in mint B and releases the vault to the taker.
    pub fn exchange(ctx: Context<Exchange>) -> Result<()> {
        ctx.accounts.deposit()?;
        ctx.accounts.withdraw_and_close_vault()
    }

    /// Cancels a trade and returns the full deposit to the maker.
    pub fn refund(ctx: Context<Refund>) -> Result<()> {
        ctx.accounts.refund_and_close_vault()
    }
}
