use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("BikNkxdA6uYgnaPppTZRRqBb5EynvwYQtcMuXTcCX8oX");

#[program]
pub mod timelock_vesting {
    use super::*;

    /// Create the singleton vesting schedule. All parameters are immutable
    /// afterwards.
    pub fn initialize_schedule(
        ctx: Context<InitializeSchedule>,
        beneficiary: Pubkey,
        start_ts: i64,
        cliff_offset: i64,
        duration: i64,
        revocable: bool,
    ) -> Result<()> {
        instructions::initialize_schedule::initialize_schedule(
            ctx,
            beneficiary,
            start_ts,
            cliff_offset,
            duration,
            revocable,
        )
    }

    /// Move tokens of `mint` into the per-mint escrow vault.
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::deposit(ctx, amount)
    }

    /// Pay out everything currently releasable for `mint` to the beneficiary.
    pub fn release(ctx: Context<Release>) -> Result<()> {
        instructions::release::release(ctx)
    }

    /// Owner-only: stop future vesting for `mint` and refund the unvested
    /// remainder to the owner.
    pub fn revoke(ctx: Context<Revoke>) -> Result<()> {
        instructions::revoke::revoke(ctx)
    }

    /// Read-only quote of the vested/released/releasable amounts for `mint`.
    pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>) -> Result<()> {
        instructions::emit_vesting_quote::emit_vesting_quote(ctx)
    }
}
