use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, TokenAccount};

use crate::constants::{ASSET_LEDGER_SEED, SCHEDULE_SEED, VAULT_SEED};
use crate::error::AccountantError;
use crate::state::{AssetLedger, Schedule};
use crate::utils::vesting;

pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>) -> Result<()> {
    let st = &ctx.accounts.schedule;
    let now = Clock::get()?.unix_timestamp;

    // A mint that was never released or revoked has no ledger account yet;
    // quote it as a fresh entry.
    let (released, revoked) = ctx
        .accounts
        .asset_ledger
        .as_ref()
        .map(|l| (l.released, l.revoked))
        .unwrap_or((0, false));
    let ledger = AssetLedger {
        mint: ctx.accounts.mint.key(),
        released,
        revoked,
    };

    let balance = ctx.accounts.vault.amount;
    let vested = vesting::vested_amount(st, &ledger, balance, now)?;
    let releasable = vested
        .checked_sub(released)
        .ok_or(AccountantError::MathOverflow)?;

    emit!(VestingQuote {
        mint: ledger.mint,
        vested,
        released,
        releasable,
        revoked,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitVestingQuote<'info> {
    #[account(seeds = [SCHEDULE_SEED], bump)]
    pub schedule: Account<'info, Schedule>,

    #[account(
        seeds = [ASSET_LEDGER_SEED, schedule.key().as_ref(), mint.key().as_ref()],
        bump
    )]
    pub asset_ledger: Option<Account<'info, AssetLedger>>,

    #[account(
        seeds = [VAULT_SEED, schedule.key().as_ref(), mint.key().as_ref()],
        bump,
        constraint = vault.mint == mint.key() @ AccountantError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,
}

#[event]
pub struct VestingQuote {
    pub mint: Pubkey,
    pub vested: u64,
    pub released: u64,
    pub releasable: u64,
    pub revoked: bool,
}
