use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{ASSET_LEDGER_SEED, SCHEDULE_SEED, VAULT_SEED};
use crate::error::AccountantError;
use crate::state::{AssetLedger, Schedule};
use crate::utils::vesting;

pub fn release(ctx: Context<Release>) -> Result<()> {
    // Capture AccountInfos/keys before taking mutable borrows.
    let schedule_ai = ctx.accounts.schedule.to_account_info();
    let schedule_bump = ctx.bumps.schedule;
    let mint_key = ctx.accounts.mint.key();

    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.mint,
        mint_key,
        AccountantError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.owner,
        ctx.accounts.schedule.beneficiary,
        AccountantError::InvalidTokenAccount
    );

    let ledger = &mut ctx.accounts.asset_ledger;
    if ledger.mint == Pubkey::default() {
        // First interaction with this asset; the seeds bind the PDA to the mint.
        ledger.mint = mint_key;
    }

    let now = Clock::get()?.unix_timestamp;
    let balance = ctx.accounts.vault.amount;
    let unreleased =
        vesting::releasable_amount(&ctx.accounts.schedule, ledger, balance, now)?;
    require!(unreleased > 0, AccountantError::NothingToRelease);
    require!(
        balance >= unreleased,
        AccountantError::InsufficientVaultBalance
    );

    // Bookkeeping commits with the transfer or not at all; never the transfer
    // first (a retried transfer must not pay twice).
    ledger.released = ledger
        .released
        .checked_add(unreleased)
        .ok_or(AccountantError::MathOverflow)?;

    let signer_seeds: &[&[&[u8]]] = &[&[SCHEDULE_SEED, &[schedule_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.beneficiary_token_account.to_account_info(),
                authority: schedule_ai,
            },
            signer_seeds,
        ),
        unreleased,
    )?;

    emit!(Released {
        mint: mint_key,
        amount: unreleased,
        released_total: ledger.released,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Release<'info> {
    #[account(seeds = [SCHEDULE_SEED], bump)]
    pub schedule: Account<'info, Schedule>,

    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + AssetLedger::SIZE,
        seeds = [ASSET_LEDGER_SEED, schedule.key().as_ref(), mint.key().as_ref()],
        bump
    )]
    pub asset_ledger: Account<'info, AssetLedger>,

    #[account(
        mut,
        seeds = [VAULT_SEED, schedule.key().as_ref(), mint.key().as_ref()],
        bump,
        constraint = vault.mint == mint.key() @ AccountantError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    /// Anyone may trigger a release; funds only ever move to the beneficiary.
    /// The signer covers rent for the ledger on first touch.
    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct Released {
    pub mint: Pubkey,
    pub amount: u64,
    pub released_total: u64,
}
