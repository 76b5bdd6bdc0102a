use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{ASSET_LEDGER_SEED, SCHEDULE_SEED, VAULT_SEED};
use crate::error::AccountantError;
use crate::state::{AssetLedger, Schedule};
use crate::utils::vesting;

pub fn revoke(ctx: Context<Revoke>) -> Result<()> {
    let schedule_ai = ctx.accounts.schedule.to_account_info();
    let schedule_bump = ctx.bumps.schedule;
    let mint_key = ctx.accounts.mint.key();

    let st = &ctx.accounts.schedule;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        AccountantError::Unauthorized
    );
    require!(st.revocable, AccountantError::NotRevocable);

    require_keys_eq!(
        ctx.accounts.owner_token_account.mint,
        mint_key,
        AccountantError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.owner_token_account.owner,
        st.owner,
        AccountantError::InvalidTokenAccount
    );

    let ledger = &mut ctx.accounts.asset_ledger;
    require!(!ledger.revoked, AccountantError::AlreadyRevoked);
    if ledger.mint == Pubkey::default() {
        ledger.mint = mint_key;
    }

    let now = Clock::get()?.unix_timestamp;
    let balance = ctx.accounts.vault.amount;
    let unreleased = vesting::releasable_amount(st, ledger, balance, now)?;
    // Everything not yet vested goes back to the owner; the vested-but-unpaid
    // remainder stays in the vault, claimable through a later release.
    let refund = balance
        .checked_sub(unreleased)
        .ok_or(AccountantError::MathOverflow)?;

    ledger.revoked = true;

    if refund > 0 {
        let signer_seeds: &[&[&[u8]]] = &[&[SCHEDULE_SEED, &[schedule_bump]]];
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: ctx.accounts.owner_token_account.to_account_info(),
                    authority: schedule_ai,
                },
                signer_seeds,
            ),
            refund,
        )?;
    }

    emit!(Revoked {
        mint: mint_key,
        refund,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Revoke<'info> {
    #[account(seeds = [SCHEDULE_SEED], bump)]
    pub schedule: Account<'info, Schedule>,

    #[account(
        init_if_needed,
        payer = owner,
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
    pub owner_token_account: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct Revoked {
    pub mint: Pubkey,
    pub refund: u64,
}
