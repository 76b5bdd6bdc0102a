use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{SCHEDULE_SEED, VAULT_SEED};
use crate::error::AccountantError;
use crate::state::Schedule;

pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    require!(amount > 0, AccountantError::InvalidAmount);

    require_keys_eq!(
        ctx.accounts.depositor_token_account.mint,
        ctx.accounts.mint.key(),
        AccountantError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.depositor_token_account.owner,
        ctx.accounts.depositor.key(),
        AccountantError::InvalidTokenAccount
    );

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.depositor_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.depositor.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.vault.reload()?;

    emit!(TokensDeposited {
        mint: ctx.accounts.mint.key(),
        depositor: ctx.accounts.depositor.key(),
        amount,
        vault_balance: ctx.accounts.vault.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(seeds = [SCHEDULE_SEED], bump)]
    pub schedule: Account<'info, Schedule>,

    #[account(
        init_if_needed,
        payer = depositor,
        token::mint = mint,
        token::authority = schedule,
        seeds = [VAULT_SEED, schedule.key().as_ref(), mint.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub depositor_token_account: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub depositor: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct TokensDeposited {
    pub mint: Pubkey,
    pub depositor: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
